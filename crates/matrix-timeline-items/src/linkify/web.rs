// Copyright 2026 The Matrix.org Foundation C.I.C.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use super::{LinkAnnotator, annotate};
use crate::styled_text::{SpanStyle, StyledText};

static WEB_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\b(?:(?:https?|ftp)://|www\.)[^\s<>"]+"#).expect("valid URL regex")
});

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b[a-z0-9._%+\-]+@[a-z0-9\-]+(?:\.[a-z0-9\-]+)*\.[a-z]{2,}\b")
        .expect("valid e-mail regex")
});

static PHONE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+[0-9][0-9 \-]{5,}[0-9]").expect("valid phone number regex"));

/// Marks web URLs, e-mail addresses and international phone numbers.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebLinkifier;

impl WebLinkifier {
    fn web_url(matched: &str, force_https: bool) -> Option<SpanStyle> {
        let has_scheme = matched.contains("://");
        let url = if has_scheme {
            matched.to_owned()
        } else if force_https {
            format!("https://{matched}")
        } else {
            format!("http://{matched}")
        };

        // Drop candidates like `http://` on their own.
        let parsed = Url::parse(&url).ok()?;
        parsed.host_str()?;

        Some(SpanStyle::Link { url })
    }

    fn phone_number(matched: &str) -> SpanStyle {
        let digits: String = matched.chars().filter(|c| *c == '+' || c.is_ascii_digit()).collect();
        SpanStyle::Link { url: format!("tel:{digits}") }
    }
}

impl LinkAnnotator for WebLinkifier {
    fn add_links(&self, text: StyledText, force_https: bool) -> StyledText {
        let text = annotate(text, &WEB_URL, |matched| Self::web_url(matched, force_https));
        let text = annotate(text, &EMAIL, |matched| {
            Some(SpanStyle::Link { url: format!("mailto:{matched}") })
        });
        annotate(text, &PHONE_NUMBER, |matched| Some(Self::phone_number(matched)))
    }
}

#[cfg(test)]
mod tests {
    use super::WebLinkifier;
    use crate::{
        linkify::LinkAnnotator,
        styled_text::{Span, SpanStyle, StyledText},
    };

    fn links(body: &str, force_https: bool) -> Vec<(String, String)> {
        let text = WebLinkifier.add_links(StyledText::plain(body), force_https);
        text.spans()
            .iter()
            .map(|span| {
                let SpanStyle::Link { url } = &span.style else {
                    panic!("unexpected span {span:?}");
                };
                (text.text()[span.range.clone()].to_owned(), url.clone())
            })
            .collect()
    }

    #[test]
    fn test_urls_with_scheme_are_kept_verbatim() {
        assert_eq!(
            links("read http://example.org/a?b=c.", true),
            [("http://example.org/a?b=c".to_owned(), "http://example.org/a?b=c".to_owned())]
        );
    }

    #[test]
    fn test_scheme_less_urls() {
        assert_eq!(
            links("go to www.example.org!", true),
            [("www.example.org".to_owned(), "https://www.example.org".to_owned())]
        );
        assert_eq!(
            links("go to www.example.org!", false),
            [("www.example.org".to_owned(), "http://www.example.org".to_owned())]
        );
    }

    #[test]
    fn test_parentheses() {
        assert_eq!(
            links("(see https://en.wikipedia.org/wiki/Rust_(language))", true),
            [(
                "https://en.wikipedia.org/wiki/Rust_(language)".to_owned(),
                "https://en.wikipedia.org/wiki/Rust_(language)".to_owned()
            )]
        );
    }

    #[test]
    fn test_email_and_phone_number() {
        assert_eq!(
            links("mail bob@example.org or call +44 20 7946 0958", true),
            [
                ("bob@example.org".to_owned(), "mailto:bob@example.org".to_owned()),
                ("+44 20 7946 0958".to_owned(), "tel:+442079460958".to_owned()),
            ]
        );
    }

    #[test]
    fn test_matrix_user_id_is_not_an_email() {
        assert!(links("@alice:example.org", true).is_empty());
    }

    #[test]
    fn test_existing_links_are_kept() {
        let text = StyledText::plain("https://example.org")
            .with_style(SpanStyle::Link { url: "https://other.example.org".to_owned() });

        let text = WebLinkifier.add_links(text, true);
        assert_eq!(
            text.spans(),
            &[Span::new(0..19, SpanStyle::Link { url: "https://other.example.org".to_owned() })]
        );
    }
}

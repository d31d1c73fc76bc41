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

//! Link annotation passes.
//!
//! Message bodies go through two passes, in this order:
//!
//! 1. a [`PermalinkAnnotator`] marks Matrix identifiers and `matrix.to`
//!    permalinks,
//! 2. a [`LinkAnnotator`] marks the remaining web URLs, e-mail addresses and
//!    phone numbers.
//!
//! A pass never adds a link over a range that is already linked, so running
//! the permalink pass first guarantees that permalinks keep their dedicated
//! span.

mod matrix;
mod web;

use std::ops::Range;

use regex::Regex;

pub use self::{matrix::MatrixLinkifier, web::WebLinkifier};
use crate::styled_text::{SpanStyle, StyledText};

/// Marks Matrix identifiers and permalinks with [`SpanStyle::Permalink`].
pub trait PermalinkAnnotator: Send + Sync {
    fn add_links(&self, text: StyledText) -> StyledText;
}

/// Marks generic links with [`SpanStyle::Link`].
pub trait LinkAnnotator: Send + Sync {
    /// When `force_https` is set, links without a scheme point to `https://`
    /// instead of `http://`.
    fn add_links(&self, text: StyledText, force_https: bool) -> StyledText;
}

/// Characters that end a sentence rather than a link.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ':', ';', '!', '?', '\'', '"', '-'];

/// Shrink `range` so that it doesn't end with punctuation, or with a closing
/// parenthesis that isn't opened in the link itself.
fn trim_trailing_punctuation(text: &str, mut range: Range<usize>) -> Range<usize> {
    loop {
        let candidate = &text[range.clone()];
        let Some(last) = candidate.chars().next_back() else {
            return range;
        };

        let unbalanced_paren = last == ')'
            && candidate.matches('(').count() < candidate.matches(')').count();

        if TRAILING_PUNCTUATION.contains(&last) || unbalanced_paren {
            range.end -= last.len_utf8();
        } else {
            return range;
        }
    }
}

/// Add a span for every match of `regex` that doesn't overlap an existing
/// link. `make_style` maps the matched text to the span style, or `None` to
/// skip the match.
fn annotate(
    text: StyledText,
    regex: &Regex,
    make_style: impl Fn(&str) -> Option<SpanStyle>,
) -> StyledText {
    let ranges: Vec<_> = regex
        .find_iter(text.text())
        .map(|m| trim_trailing_punctuation(text.text(), m.range()))
        .filter(|range| !range.is_empty())
        .collect();

    ranges.into_iter().fold(text, |text, range| {
        if text.has_link_in(&range) {
            return text;
        }

        match make_style(&text.text()[range.clone()]) {
            Some(style) => text.with_span(range, style),
            None => text,
        }
    })
}

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

use super::{PermalinkAnnotator, annotate};
use crate::styled_text::{SpanStyle, StyledText};

static PERMALINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)https://matrix\.to/#/[@!#$+][^\s<>"]*"#).expect("valid permalink regex")
});

/// User IDs, room aliases, room IDs and server-qualified event IDs.
static IDENTIFIERS: Lazy<[Regex; 4]> = Lazy::new(|| {
    const SERVER: &str = r":[a-z0-9.\-]+(?::[0-9]{2,5})?";

    [
        format!(r"(?i)@[a-z0-9._=\-/+]+{SERVER}"),
        format!(r"(?i)#[a-z0-9._%#@=+\-]+{SERVER}"),
        format!(r"(?i)![a-z0-9]+{SERVER}"),
        format!(r"(?i)\$[a-z0-9/+_\-]+{SERVER}"),
    ]
    .map(|pattern| Regex::new(&pattern).expect("valid identifier regex"))
});

/// Marks `matrix.to` permalinks and bare Matrix identifiers.
///
/// The permalink URL of a bare identifier is the identifier itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct MatrixLinkifier;

impl PermalinkAnnotator for MatrixLinkifier {
    fn add_links(&self, text: StyledText) -> StyledText {
        let permalink = |url: &str| Some(SpanStyle::Permalink { url: url.to_owned() });

        let text = annotate(text, &PERMALINK, permalink);
        IDENTIFIERS.iter().fold(text, |text, regex| annotate(text, regex, permalink))
    }
}

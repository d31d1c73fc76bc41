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

//! Rich text represented as a plain string plus position-based markup.
//!
//! Every operation consumes the value and returns a new one, so annotation
//! passes can be chained without sharing a mutable buffer.

use std::{fmt, ops::Range};

use serde::Serialize;

/// A colour, as a packed `0xAARRGGBB` value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Color(pub u32);

/// The markup attached to a [`Span`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SpanStyle {
    Bold,
    Italic,
    Strikethrough,
    Code,
    /// Text colour.
    Foreground(Color),
    /// Text size, in pixels.
    AbsoluteSize(u32),
    /// A Matrix identifier or a `matrix.to` permalink.
    Permalink { url: String },
    /// A web URL, an e-mail address or a phone number.
    Link { url: String },
    /// The trailing "(edited)" marker of an edited message.
    EditedDecoration,
}

impl SpanStyle {
    /// Whether this span points somewhere, i.e. is a [`SpanStyle::Permalink`]
    /// or a [`SpanStyle::Link`].
    pub fn is_link(&self) -> bool {
        matches!(self, Self::Permalink { .. } | Self::Link { .. })
    }

    /// Whether a click on this span should be reported.
    pub fn is_clickable(&self) -> bool {
        self.is_link() || matches!(self, Self::EditedDecoration)
    }
}

/// A styled byte range of a [`StyledText`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Span {
    pub range: Range<usize>,
    pub style: SpanStyle,
}

impl Span {
    pub fn new(range: Range<usize>, style: SpanStyle) -> Self {
        Self { range, style }
    }

    fn overlaps(&self, range: &Range<usize>) -> bool {
        self.range.start < range.end && range.start < self.range.end
    }
}

/// A string with styled ranges.
///
/// Span ranges are byte offsets into [`StyledText::text`] and always lie on
/// `char` boundaries. Spans are kept in insertion order; when they overlap,
/// later spans are drawn on top of earlier ones.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StyledText {
    text: String,
    spans: Vec<Span>,
}

impl StyledText {
    /// Text without any markup.
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), spans: Vec::new() }
    }

    /// Text with the given spans. Spans that don't fit the text are dropped.
    pub fn new(text: impl Into<String>, spans: impl IntoIterator<Item = Span>) -> Self {
        spans
            .into_iter()
            .fold(Self::plain(text), |styled, span| styled.with_span(span.range, span.style))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn into_parts(self) -> (String, Vec<Span>) {
        (self.text, self.spans)
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Length in UTF-16 code units, the unit most UI toolkits measure text in.
    pub fn utf16_len(&self) -> usize {
        self.text.encode_utf16().count()
    }

    /// Add a span over `range`.
    ///
    /// Empty ranges, ranges past the end of the text and ranges that don't
    /// fall on `char` boundaries are ignored.
    pub fn with_span(mut self, range: Range<usize>, style: SpanStyle) -> Self {
        if self.is_valid_range(&range) {
            self.spans.push(Span { range, style });
        }
        self
    }

    /// Add a span covering the whole text.
    pub fn with_style(self, style: SpanStyle) -> Self {
        let range = 0..self.text.len();
        self.with_span(range, style)
    }

    /// Concatenate `other` after `self`, shifting its spans accordingly.
    pub fn append(mut self, other: StyledText) -> Self {
        let offset = self.text.len();
        self.text.push_str(&other.text);
        self.spans.extend(other.spans.into_iter().map(|span| Span {
            range: span.range.start + offset..span.range.end + offset,
            style: span.style,
        }));
        self
    }

    /// Concatenate plain text after `self`.
    pub fn append_str(mut self, text: &str) -> Self {
        self.text.push_str(text);
        self
    }

    /// Insert plain text in front of `self`, shifting the existing spans.
    pub fn prepend_str(self, text: &str) -> Self {
        Self::plain(text).append(self)
    }

    /// Spans covering the byte at `offset`, topmost first.
    pub fn spans_at(&self, offset: usize) -> impl Iterator<Item = &Span> {
        self.spans.iter().rev().filter(move |span| span.range.contains(&offset))
    }

    /// Whether a link span already covers part of `range`.
    pub fn has_link_in(&self, range: &Range<usize>) -> bool {
        self.spans.iter().any(|span| span.style.is_link() && span.overlaps(range))
    }

    fn is_valid_range(&self, range: &Range<usize>) -> bool {
        range.start < range.end
            && range.end <= self.text.len()
            && self.text.is_char_boundary(range.start)
            && self.text.is_char_boundary(range.end)
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for StyledText {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}

impl From<String> for StyledText {
    fn from(text: String) -> Self {
        Self::plain(text)
    }
}

/// Renders the HTML `formatted_body` of messages.
pub trait HtmlRenderer: Send + Sync {
    fn render(&self, formatted_body: &str) -> StyledText;
}

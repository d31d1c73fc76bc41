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

use unicode_segmentation::UnicodeSegmentation;

/// Decides whether a text only consists of emojis.
pub trait EmojiChecker: Send + Sync {
    fn contains_only_emojis(&self, text: &str) -> bool;
}

/// Checks every grapheme of the trimmed text against the Unicode emoji list.
///
/// Empty or blank texts don't count as emoji-only.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnicodeEmojiChecker;

impl EmojiChecker for UnicodeEmojiChecker {
    fn contains_only_emojis(&self, text: &str) -> bool {
        let mut graphemes = text.trim().graphemes(true).peekable();
        graphemes.peek().is_some() && graphemes.all(|g| emojis::get(g).is_some())
    }
}

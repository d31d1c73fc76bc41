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

use std::sync::Arc;

use super::{
    DEFAULT_EDITED_SUFFIX_SIZE_SP, DefaultNoticeItemFactory, MessageItemFactory, NoticeItemFactory,
};
use crate::{
    content::{ContentResolver, LatestEditResolver},
    emoji::{EmojiChecker, UnicodeEmojiChecker},
    information::{DefaultInformationDataFactory, InformationDataFactory},
    linkify::{LinkAnnotator, MatrixLinkifier, PermalinkAnnotator, WebLinkifier},
    media::{FixedMediaSizeProvider, LocalFileChecker, MediaSizeProvider, UrlLocalFileChecker},
    resources::{
        ColorProvider, DefaultColorProvider, DimensionConverter, EnglishStringProvider,
        IdentityDimensionConverter, StringProvider,
    },
    styled_text::HtmlRenderer,
};

/// Builder that allows replacing the collaborators of a
/// [`MessageItemFactory`].
///
/// Every collaborator has a default, see [`MessageItemFactoryBuilder::new`].
#[must_use]
pub struct MessageItemFactoryBuilder {
    content_resolver: Arc<dyn ContentResolver>,
    information_data_factory: Arc<dyn InformationDataFactory>,
    notice_item_factory: Arc<dyn NoticeItemFactory>,
    html_renderer: Option<Arc<dyn HtmlRenderer>>,
    permalink_annotator: Arc<dyn PermalinkAnnotator>,
    link_annotator: Arc<dyn LinkAnnotator>,
    media_size_provider: Arc<dyn MediaSizeProvider>,
    local_file_checker: Arc<dyn LocalFileChecker>,
    emoji_checker: Arc<dyn EmojiChecker>,
    color_provider: Arc<dyn ColorProvider>,
    dimension_converter: Arc<dyn DimensionConverter>,
    string_provider: Arc<dyn StringProvider>,
    edited_suffix_size_sp: u32,
}

impl MessageItemFactoryBuilder {
    /// A builder with the defaults:
    ///
    /// - edits replace the original content ([`LatestEditResolver`]),
    /// - formatted bodies are ignored, until an [`HtmlRenderer`] is set,
    /// - [`MatrixLinkifier`] and [`WebLinkifier`] for links,
    /// - media are displayed at most 640×480 pixels,
    /// - English strings and the default light theme colours.
    pub fn new() -> Self {
        Self {
            content_resolver: Arc::new(LatestEditResolver),
            information_data_factory: Arc::new(DefaultInformationDataFactory),
            notice_item_factory: Arc::new(DefaultNoticeItemFactory),
            html_renderer: None,
            permalink_annotator: Arc::new(MatrixLinkifier),
            link_annotator: Arc::new(WebLinkifier),
            media_size_provider: Arc::new(FixedMediaSizeProvider::default()),
            local_file_checker: Arc::new(UrlLocalFileChecker),
            emoji_checker: Arc::new(UnicodeEmojiChecker),
            color_provider: Arc::new(DefaultColorProvider),
            dimension_converter: Arc::new(IdentityDimensionConverter),
            string_provider: Arc::new(EnglishStringProvider),
            edited_suffix_size_sp: DEFAULT_EDITED_SUFFIX_SIZE_SP,
        }
    }

    pub fn content_resolver(mut self, resolver: impl ContentResolver + 'static) -> Self {
        self.content_resolver = Arc::new(resolver);
        self
    }

    pub fn information_data_factory(
        mut self,
        factory: impl InformationDataFactory + 'static,
    ) -> Self {
        self.information_data_factory = Arc::new(factory);
        self
    }

    /// Set the factory building the items of edit events.
    pub fn notice_item_factory(mut self, factory: impl NoticeItemFactory + 'static) -> Self {
        self.notice_item_factory = Arc::new(factory);
        self
    }

    /// Render the formatted body of text, emote and notice messages with the
    /// given renderer.
    pub fn html_renderer(mut self, renderer: impl HtmlRenderer + 'static) -> Self {
        self.html_renderer = Some(Arc::new(renderer));
        self
    }

    pub fn permalink_annotator(mut self, annotator: impl PermalinkAnnotator + 'static) -> Self {
        self.permalink_annotator = Arc::new(annotator);
        self
    }

    pub fn link_annotator(mut self, annotator: impl LinkAnnotator + 'static) -> Self {
        self.link_annotator = Arc::new(annotator);
        self
    }

    pub fn media_size_provider(mut self, provider: impl MediaSizeProvider + 'static) -> Self {
        self.media_size_provider = Arc::new(provider);
        self
    }

    /// Shorthand for a [`FixedMediaSizeProvider`].
    pub fn max_media_size(self, max_width: u32, max_height: u32) -> Self {
        self.media_size_provider(FixedMediaSizeProvider::new(max_width, max_height))
    }

    pub fn local_file_checker(mut self, checker: impl LocalFileChecker + 'static) -> Self {
        self.local_file_checker = Arc::new(checker);
        self
    }

    pub fn emoji_checker(mut self, checker: impl EmojiChecker + 'static) -> Self {
        self.emoji_checker = Arc::new(checker);
        self
    }

    pub fn color_provider(mut self, provider: impl ColorProvider + 'static) -> Self {
        self.color_provider = Arc::new(provider);
        self
    }

    pub fn dimension_converter(mut self, converter: impl DimensionConverter + 'static) -> Self {
        self.dimension_converter = Arc::new(converter);
        self
    }

    pub fn string_provider(mut self, provider: impl StringProvider + 'static) -> Self {
        self.string_provider = Arc::new(provider);
        self
    }

    /// The text size of the "(edited)" marker, in scale-independent pixels.
    ///
    /// Defaults to 13.
    pub fn edited_suffix_size_sp(mut self, size: u32) -> Self {
        self.edited_suffix_size_sp = size;
        self
    }

    pub fn build(self) -> MessageItemFactory {
        let Self {
            content_resolver,
            information_data_factory,
            notice_item_factory,
            html_renderer,
            permalink_annotator,
            link_annotator,
            media_size_provider,
            local_file_checker,
            emoji_checker,
            color_provider,
            dimension_converter,
            string_provider,
            edited_suffix_size_sp,
        } = self;

        MessageItemFactory {
            content_resolver,
            information_data_factory,
            notice_item_factory,
            html_renderer,
            permalink_annotator,
            link_annotator,
            media_size_provider,
            local_file_checker,
            emoji_checker,
            color_provider,
            dimension_converter,
            string_provider,
            edited_suffix_size_sp,
        }
    }
}

impl Default for MessageItemFactoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

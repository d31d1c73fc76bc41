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

//! Maps timeline events to [`MessageItem`]s.

mod builder;
mod notice;

use std::{fmt, sync::Arc};

use ruma::events::room::{
    MediaSource,
    message::{
        AudioMessageEventContent, EmoteMessageEventContent, FileMessageEventContent,
        FormattedBody, ImageMessageEventContent, MessageType, NoticeMessageEventContent,
        TextMessageEventContent, VideoMessageEventContent,
    },
};
use tracing::{debug, instrument, trace, warn};

pub use self::{
    builder::MessageItemFactoryBuilder,
    notice::{DefaultNoticeItemFactory, NoticeItemFactory},
};
use crate::{
    content::{ContentResolver, is_edit_announcement},
    emoji::EmojiChecker,
    event::TimelineEvent,
    information::{InformationDataFactory, MessageInformationData},
    item::{
        Attachment, BaseItem, DefaultItem, FileIcon, FileItem, ImageVideoItem, MessageItem,
        RedactedItem, TextItem, TimelineEventCallback, VisualMedia,
    },
    linkify::{LinkAnnotator, PermalinkAnnotator},
    media::{
        ImageData, LocalFileChecker, MediaSizeProvider, VideoData, dimension, source_decryption,
        source_url,
    },
    resources::{ColorAttribute, ColorProvider, DimensionConverter, StringProvider, StringResource},
    styled_text::{HtmlRenderer, SpanStyle, StyledText},
};

/// Texts of up to twice this many UTF-16 code units made only of emojis are
/// displayed bigger.
pub const MAX_NUMBER_OF_EMOJI_FOR_BIG_FONT: usize = 5;

/// Text size of the "(edited)" marker.
pub(crate) const DEFAULT_EDITED_SUFFIX_SIZE_SP: u32 = 13;

/// Builds the timeline item of `m.room.message` events.
///
/// The factory holds no mutable state: it can be shared and called from
/// several threads at once.
pub struct MessageItemFactory {
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

impl MessageItemFactory {
    /// A factory using the default implementation of every collaborator.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> MessageItemFactoryBuilder {
        MessageItemFactoryBuilder::new()
    }

    /// Build the item for `event`.
    ///
    /// `next_event` is the neighbour of the event, used to decide whether both
    /// are grouped. `highlight` is forwarded to the item as is. Interactions
    /// with the item are reported to `callback`, if any.
    ///
    /// Returns `None` if the event can't be displayed at all. Events whose
    /// content can't be read or isn't supported yet get a fallback item.
    #[instrument(skip_all, fields(event_id = ?event.event_id))]
    pub fn create(
        &self,
        event: &TimelineEvent,
        next_event: Option<&TimelineEvent>,
        highlight: bool,
        callback: Option<Arc<dyn TimelineEventCallback>>,
    ) -> Option<MessageItem> {
        let Some(event_id) = event.event_id.as_deref() else {
            trace!("Skipping event without an event ID");
            return None;
        };

        let information_data = self.information_data_factory.create(event_id, event, next_event);

        if event.is_redacted() {
            return Some(self.build_redacted_item(information_data, highlight, callback));
        }

        let content = match self.content_resolver.effective_content(event) {
            Ok(content) => content,
            Err(error) => {
                warn!("Can't read the message content: {error}");
                let text = self.string_provider.string(StringResource::MalformedMessage);
                let base = BaseItem::new(information_data, highlight, None, callback);
                return Some(Self::build_not_handled_item(text, base));
            }
        };

        if is_edit_announcement(event, &content) {
            debug!("The event is an edit, delegating to the notice factory");
            return self.notice_item_factory.create(event, information_data, highlight, callback);
        }

        let msgtype = content.msgtype;
        let base = BaseItem::new(information_data, highlight, Some(msgtype.clone()), callback);

        let item = match &msgtype {
            MessageType::Emote(content) => self.build_emote_item(content, base),
            MessageType::Text(content) => self.build_text_item(content, base),
            MessageType::Image(content) => self.build_image_item(content, base),
            MessageType::Notice(content) => self.build_notice_item(content, base),
            MessageType::Video(content) => self.build_video_item(content, base),
            MessageType::File(content) => self.build_file_item(content, base),
            MessageType::Audio(content) => self.build_audio_item(content, base),
            other => {
                debug!(msgtype = other.msgtype(), "Unsupported message type");
                let text = format!("{} message events are not yet handled", other.msgtype());
                Self::build_not_handled_item(text, base)
            }
        };

        Some(item)
    }

    fn build_text_item(&self, content: &TextMessageEventContent, base: BaseItem) -> MessageItem {
        let body = self.render_body(&content.body, content.formatted.as_ref());
        let linkified = self.linkify(body);

        let use_big_font = linkified.utf16_len() <= MAX_NUMBER_OF_EMOJI_FOR_BIG_FONT * 2
            && self.emoji_checker.contains_only_emojis(linkified.text());
        let message = self.annotate_with_edited(linkified, &base.information_data);

        MessageItem::Text(TextItem { base, message, use_big_font, member_name_clickable: false })
    }

    fn build_emote_item(&self, content: &EmoteMessageEventContent, base: BaseItem) -> MessageItem {
        let prefix = format!("* {} ", base.information_data.member_name);
        let body =
            self.render_body(&content.body, content.formatted.as_ref()).prepend_str(&prefix);
        let message = self.annotate_with_edited(self.linkify(body), &base.information_data);

        MessageItem::Text(TextItem {
            base,
            message,
            use_big_font: false,
            member_name_clickable: false,
        })
    }

    fn build_notice_item(&self, content: &NoticeMessageEventContent, base: BaseItem) -> MessageItem {
        let secondary = self.color_provider.color(ColorAttribute::TextSecondary);
        let body = self
            .render_body(&content.body, content.formatted.as_ref())
            .with_style(SpanStyle::Foreground(secondary))
            .with_style(SpanStyle::Italic);
        let message = self.annotate_with_edited(self.linkify(body), &base.information_data);

        MessageItem::Text(TextItem {
            base,
            message,
            use_big_font: false,
            member_name_clickable: true,
        })
    }

    fn build_image_item(&self, content: &ImageMessageEventContent, base: BaseItem) -> MessageItem {
        let (max_width, max_height) = self.media_size_provider.max_size();
        let info = content.info.as_deref();

        let media_data = ImageData {
            filename: content.body.clone(),
            url: Some(source_url(&content.source).to_owned()),
            element_to_decrypt: source_decryption(&content.source),
            width: info.and_then(|info| dimension(info.width)),
            height: info.and_then(|info| dimension(info.height)),
            max_width,
            max_height,
        };
        let playable = info.and_then(|info| info.mimetype.as_deref()) == Some("image/gif");

        MessageItem::ImageVideo(ImageVideoItem {
            base,
            media_data,
            playable,
            media: VisualMedia::Image(content.clone()),
        })
    }

    fn build_video_item(&self, content: &VideoMessageEventContent, base: BaseItem) -> MessageItem {
        let (max_width, max_height) = self.media_size_provider.max_size();
        let info = content.info.as_deref();
        let thumbnail_source = info.and_then(|info| info.thumbnail_source.as_ref());

        let thumbnail = ImageData {
            filename: content.body.clone(),
            url: thumbnail_source.map(|source| source_url(source).to_owned()),
            element_to_decrypt: thumbnail_source.and_then(source_decryption),
            width: info.and_then(|info| dimension(info.width)),
            height: info.and_then(|info| dimension(info.height)),
            max_width,
            max_height,
        };
        let data = VideoData {
            event_id: base.information_data.event_id.clone(),
            filename: content.body.clone(),
            url: Some(source_url(&content.source).to_owned()),
            element_to_decrypt: source_decryption(&content.source),
            thumbnail: thumbnail.clone(),
        };

        MessageItem::ImageVideo(ImageVideoItem {
            base,
            media_data: thumbnail,
            playable: true,
            media: VisualMedia::Video { content: content.clone(), data },
        })
    }

    fn build_file_item(&self, content: &FileMessageEventContent, base: BaseItem) -> MessageItem {
        let filename = content.filename.as_deref().unwrap_or(&content.body);
        self.build_attachment_item(
            filename,
            &content.source,
            FileIcon::Attachment,
            Attachment::File(content.clone()),
            base,
        )
    }

    fn build_audio_item(&self, content: &AudioMessageEventContent, base: BaseItem) -> MessageItem {
        let filename = content.filename.as_deref().unwrap_or(&content.body);
        self.build_attachment_item(
            filename,
            &content.source,
            FileIcon::Audio,
            Attachment::Audio(content.clone()),
            base,
        )
    }

    fn build_attachment_item(
        &self,
        filename: &str,
        source: &MediaSource,
        icon: FileIcon,
        attachment: Attachment,
        base: BaseItem,
    ) -> MessageItem {
        MessageItem::File(FileItem {
            base,
            filename: filename.to_owned(),
            is_local_file: self.local_file_checker.is_local_file(source_url(source).as_str()),
            icon,
            attachment,
        })
    }

    fn build_redacted_item(
        &self,
        information_data: MessageInformationData,
        highlight: bool,
        callback: Option<Arc<dyn TimelineEventCallback>>,
    ) -> MessageItem {
        MessageItem::Redacted(RedactedItem {
            base: BaseItem::new(information_data, highlight, None, callback),
        })
    }

    fn build_not_handled_item(text: String, base: BaseItem) -> MessageItem {
        MessageItem::NotHandled(DefaultItem { base, text })
    }

    /// The rendered formatted body if there's one and a renderer to render
    /// it, the plain body otherwise.
    fn render_body(&self, body: &str, formatted: Option<&FormattedBody>) -> StyledText {
        match (formatted, &self.html_renderer) {
            (Some(formatted), Some(renderer)) => renderer.render(formatted.body.trim()),
            _ => StyledText::plain(body),
        }
    }

    fn linkify(&self, body: StyledText) -> StyledText {
        // Permalinks first, so that the web pass doesn't turn them into
        // plain links.
        let body = self.permalink_annotator.add_links(body);
        self.link_annotator.add_links(body, true)
    }

    fn annotate_with_edited(
        &self,
        body: StyledText,
        information_data: &MessageInformationData,
    ) -> StyledText {
        if !information_data.has_been_edited {
            return body;
        }

        let suffix = self.string_provider.string(StringResource::EditedSuffix);
        let start = body.len() + 1;
        let range = start..start + suffix.len();
        let color = self.color_provider.color(ColorAttribute::ListHeaderSecondaryText);
        let size = self.dimension_converter.sp_to_px(self.edited_suffix_size_sp);

        body.append_str(" ")
            .append_str(&suffix)
            .with_span(range.clone(), SpanStyle::Foreground(color))
            .with_span(range.clone(), SpanStyle::AbsoluteSize(size))
            .with_span(range, SpanStyle::EditedDecoration)
    }
}

impl Default for MessageItemFactory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for MessageItemFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageItemFactory")
            .field("renders_html", &self.html_renderer.is_some())
            .field("edited_suffix_size_sp", &self.edited_suffix_size_sp)
            .finish_non_exhaustive()
    }
}

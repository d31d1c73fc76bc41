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

//! The renderable items produced by the factory.

mod interactions;

use std::fmt;

use as_variant::as_variant;
use ruma::events::room::message::{
    AudioMessageEventContent, FileMessageEventContent, ImageMessageEventContent,
    VideoMessageEventContent,
};

pub use self::interactions::{BaseItem, TimelineEventCallback};
use crate::{
    information::MessageInformationData,
    media::{ImageData, VideoData},
    styled_text::{SpanStyle, StyledText},
};

/// One displayable timeline row.
#[derive(Clone, Debug)]
pub enum MessageItem {
    /// A text, emote or notice message.
    Text(TextItem),
    /// An image or a video.
    ImageVideo(ImageVideoItem),
    /// A file or an audio message.
    File(FileItem),
    /// A redacted message.
    Redacted(RedactedItem),
    /// A message that can't be displayed, with an explanation.
    NotHandled(DefaultItem),
    /// A notice about the event, e.g. for edit events.
    Notice(NoticeItem),
}

impl MessageItem {
    pub fn base(&self) -> &BaseItem {
        match self {
            Self::Text(item) => &item.base,
            Self::ImageVideo(item) => &item.base,
            Self::File(item) => &item.base,
            Self::Redacted(item) => &item.base,
            Self::NotHandled(item) => &item.base,
            Self::Notice(item) => &item.base,
        }
    }

    pub fn information_data(&self) -> &MessageInformationData {
        &self.base().information_data
    }

    pub fn is_highlighted(&self) -> bool {
        self.base().highlighted
    }

    pub fn as_text(&self) -> Option<&TextItem> {
        as_variant!(self, Self::Text)
    }

    pub fn as_image_video(&self) -> Option<&ImageVideoItem> {
        as_variant!(self, Self::ImageVideo)
    }

    pub fn as_file(&self) -> Option<&FileItem> {
        as_variant!(self, Self::File)
    }

    pub fn as_not_handled(&self) -> Option<&DefaultItem> {
        as_variant!(self, Self::NotHandled)
    }

    pub fn as_notice(&self) -> Option<&NoticeItem> {
        as_variant!(self, Self::Notice)
    }

    pub fn is_redacted(&self) -> bool {
        matches!(self, Self::Redacted(_))
    }
}

#[derive(Clone)]
pub struct TextItem {
    pub base: BaseItem,
    pub message: StyledText,
    /// Whether the message only holds a few emojis and should be displayed
    /// bigger.
    pub use_big_font: bool,
    pub(crate) member_name_clickable: bool,
}

impl TextItem {
    /// Handle a click at byte `offset` of the message.
    ///
    /// Returns `true` if a link or the edited marker was hit. The click may
    /// still be ignored if there's no callback.
    pub fn click_at(&self, offset: usize) -> bool {
        let Some(span) = self.message.spans_at(offset).find(|span| span.style.is_clickable())
        else {
            return false;
        };

        if let Some(callback) = self.base.callback() {
            match &span.style {
                SpanStyle::Permalink { url } | SpanStyle::Link { url } => {
                    callback.on_url_clicked(url);
                }
                SpanStyle::EditedDecoration => {
                    callback.on_edited_decoration_clicked(&self.base.information_data);
                }
                _ => {}
            }
        }

        true
    }

    /// Only notices react to clicks on the sender's name.
    pub fn click_member_name(&self) {
        if !self.member_name_clickable {
            return;
        }
        if let Some(callback) = self.base.callback() {
            callback.on_member_name_clicked(&self.base.information_data);
        }
    }
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for TextItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextItem")
            .field("base", &self.base)
            .field("use_big_font", &self.use_big_font)
            .finish_non_exhaustive()
    }
}

#[derive(Clone)]
pub(crate) enum VisualMedia {
    Image(ImageMessageEventContent),
    Video { content: VideoMessageEventContent, data: VideoData },
}

#[derive(Clone)]
pub struct ImageVideoItem {
    pub base: BaseItem,
    /// The image, or the thumbnail of the video.
    pub media_data: ImageData,
    /// Whether the media moves: videos and GIFs.
    pub playable: bool,
    pub(crate) media: VisualMedia,
}

impl ImageVideoItem {
    pub fn is_video(&self) -> bool {
        matches!(self.media, VisualMedia::Video { .. })
    }

    pub fn video_data(&self) -> Option<&VideoData> {
        as_variant!(&self.media, VisualMedia::Video { data, .. } => data)
    }

    /// Open the media.
    pub fn click(&self) {
        let Some(callback) = self.base.callback() else {
            return;
        };

        match &self.media {
            VisualMedia::Image(content) => {
                callback.on_image_message_clicked(content, &self.media_data);
            }
            VisualMedia::Video { content, data } => {
                callback.on_video_message_clicked(content, data);
            }
        }
    }
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for ImageVideoItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageVideoItem")
            .field("base", &self.base)
            .field("is_video", &self.is_video())
            .field("playable", &self.playable)
            .finish_non_exhaustive()
    }
}

/// The icon of a file item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FileIcon {
    Attachment,
    Audio,
}

#[derive(Clone)]
pub(crate) enum Attachment {
    File(FileMessageEventContent),
    Audio(AudioMessageEventContent),
}

#[derive(Clone)]
pub struct FileItem {
    pub base: BaseItem,
    pub filename: String,
    /// Whether the file is stored on the device, e.g. while it's uploading.
    pub is_local_file: bool,
    pub icon: FileIcon,
    pub(crate) attachment: Attachment,
}

impl FileItem {
    /// Open or download the file.
    pub fn click(&self) {
        let Some(callback) = self.base.callback() else {
            return;
        };

        match &self.attachment {
            Attachment::File(content) => {
                callback.on_file_message_clicked(&self.base.information_data.event_id, content);
            }
            Attachment::Audio(content) => callback.on_audio_message_clicked(content),
        }
    }
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for FileItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileItem")
            .field("base", &self.base)
            .field("is_local_file", &self.is_local_file)
            .field("icon", &self.icon)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
pub struct RedactedItem {
    pub base: BaseItem,
}

/// The fallback item.
#[derive(Clone, Debug)]
pub struct DefaultItem {
    pub base: BaseItem,
    pub text: String,
}

#[derive(Clone, Debug)]
pub struct NoticeItem {
    pub base: BaseItem,
    pub text: String,
}

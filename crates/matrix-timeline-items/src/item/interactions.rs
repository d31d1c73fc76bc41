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

use std::{fmt, sync::Arc};

use ruma::{
    EventId,
    events::room::message::{
        AudioMessageEventContent, FileMessageEventContent, ImageMessageEventContent, MessageType,
        VideoMessageEventContent,
    },
};

use crate::{
    information::MessageInformationData,
    media::{ImageData, VideoData},
};

/// Receives the user interactions with timeline items.
///
/// Every method has a default implementation doing nothing, so implementors
/// only need to override the interactions they care about.
pub trait TimelineEventCallback: Send + Sync {
    /// The item was clicked outside of any dedicated area. `content` is `None`
    /// for redacted events.
    fn on_event_cell_clicked(
        &self,
        _information_data: &MessageInformationData,
        _content: Option<&MessageType>,
    ) {
    }

    /// The item was long-clicked. Returns whether the click was consumed.
    fn on_event_long_clicked(
        &self,
        _information_data: &MessageInformationData,
        _content: Option<&MessageType>,
    ) -> bool {
        false
    }

    fn on_avatar_clicked(&self, _information_data: &MessageInformationData) {}

    fn on_member_name_clicked(&self, _information_data: &MessageInformationData) {}

    fn on_read_receipts_clicked(&self, _information_data: &MessageInformationData) {}

    /// A reaction pill was toggled; `on` is the new state.
    fn on_reaction_clicked(
        &self,
        _information_data: &MessageInformationData,
        _reaction: &str,
        _on: bool,
    ) {
    }

    /// A link or a permalink inside a message was clicked.
    fn on_url_clicked(&self, _url: &str) {}

    /// The "(edited)" marker of a message was clicked.
    fn on_edited_decoration_clicked(&self, _information_data: &MessageInformationData) {}

    fn on_image_message_clicked(&self, _content: &ImageMessageEventContent, _data: &ImageData) {}

    fn on_video_message_clicked(&self, _content: &VideoMessageEventContent, _data: &VideoData) {}

    fn on_file_message_clicked(&self, _event_id: &EventId, _content: &FileMessageEventContent) {}

    fn on_audio_message_clicked(&self, _content: &AudioMessageEventContent) {}
}

/// The presentation fields and interactions every item has.
///
/// Without a callback, clicks are ignored and long clicks are reported as not
/// consumed.
#[derive(Clone)]
pub struct BaseItem {
    pub information_data: MessageInformationData,
    pub highlighted: bool,
    content: Option<MessageType>,
    callback: Option<Arc<dyn TimelineEventCallback>>,
}

impl BaseItem {
    pub(crate) fn new(
        information_data: MessageInformationData,
        highlighted: bool,
        content: Option<MessageType>,
        callback: Option<Arc<dyn TimelineEventCallback>>,
    ) -> Self {
        Self { information_data, highlighted, content, callback }
    }

    /// The content the item was built from, `None` for redacted events and
    /// content that couldn't be read.
    pub fn content(&self) -> Option<&MessageType> {
        self.content.as_ref()
    }

    pub fn has_callback(&self) -> bool {
        self.callback.is_some()
    }

    pub fn click_cell(&self) {
        if let Some(callback) = &self.callback {
            callback.on_event_cell_clicked(&self.information_data, self.content.as_ref());
        }
    }

    pub fn long_click(&self) -> bool {
        self.callback.as_ref().is_some_and(|callback| {
            callback.on_event_long_clicked(&self.information_data, self.content.as_ref())
        })
    }

    pub fn click_avatar(&self) {
        if let Some(callback) = &self.callback {
            callback.on_avatar_clicked(&self.information_data);
        }
    }

    pub fn click_read_receipts(&self) {
        if let Some(callback) = &self.callback {
            callback.on_read_receipts_clicked(&self.information_data);
        }
    }

    pub fn click_reaction(&self, reaction: &str, on: bool) {
        if let Some(callback) = &self.callback {
            callback.on_reaction_clicked(&self.information_data, reaction, on);
        }
    }

    pub(crate) fn callback(&self) -> Option<&dyn TimelineEventCallback> {
        self.callback.as_deref()
    }
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for BaseItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Items are logged, so don't include the content.
        f.debug_struct("BaseItem")
            .field("information_data", &self.information_data)
            .field("highlighted", &self.highlighted)
            .field("msgtype", &self.content.as_ref().map(MessageType::msgtype))
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}

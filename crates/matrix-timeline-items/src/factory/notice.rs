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

use crate::{
    event::TimelineEvent,
    information::MessageInformationData,
    item::{BaseItem, MessageItem, NoticeItem, TimelineEventCallback},
};

/// Builds the item of events that announce an edit of another event.
pub trait NoticeItemFactory: Send + Sync {
    fn create(
        &self,
        event: &TimelineEvent,
        information_data: MessageInformationData,
        highlight: bool,
        callback: Option<Arc<dyn TimelineEventCallback>>,
    ) -> Option<MessageItem>;
}

/// Shows edit events as a one-line notice.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultNoticeItemFactory;

impl NoticeItemFactory for DefaultNoticeItemFactory {
    fn create(
        &self,
        _event: &TimelineEvent,
        information_data: MessageInformationData,
        highlight: bool,
        callback: Option<Arc<dyn TimelineEventCallback>>,
    ) -> Option<MessageItem> {
        let text = format!("{} edited a message", information_data.member_name);
        Some(MessageItem::Notice(NoticeItem {
            base: BaseItem::new(information_data, highlight, None, callback),
            text,
        }))
    }
}

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

//! The input side of the item factory: one decoded timeline event.

use ruma::{
    MilliSecondsSinceUnixEpoch, OwnedEventId, OwnedMxcUri, OwnedUserId,
    events::{
        TimelineEventType,
        room::{encrypted::RoomEncryptedEventContent, message::RoomMessageEventContent},
    },
    serde::Raw,
};

/// A timeline event, as handed over by the sync layer.
///
/// The factory only ever reads it.
#[derive(Clone, Debug)]
pub struct TimelineEvent {
    /// The event ID. Local echoes that haven't been sent yet have none.
    pub event_id: Option<OwnedEventId>,
    pub sender: OwnedUserId,
    /// The display name of the sender at the time of the event.
    pub sender_name: Option<String>,
    pub sender_avatar: Option<OwnedMxcUri>,
    /// The clear event type, i.e. the decrypted type for encrypted events.
    pub event_type: TimelineEventType,
    pub origin_server_ts: MilliSecondsSinceUnixEpoch,
    /// The clear content. For encrypted events, the decrypted content if
    /// decryption succeeded.
    pub content: Option<Raw<RoomMessageEventContent>>,
    /// The `m.room.encrypted` content as it was received, for encrypted
    /// events.
    pub encrypted_content: Option<Raw<RoomEncryptedEventContent>>,
    /// Whether the event has been redacted.
    pub redacted: bool,
    /// The `m.new_content` of the most recent edit of this event, if any.
    pub latest_edit: Option<Raw<RoomMessageEventContent>>,
    /// Aggregated reactions to this event.
    pub reactions: Vec<ReactionSummary>,
}

impl TimelineEvent {
    /// A clear-text `m.room.message` event.
    pub fn new(
        event_id: Option<OwnedEventId>,
        sender: OwnedUserId,
        origin_server_ts: MilliSecondsSinceUnixEpoch,
        content: Raw<RoomMessageEventContent>,
    ) -> Self {
        Self {
            event_id,
            sender,
            sender_name: None,
            sender_avatar: None,
            event_type: TimelineEventType::RoomMessage,
            origin_server_ts,
            content: Some(content),
            encrypted_content: None,
            redacted: false,
            latest_edit: None,
            reactions: Vec::new(),
        }
    }

    pub fn is_encrypted(&self) -> bool {
        self.encrypted_content.is_some()
    }

    pub fn is_redacted(&self) -> bool {
        self.redacted
    }

    /// Whether this event has been edited by a later event.
    pub fn has_been_edited(&self) -> bool {
        self.latest_edit.is_some()
    }
}

/// One reaction key and how many senders used it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReactionSummary {
    /// The reaction, usually an emoji.
    pub key: String,
    pub count: u64,
    /// Whether the current user is one of the senders.
    pub added_by_me: bool,
}

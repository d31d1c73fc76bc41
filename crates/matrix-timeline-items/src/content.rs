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

//! Resolution of the content an event should be displayed with.

use ruma::events::{
    relation::RelationType,
    room::{encrypted, message},
};
use thiserror::Error;
use tracing::warn;

use crate::event::TimelineEvent;

/// Why the content of an event couldn't be resolved.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentError {
    /// The event has no clear content, e.g. it couldn't be decrypted.
    #[error("the event has no clear content")]
    MissingContent,

    /// The content isn't a valid `m.room.message` content.
    #[error("invalid message content: {0}")]
    Deserialization(#[from] serde_json::Error),
}

/// Resolves the content an event should be displayed with.
pub trait ContentResolver: Send + Sync {
    fn effective_content(
        &self,
        event: &TimelineEvent,
    ) -> Result<message::RoomMessageEventContent, ContentError>;
}

/// Displays the latest edit of an event in place of its original content.
///
/// An edit that fails to deserialize is skipped and the original content used
/// instead.
#[derive(Clone, Copy, Debug, Default)]
pub struct LatestEditResolver;

impl ContentResolver for LatestEditResolver {
    fn effective_content(
        &self,
        event: &TimelineEvent,
    ) -> Result<message::RoomMessageEventContent, ContentError> {
        if let Some(edit) = &event.latest_edit {
            match edit.deserialize() {
                Ok(content) => return Ok(content),
                Err(error) => {
                    warn!(event_id = ?event.event_id, "Ignoring invalid edit content: {error}");
                }
            }
        }

        let raw = event.content.as_ref().ok_or(ContentError::MissingContent)?;
        Ok(raw.deserialize()?)
    }
}

/// Whether the event announces an edit of another event instead of carrying
/// user-facing content.
///
/// Only the relation type is checked: a replacement without `m.new_content`
/// is still an edit. The `m.relates_to` of encrypted events is sent in the
/// clear, so it is also looked up in the encrypted envelope.
pub(crate) fn is_edit_announcement(
    event: &TimelineEvent,
    content: &message::RoomMessageEventContent,
) -> bool {
    let is_replacement =
        |rel_type: Option<RelationType>| rel_type == Some(RelationType::Replacement);

    if is_replacement(content.relates_to.as_ref().and_then(message::Relation::rel_type)) {
        return true;
    }

    event
        .encrypted_content
        .as_ref()
        .and_then(|raw| raw.deserialize().ok())
        .is_some_and(|envelope| {
            is_replacement(envelope.relates_to.as_ref().and_then(encrypted::Relation::rel_type))
        })
}

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

//! Per-event presentation metadata shared by every kind of item.

use chrono::{DateTime, Utc};
use ruma::{EventId, OwnedEventId, OwnedMxcUri, OwnedUserId, events::TimelineEventType};

use crate::event::{ReactionSummary, TimelineEvent};

/// Two consecutive messages more than this apart are never grouped.
const GROUPING_MAX_GAP_MS: u64 = 60 * 60 * 1000;

const DAY_MS: u64 = 24 * 60 * 60 * 1000;

/// Presentation metadata of one timeline event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageInformationData {
    pub event_id: OwnedEventId,
    pub sender_id: OwnedUserId,
    /// The name to display for the sender.
    pub member_name: String,
    pub avatar_url: Option<OwnedMxcUri>,
    /// The formatted time of the event.
    pub time: String,
    /// Whether the sender's avatar and name should be shown, or the item is
    /// grouped with its neighbour.
    pub show_information: bool,
    pub has_been_edited: bool,
    /// Reactions, most used first.
    pub ordered_reactions: Vec<ReactionSummary>,
}

/// Computes the [`MessageInformationData`] of an event.
pub trait InformationDataFactory: Send + Sync {
    /// `next_event` is the neighbour the event may be grouped with.
    fn create(
        &self,
        event_id: &EventId,
        event: &TimelineEvent,
        next_event: Option<&TimelineEvent>,
    ) -> MessageInformationData;
}

/// Groups consecutive messages of the same sender sent on the same day, at
/// most an hour apart.
///
/// Times are formatted as `HH:MM`, in UTC.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultInformationDataFactory;

impl DefaultInformationDataFactory {
    fn is_grouped_with(event: &TimelineEvent, next: &TimelineEvent) -> bool {
        let ts = u64::from(event.origin_server_ts.0);
        let next_ts = u64::from(next.origin_server_ts.0);

        next.sender == event.sender
            && next.sender_name == event.sender_name
            && next.sender_avatar == event.sender_avatar
            && next.event_type == TimelineEventType::RoomMessage
            && ts / DAY_MS == next_ts / DAY_MS
            && ts.abs_diff(next_ts) <= GROUPING_MAX_GAP_MS
    }

    fn format_time(event: &TimelineEvent) -> String {
        i64::try_from(u64::from(event.origin_server_ts.0))
            .ok()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|date| date.format("%H:%M").to_string())
            .unwrap_or_default()
    }
}

impl InformationDataFactory for DefaultInformationDataFactory {
    fn create(
        &self,
        event_id: &EventId,
        event: &TimelineEvent,
        next_event: Option<&TimelineEvent>,
    ) -> MessageInformationData {
        let mut ordered_reactions = event.reactions.clone();
        ordered_reactions.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));

        MessageInformationData {
            event_id: event_id.to_owned(),
            sender_id: event.sender.clone(),
            member_name: event.sender_name.clone().unwrap_or_else(|| event.sender.to_string()),
            avatar_url: event.sender_avatar.clone(),
            time: Self::format_time(event),
            show_information: next_event.is_none_or(|next| !Self::is_grouped_with(event, next)),
            has_been_edited: event.has_been_edited(),
            ordered_reactions,
        }
    }
}

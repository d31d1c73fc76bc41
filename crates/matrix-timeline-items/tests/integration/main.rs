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

//! End-to-end tests of the public API of the item factory.

use std::{sync::Arc, thread};

use assert_matches2::assert_let;
use matrix_timeline_items::{
    MessageItem, MessageItemFactory, ReactionSummary, SpanStyle, TimelineEvent,
    item::FileIcon,
};
use ruma::{
    MilliSecondsSinceUnixEpoch,
    events::room::message::{FileMessageEventContent, MessageType, RoomMessageEventContent},
    owned_user_id,
    serde::Raw,
};

fn event(id: &str, millis: u64, content: RoomMessageEventContent) -> TimelineEvent {
    let mut event = TimelineEvent::new(
        Some(id.try_into().unwrap()),
        owned_user_id!("@carol:example.org"),
        MilliSecondsSinceUnixEpoch(millis.try_into().unwrap()),
        Raw::new(&content).unwrap(),
    );
    event.sender_name = Some("Carol".to_owned());
    event
}

#[test]
fn test_timeline_of_messages() {
    let factory = MessageItemFactory::new();

    let first = event(
        "$first:example.org",
        1_704_110_400_000,
        RoomMessageEventContent::text_plain("Agenda is on https://example.org/agenda"),
    );
    let second = event(
        "$second:example.org",
        1_704_110_460_000,
        RoomMessageEventContent::notice_plain("Meeting starts in 5 minutes"),
    );

    let item = factory.create(&second, Some(&first), false, None).unwrap();
    assert_let!(MessageItem::Text(notice) = item);
    assert!(!notice.base.information_data.show_information);
    assert_eq!(notice.base.information_data.time, "12:01");
    assert!(notice.message.spans().iter().any(|span| span.style == SpanStyle::Italic));

    let item = factory.create(&first, None, true, None).unwrap();
    assert_let!(MessageItem::Text(text) = item);
    assert!(text.base.highlighted);
    assert!(text.base.information_data.show_information);
    assert_eq!(
        text.message.spans().iter().map(|span| &span.style).collect::<Vec<_>>(),
        [&SpanStyle::Link { url: "https://example.org/agenda".to_owned() }]
    );
}

#[test]
fn test_reactions_are_ordered() {
    let mut event = event(
        "$reacted:example.org",
        1_704_110_400_000,
        RoomMessageEventContent::text_plain("lunch?"),
    );
    event.reactions = vec![
        ReactionSummary { key: "🍕".to_owned(), count: 1, added_by_me: false },
        ReactionSummary { key: "👍".to_owned(), count: 3, added_by_me: true },
        ReactionSummary { key: "🍔".to_owned(), count: 1, added_by_me: false },
    ];

    let item = MessageItemFactory::new().create(&event, None, false, None).unwrap();

    let keys: Vec<_> =
        item.information_data().ordered_reactions.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, ["👍", "🍔", "🍕"]);
}

#[test]
fn test_sender_without_display_name() {
    let mut event = event(
        "$anonymous:example.org",
        1_704_110_400_000,
        RoomMessageEventContent::emote_plain("is away"),
    );
    event.sender_name = None;

    let item = MessageItemFactory::new().create(&event, None, false, None).unwrap();

    assert_eq!(item.information_data().member_name, "@carol:example.org");
    similar_asserts::assert_eq!(
        item.as_text().unwrap().message.text(),
        "* @carol:example.org is away"
    );
}

#[test]
fn test_local_echo_is_not_displayed() {
    let mut event = event(
        "$sent:example.org",
        1_704_110_400_000,
        RoomMessageEventContent::text_plain("sending…"),
    );
    event.event_id = None;

    assert!(MessageItemFactory::new().create(&event, None, false, None).is_none());
}

#[test]
fn test_factory_is_shared_between_threads() {
    let factory = Arc::new(MessageItemFactory::builder().max_media_size(200, 200).build());
    let timeline: Vec<_> = (0..4_u64)
        .map(|i| {
            let url = format!("mxc://example.org/file{i}").into();
            let file = FileMessageEventContent::plain(format!("file-{i}.txt"), url);
            event(
                &format!("$file{i}:example.org"),
                1_704_110_400_000 + i,
                RoomMessageEventContent::new(MessageType::File(file)),
            )
        })
        .collect();

    let handles: Vec<_> = timeline
        .into_iter()
        .map(|event| {
            let factory = factory.clone();
            thread::spawn(move || factory.create(&event, None, false, None))
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let item = handle.join().unwrap().unwrap();
        let file = item.as_file().unwrap();
        assert_eq!(file.filename, format!("file-{i}.txt"));
        assert_eq!(file.icon, FileIcon::Attachment);
    }
}

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

use std::sync::{Arc, Mutex};

use ruma::{
    EventId, MilliSecondsSinceUnixEpoch, UInt, UserId,
    events::room::message::{
        AudioMessageEventContent, FileMessageEventContent, ImageMessageEventContent, MessageType,
        VideoMessageEventContent,
    },
    serde::Raw,
};
use serde_json::{Value as JsonValue, json, value::to_raw_value};

use crate::{
    MessageInformationData, MessageItemFactory, TimelineEvent, TimelineEventCallback,
    media::{ImageData, VideoData},
    styled_text::{HtmlRenderer, SpanStyle, StyledText},
};


pub(crate) const ALICE: &str = "@alice:example.org";
pub(crate) const BOB: &str = "@bob:example.org";
pub(crate) const EVENT_ID: &str = "$event:example.org";

/// 2024-01-01T13:37:00Z
const DEFAULT_TS: u64 = 1_704_116_220_000;

#[ctor::ctor]
fn init_logging() {
    use tracing_subscriber::{
        EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _,
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_test_writer())
        .init();
}

pub(crate) fn raw<T>(json: JsonValue) -> Raw<T> {
    Raw::from_json(to_raw_value(&json).unwrap())
}

/// Builds [`TimelineEvent`]s sent by Alice, with a fixed event ID and
/// timestamp unless overridden.
pub(crate) struct EventBuilder {
    event: TimelineEvent,
}

impl EventBuilder {
    pub(crate) fn content(content: JsonValue) -> Self {
        let mut event = TimelineEvent::new(
            Some(EventId::parse(EVENT_ID).unwrap()),
            UserId::parse(ALICE).unwrap(),
            MilliSecondsSinceUnixEpoch(UInt::new(DEFAULT_TS).unwrap()),
            raw(content),
        );
        event.sender_name = Some("Alice".to_owned());

        Self { event }
    }

    pub(crate) fn text(body: &str) -> Self {
        Self::content(json!({ "msgtype": "m.text", "body": body }))
    }

    pub(crate) fn msgtype(msgtype: &str, body: &str) -> Self {
        Self::content(json!({ "msgtype": msgtype, "body": body }))
    }

    /// An event replacing the text of `original` with `body`.
    pub(crate) fn edit_of(original: &str, body: &str) -> Self {
        Self::content(json!({
            "msgtype": "m.text",
            "body": format!("* {body}"),
            "m.new_content": { "msgtype": "m.text", "body": body },
            "m.relates_to": { "rel_type": "m.replace", "event_id": original },
        }))
    }

    pub(crate) fn event_id(mut self, event_id: &str) -> Self {
        self.event.event_id = Some(EventId::parse(event_id).unwrap());
        self
    }

    pub(crate) fn without_event_id(mut self) -> Self {
        self.event.event_id = None;
        self
    }

    pub(crate) fn sender(mut self, user_id: &str, name: Option<&str>) -> Self {
        self.event.sender = UserId::parse(user_id).unwrap();
        self.event.sender_name = name.map(ToOwned::to_owned);
        self
    }

    pub(crate) fn ts(mut self, millis: u64) -> Self {
        self.event.origin_server_ts = MilliSecondsSinceUnixEpoch(UInt::new(millis).unwrap());
        self
    }

    /// Mark the event as edited, with `new_content` as its latest content.
    pub(crate) fn edited(mut self, new_content: JsonValue) -> Self {
        self.event.latest_edit = Some(raw(new_content));
        self
    }

    pub(crate) fn redacted(mut self) -> Self {
        self.event.redacted = true;
        self
    }

    pub(crate) fn build(self) -> TimelineEvent {
        self.event
    }
}

/// Strips tags, and makes the whole text bold if there was a `<b>` tag.
pub(crate) struct TagStrippingRenderer;

impl HtmlRenderer for TagStrippingRenderer {
    fn render(&self, formatted_body: &str) -> StyledText {
        let mut text = String::new();
        let mut in_tag = false;
        for c in formatted_body.chars() {
            match c {
                '<' => in_tag = true,
                '>' => in_tag = false,
                c if !in_tag => text.push(c),
                _ => {}
            }
        }

        let styled = StyledText::plain(text);
        if formatted_body.contains("<b>") { styled.with_style(SpanStyle::Bold) } else { styled }
    }
}

/// The factory used by most tests: default collaborators, an HTML renderer
/// and media at most 400×300 pixels.
pub(crate) fn test_factory() -> MessageItemFactory {
    MessageItemFactory::builder()
        .html_renderer(TagStrippingRenderer)
        .max_media_size(400, 300)
        .build()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Interaction {
    CellClicked { event_id: String, msgtype: Option<String> },
    LongClicked { event_id: String, msgtype: Option<String> },
    AvatarClicked(String),
    MemberNameClicked(String),
    ReadReceiptsClicked(String),
    ReactionClicked { reaction: String, on: bool },
    UrlClicked(String),
    EditedDecorationClicked(String),
    ImageClicked { body: String, url: Option<String> },
    VideoClicked { body: String, thumbnail_url: Option<String> },
    FileClicked { event_id: String, body: String },
    AudioClicked { body: String },
}

/// Records every interaction it receives.
#[derive(Default)]
pub(crate) struct RecordingCallback {
    interactions: Mutex<Vec<Interaction>>,
    consume_long_clicks: bool,
}

impl RecordingCallback {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn consuming_long_clicks() -> Arc<Self> {
        Arc::new(Self { consume_long_clicks: true, ..Self::default() })
    }

    pub(crate) fn sink(self: &Arc<Self>) -> Option<Arc<dyn TimelineEventCallback>> {
        let callback: Arc<dyn TimelineEventCallback> = self.clone();
        Some(callback)
    }

    pub(crate) fn take(&self) -> Vec<Interaction> {
        std::mem::take(&mut *self.interactions.lock().unwrap())
    }

    fn record(&self, interaction: Interaction) {
        self.interactions.lock().unwrap().push(interaction);
    }
}

impl TimelineEventCallback for RecordingCallback {
    fn on_event_cell_clicked(
        &self,
        information_data: &MessageInformationData,
        content: Option<&MessageType>,
    ) {
        self.record(Interaction::CellClicked {
            event_id: information_data.event_id.to_string(),
            msgtype: content.map(|c| c.msgtype().to_owned()),
        });
    }

    fn on_event_long_clicked(
        &self,
        information_data: &MessageInformationData,
        content: Option<&MessageType>,
    ) -> bool {
        self.record(Interaction::LongClicked {
            event_id: information_data.event_id.to_string(),
            msgtype: content.map(|c| c.msgtype().to_owned()),
        });
        self.consume_long_clicks
    }

    fn on_avatar_clicked(&self, information_data: &MessageInformationData) {
        self.record(Interaction::AvatarClicked(information_data.sender_id.to_string()));
    }

    fn on_member_name_clicked(&self, information_data: &MessageInformationData) {
        self.record(Interaction::MemberNameClicked(information_data.member_name.clone()));
    }

    fn on_read_receipts_clicked(&self, information_data: &MessageInformationData) {
        self.record(Interaction::ReadReceiptsClicked(information_data.event_id.to_string()));
    }

    fn on_reaction_clicked(
        &self,
        _information_data: &MessageInformationData,
        reaction: &str,
        on: bool,
    ) {
        self.record(Interaction::ReactionClicked { reaction: reaction.to_owned(), on });
    }

    fn on_url_clicked(&self, url: &str) {
        self.record(Interaction::UrlClicked(url.to_owned()));
    }

    fn on_edited_decoration_clicked(&self, information_data: &MessageInformationData) {
        self.record(Interaction::EditedDecorationClicked(information_data.event_id.to_string()));
    }

    fn on_image_message_clicked(&self, content: &ImageMessageEventContent, data: &ImageData) {
        self.record(Interaction::ImageClicked {
            body: content.body.clone(),
            url: data.url.as_ref().map(ToString::to_string),
        });
    }

    fn on_video_message_clicked(&self, content: &VideoMessageEventContent, data: &VideoData) {
        self.record(Interaction::VideoClicked {
            body: content.body.clone(),
            thumbnail_url: data.thumbnail.url.as_ref().map(ToString::to_string),
        });
    }

    fn on_file_message_clicked(&self, event_id: &EventId, content: &FileMessageEventContent) {
        self.record(Interaction::FileClicked {
            event_id: event_id.to_string(),
            body: content.body.clone(),
        });
    }

    fn on_audio_message_clicked(&self, content: &AudioMessageEventContent) {
        self.record(Interaction::AudioClicked { body: content.body.clone() });
    }
}

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

//! Turns Matrix `m.room.message` timeline events into renderable items.
//!
//! [`MessageItemFactory::create`] maps one [`TimelineEvent`] to at most one
//! [`MessageItem`]: text-like messages get linkified [`StyledText`], media
//! get the descriptors their renderers need, and anything that can't be
//! displayed degrades to a visible fallback item instead of an error.
//!
//! ```no_run
//! use matrix_timeline_items::{MessageItem, MessageItemFactory, TimelineEvent};
//!
//! fn render(event: &TimelineEvent, previous: Option<&TimelineEvent>) {
//!     let factory = MessageItemFactory::builder().max_media_size(800, 600).build();
//!
//!     match factory.create(event, previous, false, None) {
//!         Some(MessageItem::Text(item)) => println!("{}", item.message),
//!         Some(other) => println!("{other:?}"),
//!         None => {}
//!     }
//! }
//! ```

pub mod content;
pub mod emoji;
pub mod event;
pub mod factory;
pub mod information;
pub mod item;
pub mod linkify;
pub mod media;
pub mod resources;
pub mod styled_text;

#[cfg(test)]
mod tests;

pub use self::{
    content::{ContentError, ContentResolver},
    event::{ReactionSummary, TimelineEvent},
    factory::{MessageItemFactory, MessageItemFactoryBuilder},
    information::MessageInformationData,
    item::{MessageItem, TimelineEventCallback},
    styled_text::{HtmlRenderer, Span, SpanStyle, StyledText},
};

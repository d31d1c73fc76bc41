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

//! Theme, dimension and localization lookups needed to style items.

use crate::styled_text::Color;

/// The themed colours items can be styled with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ColorAttribute {
    /// Secondary text of list headers, used for the "(edited)" marker.
    ListHeaderSecondaryText,
    /// Secondary body text, used for notices.
    TextSecondary,
}

pub trait ColorProvider: Send + Sync {
    fn color(&self, attribute: ColorAttribute) -> Color;
}

/// Colours of the default light theme.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultColorProvider;

impl ColorProvider for DefaultColorProvider {
    fn color(&self, attribute: ColorAttribute) -> Color {
        match attribute {
            ColorAttribute::ListHeaderSecondaryText => Color(0xff7e_7e7e),
            ColorAttribute::TextSecondary => Color(0xff9e_9e9e),
        }
    }
}

/// Converts scale-independent pixels to pixels.
pub trait DimensionConverter: Send + Sync {
    fn sp_to_px(&self, sp: u32) -> u32;
}

/// A converter for a display density of 1 and a font scale of 1.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityDimensionConverter;

impl DimensionConverter for IdentityDimensionConverter {
    fn sp_to_px(&self, sp: u32) -> u32 {
        sp
    }
}

/// Localized strings used by items.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum StringResource {
    /// Shown in place of a message whose content couldn't be read.
    MalformedMessage,
    /// Appended to edited messages.
    EditedSuffix,
}

pub trait StringProvider: Send + Sync {
    fn string(&self, resource: StringResource) -> String;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct EnglishStringProvider;

impl StringProvider for EnglishStringProvider {
    fn string(&self, resource: StringResource) -> String {
        match resource {
            StringResource::MalformedMessage => "Malformed event, unable to display".to_owned(),
            StringResource::EditedSuffix => "(edited)".to_owned(),
        }
    }
}

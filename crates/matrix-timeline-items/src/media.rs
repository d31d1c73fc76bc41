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

//! Media descriptors handed over to the image and video renderers.

use std::path::Path;

use as_variant::as_variant;
use ruma::{
    MxcUri, OwnedEventId, OwnedMxcUri, UInt,
    events::room::{EncryptedFile, MediaSource},
};
use serde::Serialize;
use tracing::warn;
use url::Url;

/// What a renderer needs to decrypt an encrypted attachment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ElementToDecrypt {
    /// The initialization vector, unpadded base64.
    pub iv: String,
    /// The AES key, unpadded URL-safe base64.
    pub key: String,
    /// The SHA-256 hash of the ciphertext, unpadded base64.
    pub sha256: String,
}

impl ElementToDecrypt {
    /// `None` if the file has no SHA-256 hash, since the ciphertext couldn't
    /// be verified.
    pub fn from_encrypted_file(file: &EncryptedFile) -> Option<Self> {
        let Some(sha256) = file.hashes.get("sha256") else {
            warn!(url = %file.url, "Encrypted file without a SHA-256 hash, ignoring its keys");
            return None;
        };

        Some(Self { iv: file.iv.encode(), key: file.key.k.encode(), sha256: sha256.encode() })
    }
}

/// An image, or the thumbnail of a video.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ImageData {
    pub filename: String,
    pub url: Option<OwnedMxcUri>,
    pub element_to_decrypt: Option<ElementToDecrypt>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub max_width: u32,
    pub max_height: u32,
}

impl ImageData {
    /// The size to display the image with in the timeline.
    ///
    /// The image fills the maximum width unless that would make it higher than
    /// the maximum height, keeping its aspect ratio. Images with an unknown
    /// or empty size get the maximum size.
    pub fn display_size(&self) -> (u32, u32) {
        let width = u64::from(self.width.unwrap_or(self.max_width));
        let height = u64::from(self.height.unwrap_or(self.max_height));

        if width == 0 || height == 0 {
            return (self.max_width, self.max_height);
        }

        let final_height = (u64::from(self.max_width) * height / width).min(self.max_height.into());
        let final_width = final_height * width / height;

        (
            u32::try_from(final_width).unwrap_or(self.max_width),
            u32::try_from(final_height).unwrap_or(self.max_height),
        )
    }
}

/// A video and its thumbnail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VideoData {
    pub event_id: OwnedEventId,
    pub filename: String,
    pub url: Option<OwnedMxcUri>,
    pub element_to_decrypt: Option<ElementToDecrypt>,
    pub thumbnail: ImageData,
}

/// The maximum size media can be displayed with in the timeline.
pub trait MediaSizeProvider: Send + Sync {
    /// `(width, height)`, in pixels.
    fn max_size(&self) -> (u32, u32);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedMediaSizeProvider {
    pub max_width: u32,
    pub max_height: u32,
}

impl FixedMediaSizeProvider {
    pub fn new(max_width: u32, max_height: u32) -> Self {
        Self { max_width, max_height }
    }
}

impl Default for FixedMediaSizeProvider {
    fn default() -> Self {
        Self::new(640, 480)
    }
}

impl MediaSizeProvider for FixedMediaSizeProvider {
    fn max_size(&self) -> (u32, u32) {
        (self.max_width, self.max_height)
    }
}

/// Tells files stored on the device apart from remote ones, e.g. for local
/// echoes of uploads.
pub trait LocalFileChecker: Send + Sync {
    fn is_local_file(&self, url: &str) -> bool;
}

/// `file:` and `content:` URIs, and absolute paths, are local.
#[derive(Clone, Copy, Debug, Default)]
pub struct UrlLocalFileChecker;

impl LocalFileChecker for UrlLocalFileChecker {
    fn is_local_file(&self, url: &str) -> bool {
        match Url::parse(url) {
            Ok(url) => matches!(url.scheme(), "file" | "content"),
            Err(_) => Path::new(url).is_absolute(),
        }
    }
}

/// The URI of the media, encrypted or not.
pub(crate) fn source_url(source: &MediaSource) -> &MxcUri {
    match source {
        MediaSource::Plain(url) => url,
        MediaSource::Encrypted(file) => &file.url,
    }
}

pub(crate) fn source_decryption(source: &MediaSource) -> Option<ElementToDecrypt> {
    as_variant!(source, MediaSource::Encrypted(file) => file)
        .and_then(|file| ElementToDecrypt::from_encrypted_file(file))
}

pub(crate) fn dimension(value: Option<UInt>) -> Option<u32> {
    value.and_then(|value| u32::try_from(u64::from(value)).ok())
}

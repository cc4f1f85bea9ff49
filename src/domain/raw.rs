//! Provider-side shapes of the media feed response.
//!
//! Every field the provider may omit or send as `null` is an `Option`, so the
//! normalizer can match on presence instead of probing untyped JSON.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::domain::ErrorDescriptor;

/// Top-level response body: one page of media items plus the status block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedEnvelope {
    #[serde(default)]
    pub data: Vec<RawFeedItem>,
    #[serde(default)]
    pub meta: Option<ResponseMeta>,
}

impl FeedEnvelope {
    /// The error reported inside the body, if any. Some provider errors come
    /// back with a 200 status and only the `meta` block tells them apart.
    pub fn error(&self) -> Option<ErrorDescriptor> {
        self.meta.as_ref().and_then(ResponseMeta::error)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseMeta {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

impl ResponseMeta {
    pub fn error(&self) -> Option<ErrorDescriptor> {
        let error_type = self.error_type.as_ref()?;
        Some(ErrorDescriptor::new(
            self.code.unwrap_or(0),
            error_type.clone(),
            self.error_message.clone().unwrap_or_default(),
        ))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawFeedItem {
    pub id: String,
    pub user: RawUser,
    pub images: RawImages,
    pub likes: RawCount,
    pub comments: RawCount,
    #[serde(deserialize_with = "epoch_seconds")]
    pub created_time: i64,

    // Missing entirely for untagged media; present without `name` for
    // coordinate-only locations.
    #[serde(default)]
    pub location: Option<RawLocation>,
    // Only sent for authenticated callers.
    #[serde(default)]
    pub user_has_liked: Option<bool>,
    // Null until the media has a permalink.
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub caption: Option<RawCaption>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawUser {
    pub username: String,
    pub id: String,
    pub profile_picture: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawImages {
    pub thumbnail: RawImage,
    pub standard_resolution: RawImage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawImage {
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCount {
    #[serde(default)]
    pub count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawLocation {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCaption {
    #[serde(default)]
    pub text: Option<String>,
}

/// `created_time` arrives as a numeric string, but integers are accepted too.
fn epoch_seconds<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Epoch {
        Int(i64),
        Text(String),
    }

    match Epoch::deserialize(deserializer)? {
        Epoch::Int(secs) => Ok(secs),
        Epoch::Text(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| de::Error::custom(format!("invalid created_time: {:?}", text))),
    }
}

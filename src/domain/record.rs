//! Content records as stored by the site's admin write path.
//!
//! The pipeline only ever reads records; a missing record is a normal state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stable identifier of one editable piece of site content
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentKey(String);

impl ContentKey {
    pub const FACILITY_IMAGE_1: &'static str = "facility_image_1";
    pub const FACILITY_IMAGE_2: &'static str = "facility_image_2";
    pub const FACILITY_VIDEO: &'static str = "facility_video";
    pub const WRESTLING_HERO_IMAGE: &'static str = "wrestling_hero_image";
    pub const WRESTLING_DETAIL_1: &'static str = "wrestling_detail_1";
    pub const WRESTLING_DETAIL_2: &'static str = "wrestling_detail_2";

    /// Number of Instagram image slots on the home page
    pub const INSTAGRAM_SLOTS: u32 = 6;

    /// Create a key from any string
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Key of the n-th Instagram slot (1-based)
    pub fn instagram_image(slot: u32) -> Self {
        Self(format!("instagram_image_{}", slot))
    }

    /// Get the raw string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContentKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ContentKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ContentKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One stored content record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Unique key
    pub content_key: ContentKey,

    /// Opaque stored value (plain string or serialized envelope)
    pub content_value: String,

    /// Last time the admin path wrote this record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Admin user that last wrote this record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
}

impl ContentRecord {
    /// Create a record without metadata
    pub fn new(key: impl Into<ContentKey>, value: impl Into<String>) -> Self {
        Self {
            content_key: key.into(),
            content_value: value.into(),
            updated_at: None,
            updated_by: None,
        }
    }
}

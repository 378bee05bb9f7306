//! Entities owned by external collaborators (image storage, instructor admin).
//!
//! The pipeline only reads these; mutation goes through the collaborator's API.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifier as served by the site API (numeric or string)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    Number(i64),
    Text(String),
}

impl ResourceId {
    /// Numeric value, parsing leading digits of text ids
    pub fn numeric(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => {
                let s = s.trim();
                let end = s
                    .char_indices()
                    .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && c == '-')))
                    .map(|(i, _)| i)
                    .unwrap_or(s.len());
                s[..end].parse().ok()
            }
        }
    }

    /// Order by numeric value; ids without one sort last
    pub fn numeric_cmp(&self, other: &Self) -> Ordering {
        match (self.numeric(), other.numeric()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for ResourceId {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for ResourceId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// An image in the uploaded image library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryImage {
    pub id: ResourceId,

    /// Full-resolution URL
    pub image_url: String,

    /// Thumbnail URL, when the storage backend generated one
    #[serde(default)]
    pub thumb_url: Option<String>,
}

impl LibraryImage {
    /// URL to show in a gallery grid
    pub fn thumbnail(&self) -> &str {
        self.thumb_url
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(&self.image_url)
    }
}

/// An instructor as served by the instructors endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instructor {
    pub id: ResourceId,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub title: Option<String>,

    /// Editor HTML, a shorthand string, or an array of shorthand tokens
    #[serde(default)]
    pub bio: Value,

    #[serde(default)]
    pub image: Option<String>,
}

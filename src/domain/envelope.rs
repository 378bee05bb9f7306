//! Decoding of raw content values into a typed envelope.
//!
//! A stored `content_value` is a single string standing in for several
//! shapes. It is either a plain value (usually a bare URL) or a JSON object
//! written by the admin image editor:
//!
//! ```json
//! {"url": "https://cdn.example.com/hero.jpg", "coords": {"x": 12, "y": -40}, "postLink": "https://instagram.com/p/abc/"}
//! ```
//!
//! Every consumer goes through [`ContentEnvelope::decode`] instead of
//! attempting its own parse. Anything that is not a JSON object falls into
//! the [`ContentEnvelope::Plain`] branch with the raw string untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Pixel offset applied to a positioned image
///
/// No range is enforced; values pass through to the renderer as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coords {
    pub x: i64,
    pub y: i64,
}

impl Coords {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Read coords from a JSON value. Fractional axes round to the nearest
    /// pixel; a missing or non-numeric axis is 0.
    fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let axis = |name: &str| {
            obj.get(name)
                .and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f.round() as i64)))
                .unwrap_or(0)
        };
        Some(Self::new(axis("x"), axis("y")))
    }
}

/// Fields recognized inside a structured envelope
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StructuredContent {
    /// Image or video URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Crop offset (defaults to 0,0)
    pub coords: Coords,

    /// Link to the originating social post
    #[serde(rename = "postLink", skip_serializing_if = "Option::is_none")]
    pub post_link: Option<String>,
}

impl StructuredContent {
    fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            url: non_empty_string(obj.get("url")),
            coords: obj
                .get("coords")
                .and_then(Coords::from_value)
                .unwrap_or_default(),
            post_link: non_empty_string(obj.get("postLink")),
        }
    }
}

/// Empty strings count as absent, matching how the editor clears a field
fn non_empty_string(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Decoded shape of a stored content value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ContentEnvelope {
    /// No record, or the fetch failed
    NoValue,

    /// The raw string is the value
    Plain(String),

    /// The raw string was a JSON object
    Structured(StructuredContent),
}

impl ContentEnvelope {
    /// Decode a raw stored value. Never fails.
    pub fn decode(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::NoValue;
        };

        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(obj)) => Self::Structured(StructuredContent::from_object(&obj)),
            // Scalars, arrays and parse errors all mean "use the string itself"
            _ => Self::Plain(raw.to_string()),
        }
    }

    /// Whether a usable value was stored at all
    pub fn is_present(&self) -> bool {
        !matches!(self, Self::NoValue)
    }

    /// The resolved value: the structured `url`, else the plain string.
    ///
    /// A structured envelope without `url` has no value; it does not fall
    /// back to the raw JSON text.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::NoValue => None,
            Self::Plain(raw) => Some(raw),
            Self::Structured(content) => content.url.as_deref(),
        }
    }

    /// Crop coords; only structured envelopes can carry them
    pub fn coords(&self) -> Coords {
        match self {
            Self::Structured(content) => content.coords,
            _ => Coords::default(),
        }
    }

    /// Social post link, if the envelope carries one
    pub fn post_link(&self) -> Option<&str> {
        match self {
            Self::Structured(content) => content.post_link.as_deref(),
            _ => None,
        }
    }
}

//! Positioned images resolved from content envelopes.

use serde::{Deserialize, Serialize};

use super::envelope::{ContentEnvelope, Coords};

/// An image URL plus the offset it should be rendered at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePlacement {
    pub url: String,

    #[serde(default)]
    pub coords: Coords,
}

impl ImagePlacement {
    /// Place an image at the origin
    pub fn at_origin(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            coords: Coords::default(),
        }
    }

    /// Resolve a placement from a decoded envelope.
    ///
    /// Returns `None` when the envelope has no usable URL, leaving the
    /// caller's default in place. Coords are copied without bounds checks.
    pub fn resolve(envelope: &ContentEnvelope) -> Option<Self> {
        let url = envelope.value()?;
        Some(Self {
            url: url.to_string(),
            coords: envelope.coords(),
        })
    }

    /// CSS `background-position` for this placement
    pub fn background_position(&self) -> String {
        format!("{}px {}px", self.coords.x, self.coords.y)
    }
}

//! Built-in defaults and placeholder banks for each section.
//!
//! These are plain immutable data handed to the section builders. The config
//! file can override any field under `defaults:`.

use serde::{Deserialize, Serialize};

const FACILITY_IMAGE_1: &str =
    "https://static.wixstatic.com/media/c5947c_34e1a84bb98841e3aff3467d7ed9dc04~mv2.png";
const FACILITY_IMAGE_2: &str =
    "https://static.wixstatic.com/media/c5947c_34137efc570a49c89501d43f8410a291~mv2.png";
const FACILITY_VIDEO: &str = "https://www.youtube.com/embed/0zh97sdP8-k";

const WRESTLING_HERO: &str =
    "https://images.unsplash.com/photo-1521412644187-c49fa049e84d?auto=format&fit=crop&w=1600&q=80";
const WRESTLING_DETAIL_1: &str = "https://placehold.co/600x400?text=Wrestling+Training+1";
const WRESTLING_DETAIL_2: &str = "https://placehold.co/900x500?text=Wrestling+Training+2";

const INSTAGRAM_PLACEHOLDER: &str = "https://placehold.co/280x280?text=Upload+via+CMS";

/// An image with its alt text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionedImage {
    pub src: String,
    pub alt: String,
}

impl CaptionedImage {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

/// Defaults for every section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteDefaults {
    pub facility: FacilityDefaults,
    pub wrestling: WrestlingDefaults,
    pub instagram: InstagramDefaults,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacilityDefaults {
    /// The two gallery images, in slot order
    pub images: [CaptionedImage; 2],
    /// Embed URL of the facility tour
    pub video_url: String,
}

impl Default for FacilityDefaults {
    fn default() -> Self {
        Self {
            images: [
                CaptionedImage::new(FACILITY_IMAGE_1, "Wide shot of facility interior"),
                CaptionedImage::new(FACILITY_IMAGE_2, "Clean locker rooms / training equipment"),
            ],
            video_url: FACILITY_VIDEO.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WrestlingDefaults {
    pub hero: String,
    pub detail_1: String,
    pub detail_2: String,
}

impl Default for WrestlingDefaults {
    fn default() -> Self {
        Self {
            hero: WRESTLING_HERO.to_string(),
            detail_1: WRESTLING_DETAIL_1.to_string(),
            detail_2: WRESTLING_DETAIL_2.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstagramDefaults {
    /// Image shown in every placeholder tile
    pub placeholder_image: String,
    /// Number of placeholder tiles
    pub placeholder_count: u32,
}

impl Default for InstagramDefaults {
    fn default() -> Self {
        Self {
            placeholder_image: INSTAGRAM_PLACEHOLDER.to_string(),
            placeholder_count: 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override() {
        let yaml = r#"
wrestling:
  hero: https://cdn.example.com/hero.jpg
instagram:
  placeholder_count: 3
"#;
        let defaults: SiteDefaults = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(defaults.wrestling.hero, "https://cdn.example.com/hero.jpg");
        assert_eq!(defaults.wrestling.detail_1, WRESTLING_DETAIL_1);
        assert_eq!(defaults.instagram.placeholder_count, 3);
        assert_eq!(defaults.instagram.placeholder_image, INSTAGRAM_PLACEHOLDER);
        assert_eq!(defaults.facility, FacilityDefaults::default());
    }
}

//! "Latest on Instagram" feed.
//!
//! Six image slots, each optionally linked to the originating post. Slots
//! have no individual default: unresolved slots are left out, and when none
//! resolve the whole placeholder bank is shown so the section never vanishes.

use serde::Serialize;

use super::defaults::InstagramDefaults;
use crate::core::{or_placeholders, ContentFetcher, FetchBatch};
use crate::domain::ContentKey;

/// Link value the editor uses for "no post yet"
const NO_LINK: &str = "#";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstagramPost {
    /// Slot number (1-based)
    pub id: u32,

    pub image_url: String,

    /// Link to the post on Instagram
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Iframe URL for the post, when it has a link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed_url: Option<String>,
}

impl InstagramPost {
    pub fn new(id: u32, image_url: impl Into<String>, link: Option<&str>) -> Self {
        let link = link.filter(|l| !l.is_empty() && *l != NO_LINK);
        Self {
            id,
            image_url: image_url.into(),
            embed_url: link.map(post_embed_url),
            link: link.map(str::to_string),
        }
    }
}

/// `https://www.instagram.com/p/abc/?igsh=x` -> `https://www.instagram.com/p/abc/embed`
pub fn post_embed_url(link: &str) -> String {
    let base = link.split(['?', '#']).next().unwrap_or(link);
    if base.ends_with('/') {
        format!("{}embed", base)
    } else {
        format!("{}/embed", base)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstagramFeed {
    pub posts: Vec<InstagramPost>,

    /// Whether `posts` is the placeholder bank
    pub placeholder: bool,
}

impl InstagramFeed {
    pub fn keys() -> Vec<ContentKey> {
        (1..=ContentKey::INSTAGRAM_SLOTS)
            .map(ContentKey::instagram_image)
            .collect()
    }

    /// The registered placeholder bank
    pub fn placeholders(defaults: &InstagramDefaults) -> Vec<InstagramPost> {
        (1..=defaults.placeholder_count)
            .map(|id| InstagramPost::new(id, defaults.placeholder_image.clone(), None))
            .collect()
    }

    pub fn build(batch: &FetchBatch, defaults: &InstagramDefaults) -> Self {
        let resolved: Vec<InstagramPost> = (1..=ContentKey::INSTAGRAM_SLOTS)
            .filter_map(|slot| {
                let envelope = batch.envelope(&ContentKey::instagram_image(slot));
                let image_url = envelope.value()?;
                Some(InstagramPost::new(slot, image_url, envelope.post_link()))
            })
            .collect();

        let placeholder = resolved.is_empty();
        Self {
            posts: or_placeholders(resolved, &Self::placeholders(defaults)),
            placeholder,
        }
    }

    pub async fn load(fetcher: &ContentFetcher, defaults: &InstagramDefaults) -> Self {
        let batch = fetcher.fetch_many(&Self::keys()).await;
        Self::build(&batch, defaults)
    }
}

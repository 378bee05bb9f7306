//! Wrestling program page: positioned hero image and two detail images.

use serde::Serialize;

use super::defaults::WrestlingDefaults;
use crate::core::{ContentFetcher, FetchBatch};
use crate::domain::{ContentKey, ImagePlacement};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrestlingView {
    pub hero: ImagePlacement,
    pub detail_1: String,
    pub detail_2: String,
}

impl WrestlingView {
    pub fn keys() -> Vec<ContentKey> {
        vec![
            ContentKey::new(ContentKey::WRESTLING_HERO_IMAGE),
            ContentKey::new(ContentKey::WRESTLING_DETAIL_1),
            ContentKey::new(ContentKey::WRESTLING_DETAIL_2),
        ]
    }

    pub fn build(batch: &FetchBatch, defaults: &WrestlingDefaults) -> Self {
        let hero = ImagePlacement::resolve(
            &batch.envelope(&ContentKey::new(ContentKey::WRESTLING_HERO_IMAGE)),
        )
        .unwrap_or_else(|| ImagePlacement::at_origin(defaults.hero.clone()));

        let detail = |key: &str, default: &str| {
            batch
                .envelope(&ContentKey::new(key))
                .value()
                .unwrap_or(default)
                .to_string()
        };

        Self {
            hero,
            detail_1: detail(ContentKey::WRESTLING_DETAIL_1, &defaults.detail_1),
            detail_2: detail(ContentKey::WRESTLING_DETAIL_2, &defaults.detail_2),
        }
    }

    pub async fn load(fetcher: &ContentFetcher, defaults: &WrestlingDefaults) -> Self {
        let batch = fetcher.fetch_many(&Self::keys()).await;
        Self::build(&batch, defaults)
    }
}

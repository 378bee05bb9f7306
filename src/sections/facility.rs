//! "Our Facility" section: two gallery images and a tour video.

use serde::Serialize;

use super::defaults::{CaptionedImage, FacilityDefaults};
use crate::core::{fill_slots, normalize_video, ContentFetcher, FetchBatch};
use crate::domain::ContentKey;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacilityView {
    pub images: Vec<CaptionedImage>,
    pub video_url: String,
}

impl FacilityView {
    /// Keys this section reads
    pub fn keys() -> Vec<ContentKey> {
        vec![
            ContentKey::new(ContentKey::FACILITY_IMAGE_1),
            ContentKey::new(ContentKey::FACILITY_IMAGE_2),
            ContentKey::new(ContentKey::FACILITY_VIDEO),
        ]
    }

    /// Merge fetched content over the defaults
    pub fn build(batch: &FetchBatch, defaults: &FacilityDefaults) -> Self {
        let image_keys = [ContentKey::FACILITY_IMAGE_1, ContentKey::FACILITY_IMAGE_2];

        let resolved = image_keys
            .iter()
            .zip(&defaults.images)
            .map(|(key, default)| {
                batch
                    .envelope(&ContentKey::new(*key))
                    .value()
                    .map(|src| CaptionedImage::new(src, default.alt.clone()))
            })
            .collect();

        let video_url = batch
            .envelope(&ContentKey::new(ContentKey::FACILITY_VIDEO))
            .value()
            .map(normalize_video)
            .unwrap_or_else(|| defaults.video_url.clone());

        Self {
            images: fill_slots(resolved, defaults.images.as_slice()),
            video_url,
        }
    }

    pub async fn load(fetcher: &ContentFetcher, defaults: &FacilityDefaults) -> Self {
        let batch = fetcher.fetch_many(&Self::keys()).await;
        Self::build(&batch, defaults)
    }
}

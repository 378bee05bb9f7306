//! Rendering surfaces of the site, as view models.
//!
//! Each section declares the content keys it reads, fetches them as one
//! batch and merges the results over its defaults. Markup is left to the
//! web layer.

pub mod defaults;
pub mod facility;
pub mod instagram;
pub mod instructors;
pub mod wrestling;

use std::sync::Arc;

use crate::adapters::InstructorSource;
use crate::core::ContentFetcher;

pub use defaults::{
    CaptionedImage, FacilityDefaults, InstagramDefaults, SiteDefaults, WrestlingDefaults,
};
pub use facility::FacilityView;
pub use instagram::{InstagramFeed, InstagramPost};
pub use instructors::{InstructorCard, InstructorsPage};
pub use wrestling::WrestlingView;

/// Loads every section against one backend and one set of defaults
#[derive(Clone)]
pub struct SiteSections {
    fetcher: ContentFetcher,
    instructors: Arc<dyn InstructorSource>,
    defaults: Arc<SiteDefaults>,
}

impl SiteSections {
    pub fn new(
        fetcher: ContentFetcher,
        instructors: Arc<dyn InstructorSource>,
        defaults: Arc<SiteDefaults>,
    ) -> Self {
        Self {
            fetcher,
            instructors,
            defaults,
        }
    }

    pub fn defaults(&self) -> &SiteDefaults {
        &self.defaults
    }

    pub async fn facility(&self) -> FacilityView {
        FacilityView::load(&self.fetcher, &self.defaults.facility).await
    }

    pub async fn wrestling(&self) -> WrestlingView {
        WrestlingView::load(&self.fetcher, &self.defaults.wrestling).await
    }

    pub async fn instagram(&self) -> InstagramFeed {
        InstagramFeed::load(&self.fetcher, &self.defaults.instagram).await
    }

    pub async fn instructors(&self) -> InstructorsPage {
        InstructorsPage::load(self.instructors.as_ref()).await
    }
}

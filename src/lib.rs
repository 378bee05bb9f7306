//! tatami - content resolution pipeline for the gym site
//!
//! Site content (images, embedded video, instructor bios) lives in opaque
//! key-value records edited through the admin surface. This crate turns a
//! stored value into something safe to render, falling back to defaults
//! whenever a value is missing, malformed, or unreachable.
//!
//! # Pipeline
//!
//! ```text
//! fetch (per key, concurrent) -> decode envelope -> normalize -> merge over defaults
//! ```
//!
//! # Modules
//!
//! - `adapters`: Backing stores (site HTTP API, in-memory snapshot)
//! - `core`: Fetcher, video/bio normalizers, fallback policy, stale guard
//! - `domain`: Data structures (ContentRecord, ContentEnvelope, ImagePlacement)
//! - `sections`: View models for each page section
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Resolve one content key against the site API
//! tatami resolve wrestling_hero_image
//!
//! # Load a section from a local snapshot
//! tatami --snapshot content.json section instagram
//!
//! # Normalize a video link
//! tatami video "https://youtu.be/0zh97sdP8-k"
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod sections;

// Re-export main types at crate root for convenience
pub use adapters::{ContentStore, MemoryStore, SiteApi, StoreError};
pub use core::{normalize_bio, normalize_video, BioInput, ContentFetcher, FetchOutcome};
pub use domain::{ContentEnvelope, ContentKey, ContentRecord, Coords, ImagePlacement};
pub use sections::{SiteDefaults, SiteSections};

//! Content resolution pipeline.
//!
//! This module contains:
//! - Fetcher: per-key content reads with failure isolation
//! - Video: video reference normalization
//! - Bio: rich-text normalization and sanitization
//! - Fallback: default and placeholder substitution
//! - Guard: stale-result protection for rendering surfaces

pub mod bio;
pub mod fallback;
pub mod fetcher;
pub mod guard;
pub mod video;

// Re-export commonly used types
pub use bio::{normalize_bio, sanitize_html, BioInput};
pub use fallback::{fill_slots, or_placeholders};
pub use fetcher::{ContentFetcher, FetchBatch, FetchOutcome};
pub use guard::{RenderSlot, SurfaceGuard, Ticket};
pub use video::{canonical_embed, extract_video_id, normalize_video};

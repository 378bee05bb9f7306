//! Domain types for the content pipeline.
//!
//! This module contains the core data structures:
//! - Record: stored content records and their keys
//! - Envelope: the decoded shape of a stored value
//! - Placement: positioned images
//! - Resource: library images and instructors owned by collaborators

pub mod envelope;
pub mod placement;
pub mod record;
pub mod resource;

// Re-export commonly used types
pub use envelope::{ContentEnvelope, Coords, StructuredContent};
pub use placement::ImagePlacement;
pub use record::{ContentKey, ContentRecord};
pub use resource::{Instructor, LibraryImage, ResourceId};

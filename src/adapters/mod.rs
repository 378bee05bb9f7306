//! Adapter interfaces for the site's backing stores.
//!
//! Adapters provide a unified interface over wherever content lives: the
//! site's HTTP API in production, or an in-memory snapshot for tests and
//! offline inspection.

pub mod http;
pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{ContentKey, ContentRecord, Instructor, LibraryImage, ResourceId};

// Re-export the adapters
pub use http::SiteApi;
pub use memory::{MemoryStore, Snapshot};

/// Errors raised by store adapters
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from explicit image library actions.
///
/// Unlike content reads these reach the admin, see [`LibraryError::user_message`].
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("Failed to load image library: {0}")]
    Load(#[source] StoreError),

    #[error("Failed to delete image {id}: {source}")]
    Delete {
        id: ResourceId,
        #[source]
        source: StoreError,
    },
}

impl LibraryError {
    /// Message shown to the admin who triggered the action
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Load(_) => "Failed to load images.",
            Self::Delete { .. } => "Failed to delete image. Please try again.",
        }
    }
}

/// Read access to content records
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Human-readable store name
    fn name(&self) -> &str;

    /// Fetch one record. `Ok(None)` means no record exists for the key.
    async fn get(&self, key: &ContentKey) -> Result<Option<ContentRecord>, StoreError>;
}

/// The uploaded image library
#[async_trait]
pub trait ImageLibrary: Send + Sync {
    /// List all images
    async fn list_images(&self) -> Result<Vec<LibraryImage>, LibraryError>;

    /// Delete an image. Deleting an id that is already gone succeeds.
    async fn delete_image(&self, id: &ResourceId) -> Result<(), LibraryError>;
}

/// Source of instructor entries
#[async_trait]
pub trait InstructorSource: Send + Sync {
    async fn list_instructors(&self) -> Result<Vec<Instructor>, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_error_messages() {
        let load = LibraryError::Load(StoreError::Status {
            status: 500,
            url: "/api/images".to_string(),
        });
        assert_eq!(load.user_message(), "Failed to load images.");

        let delete = LibraryError::Delete {
            id: ResourceId::Number(4),
            source: StoreError::Status {
                status: 500,
                url: "/api/images/4".to_string(),
            },
        };
        assert_eq!(
            delete.user_message(),
            "Failed to delete image. Please try again."
        );
        assert!(delete.to_string().contains("image 4"));
    }
}

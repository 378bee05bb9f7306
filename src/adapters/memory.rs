//! In-memory store, optionally loaded from a JSON snapshot file.
//!
//! Snapshot format:
//!
//! ```json
//! {
//!   "content": [{"content_key": "facility_video", "content_value": "https://youtu.be/0zh97sdP8-k"}],
//!   "images": [{"id": 1, "image_url": "https://cdn/a.jpg", "thumb_url": null}],
//!   "instructors": [{"id": 1, "name": "Coach", "bio": ["#Coach", "*Black Belt"]}]
//! }
//! ```

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs;

use super::{ContentStore, ImageLibrary, InstructorSource, LibraryError, StoreError};
use crate::domain::{ContentKey, ContentRecord, Instructor, LibraryImage, ResourceId};

/// Serialized store contents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub content: Vec<ContentRecord>,

    #[serde(default)]
    pub images: Vec<LibraryImage>,

    #[serde(default)]
    pub instructors: Vec<Instructor>,
}

/// Store holding everything in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: HashMap<ContentKey, ContentRecord>,
    images: Mutex<Vec<LibraryImage>>,
    instructors: Vec<Instructor>,
    /// Keys whose reads fail, to exercise degraded paths
    failing: HashSet<ContentKey>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a snapshot
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            records: snapshot
                .content
                .into_iter()
                .map(|record| (record.content_key.clone(), record))
                .collect(),
            images: Mutex::new(snapshot.images),
            instructors: snapshot.instructors,
            failing: HashSet::new(),
        }
    }

    /// Load a snapshot file
    pub async fn load(path: &Path) -> Result<Self, StoreError> {
        let content = fs::read_to_string(path).await?;
        let snapshot: Snapshot = serde_json::from_str(&content)?;
        Ok(Self::from_snapshot(snapshot))
    }

    /// Add or replace a content record
    pub fn with_record(mut self, key: impl Into<ContentKey>, value: impl Into<String>) -> Self {
        let record = ContentRecord::new(key, value);
        self.records.insert(record.content_key.clone(), record);
        self
    }

    /// Make reads of `key` fail with a 503
    pub fn with_failure(mut self, key: impl Into<ContentKey>) -> Self {
        self.failing.insert(key.into());
        self
    }

    /// Add an image to the library
    pub fn with_image(self, image: LibraryImage) -> Self {
        self.lock_images().push(image);
        self
    }

    /// Add an instructor
    pub fn with_instructor(mut self, instructor: Instructor) -> Self {
        self.instructors.push(instructor);
        self
    }

    fn lock_images(&self) -> std::sync::MutexGuard<'_, Vec<LibraryImage>> {
        self.images.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn get(&self, key: &ContentKey) -> Result<Option<ContentRecord>, StoreError> {
        if self.failing.contains(key) {
            return Err(StoreError::Status {
                status: 503,
                url: format!("memory://content/{}", key),
            });
        }
        Ok(self.records.get(key).cloned())
    }
}

#[async_trait]
impl ImageLibrary for MemoryStore {
    async fn list_images(&self) -> Result<Vec<LibraryImage>, LibraryError> {
        Ok(self.lock_images().clone())
    }

    async fn delete_image(&self, id: &ResourceId) -> Result<(), LibraryError> {
        self.lock_images().retain(|image| &image.id != id);
        Ok(())
    }
}

#[async_trait]
impl InstructorSource for MemoryStore {
    async fn list_instructors(&self) -> Result<Vec<Instructor>, StoreError> {
        Ok(self.instructors.clone())
    }
}

//! Content fetching with per-key failure isolation.
//!
//! A section asks for all of its keys at once. Each key is read
//! independently; a failed read is logged and becomes "absent" for that key
//! only, so the section renders with its defaults instead of an error.

use std::sync::Arc;

use futures::future::join_all;
use serde::Serialize;

use crate::adapters::ContentStore;
use crate::domain::{ContentEnvelope, ContentKey};

/// Result of reading one key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum FetchOutcome {
    /// A non-empty raw value
    Fetched(String),

    /// No record, or an empty value
    Missing,

    /// The read failed; carries the error text for diagnostics
    Failed(String),
}

impl FetchOutcome {
    /// The raw value, if one was fetched
    pub fn raw(&self) -> Option<&str> {
        match self {
            Self::Fetched(raw) => Some(raw),
            _ => None,
        }
    }

    /// Decode the fetched value
    pub fn envelope(&self) -> ContentEnvelope {
        ContentEnvelope::decode(self.raw())
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }
}

/// Outcomes for a batch of keys, in request order
#[derive(Debug, Clone, Default, Serialize)]
pub struct FetchBatch {
    entries: Vec<(ContentKey, FetchOutcome)>,
}

impl FetchBatch {
    /// Outcome for a key; `None` if the key was not requested
    pub fn get(&self, key: &ContentKey) -> Option<&FetchOutcome> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, outcome)| outcome)
    }

    /// Decoded envelope for a key; unrequested keys have no value
    pub fn envelope(&self, key: &ContentKey) -> ContentEnvelope {
        self.get(key)
            .map(FetchOutcome::envelope)
            .unwrap_or(ContentEnvelope::NoValue)
    }

    /// Whether no key produced a value
    pub fn all_absent(&self) -> bool {
        !self.entries.iter().any(|(_, outcome)| outcome.is_present())
    }

    /// Number of keys with a value
    pub fn present_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, outcome)| outcome.is_present())
            .count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ContentKey, &FetchOutcome)> {
        self.entries.iter().map(|(k, o)| (k, o))
    }
}

impl FromIterator<(ContentKey, FetchOutcome)> for FetchBatch {
    fn from_iter<I: IntoIterator<Item = (ContentKey, FetchOutcome)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Reads content keys from a store
#[derive(Clone)]
pub struct ContentFetcher {
    store: Arc<dyn ContentStore>,
}

impl ContentFetcher {
    /// Create a fetcher over a store
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    /// Name of the underlying store
    pub fn store_name(&self) -> &str {
        self.store.name()
    }

    /// Read one key. Never fails; errors are logged and reported as `Failed`.
    pub async fn fetch_one(&self, key: &ContentKey) -> FetchOutcome {
        match self.store.get(key).await {
            Ok(Some(record)) if !record.content_value.is_empty() => {
                FetchOutcome::Fetched(record.content_value)
            }
            Ok(_) => {
                tracing::debug!(key = %key, "No content stored, using default");
                FetchOutcome::Missing
            }
            Err(e) => {
                tracing::warn!(
                    key = %key,
                    store = self.store.name(),
                    error = %e,
                    "Content fetch failed, using default"
                );
                FetchOutcome::Failed(e.to_string())
            }
        }
    }

    /// Read several keys concurrently.
    ///
    /// The batch keeps request order regardless of completion order.
    pub async fn fetch_many(&self, keys: &[ContentKey]) -> FetchBatch {
        let outcomes = join_all(keys.iter().map(|key| self.fetch_one(key))).await;
        let batch: FetchBatch = keys.iter().cloned().zip(outcomes).collect();

        if !batch.is_empty() {
            tracing::debug!(
                store = self.store_name(),
                requested = batch.len(),
                present = batch.present_count(),
                "Fetched content batch"
            );
        }
        batch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStore;

    fn fetcher(store: MemoryStore) -> ContentFetcher {
        ContentFetcher::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_fetch_one_outcomes() {
        let fetcher = fetcher(
            MemoryStore::new()
                .with_record("a", "value")
                .with_record("empty", "")
                .with_failure("broken"),
        );

        assert_eq!(
            fetcher.fetch_one(&"a".into()).await,
            FetchOutcome::Fetched("value".to_string())
        );
        assert_eq!(fetcher.fetch_one(&"empty".into()).await, FetchOutcome::Missing);
        assert_eq!(fetcher.fetch_one(&"nope".into()).await, FetchOutcome::Missing);
        assert!(matches!(
            fetcher.fetch_one(&"broken".into()).await,
            FetchOutcome::Failed(_)
        ));
    }

    #[tokio::test]
    async fn test_failure_does_not_abort_batch() {
        let fetcher = fetcher(
            MemoryStore::new()
                .with_record("a", "1")
                .with_record("c", "3")
                .with_failure("b"),
        );

        let keys: Vec<ContentKey> = vec!["a".into(), "b".into(), "c".into()];
        let batch = fetcher.fetch_many(&keys).await;

        assert_eq!(batch.len(), 3);
        assert_eq!(batch.present_count(), 2);
        assert_eq!(batch.get(&"a".into()).and_then(FetchOutcome::raw), Some("1"));
        assert_eq!(batch.get(&"c".into()).and_then(FetchOutcome::raw), Some("3"));
        assert!(!batch.get(&"b".into()).unwrap().is_present());

        let order: Vec<&str> = batch.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_empty_request() {
        let fetcher = fetcher(MemoryStore::new());
        assert_eq!(fetcher.store_name(), "memory");

        let batch = fetcher.fetch_many(&[]).await;
        assert!(batch.is_empty());
        assert!(batch.all_absent());
    }

    #[tokio::test]
    async fn test_all_absent() {
        let fetcher = fetcher(MemoryStore::new().with_failure("x"));
        let keys: Vec<ContentKey> = vec!["x".into(), "y".into()];
        let batch = fetcher.fetch_many(&keys).await;
        assert!(batch.all_absent());
        assert_eq!(batch.envelope(&"x".into()), ContentEnvelope::NoValue);
        assert_eq!(batch.envelope(&"unrequested".into()), ContentEnvelope::NoValue);
    }
}

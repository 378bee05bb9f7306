//! HTTP adapter for the site API.
//!
//! Endpoints (relative to the configured base URL):
//! - `GET /api/content/{key}` -> `{"content_value": "..."}`
//! - `GET /api/images`, `DELETE /api/images/{id}`
//! - `GET /api/instructors`

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use super::{ContentStore, ImageLibrary, InstructorSource, LibraryError, StoreError};
use crate::config::ResolvedConfig;
use crate::domain::{ContentKey, ContentRecord, Instructor, LibraryImage, ResourceId};

/// Body of a content read. Every field is optional; a body without
/// `content_value` reads as "no record". Metadata is kept loosely typed so
/// an unexpected shape never costs the value itself.
#[derive(Debug, Deserialize)]
struct ContentBody {
    #[serde(default)]
    content_value: Option<String>,
    #[serde(default)]
    updated_at: Option<Value>,
    #[serde(default)]
    updated_by: Option<Value>,
}

/// RFC 3339 string or epoch seconds
fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Value::Number(n) => DateTime::from_timestamp(n.as_i64()?, 0),
        _ => None,
    }
}

/// Editor names may arrive as a string or a numeric user id
fn parse_editor(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Client for the site API
pub struct SiteApi {
    /// Base URL without trailing slash
    base_url: String,
    /// HTTP client
    client: reqwest::Client,
}

impl SiteApi {
    /// Create a client with a request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(base_url, client))
    }

    /// Create a client reusing an existing `reqwest::Client`
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    /// Create from resolved config
    pub fn from_config(config: &ResolvedConfig) -> Result<Self, StoreError> {
        Self::new(&config.api_base_url, config.request_timeout())
    }

    /// Build an API URL
    fn api_url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, StoreError> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(StoreError::Status {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl ContentStore for SiteApi {
    fn name(&self) -> &str {
        "site-api"
    }

    async fn get(&self, key: &ContentKey) -> Result<Option<ContentRecord>, StoreError> {
        let url = self.api_url(&format!("content/{}", key));
        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(StoreError::Status {
                status: response.status().as_u16(),
                url,
            });
        }

        let text = response.text().await?;
        let body: ContentBody = serde_json::from_str(&text)?;

        Ok(body.content_value.map(|value| ContentRecord {
            content_key: key.clone(),
            content_value: value,
            updated_at: body.updated_at.as_ref().and_then(parse_timestamp),
            updated_by: body.updated_by.as_ref().and_then(parse_editor),
        }))
    }
}

#[async_trait]
impl ImageLibrary for SiteApi {
    async fn list_images(&self) -> Result<Vec<LibraryImage>, LibraryError> {
        self.get_json(&self.api_url("images"))
            .await
            .map_err(LibraryError::Load)
    }

    async fn delete_image(&self, id: &ResourceId) -> Result<(), LibraryError> {
        let url = self.api_url(&format!("images/{}", id));
        let delete_error = |source: StoreError| LibraryError::Delete {
            id: id.clone(),
            source,
        };

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| delete_error(e.into()))?;

        let status = response.status();
        if status.is_success() || status == StatusCode::NOT_FOUND {
            return Ok(());
        }

        Err(delete_error(StoreError::Status {
            status: status.as_u16(),
            url,
        }))
    }
}

#[async_trait]
impl InstructorSource for SiteApi {
    async fn list_instructors(&self) -> Result<Vec<Instructor>, StoreError> {
        self.get_json(&self.api_url("instructors")).await
    }
}

//! Site API Integration Tests
//!
//! Tests for the HTTP adapter against a mock server: per-key failure
//! isolation, tolerant body handling, and image library actions.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tatami::adapters::{ContentStore, ImageLibrary, InstructorSource, SiteApi};
use tatami::core::{ContentFetcher, FetchOutcome};
use tatami::domain::{ContentKey, ResourceId};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_content(server: &MockServer, key: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/api/content/{}", key)))
        .respond_with(response)
        .mount(server)
        .await;
}

fn api(server: &MockServer) -> SiteApi {
    SiteApi::new(server.uri(), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_get_content_record() {
    let server = MockServer::start().await;
    mount_content(
        &server,
        "facility_video",
        ResponseTemplate::new(200).set_body_json(json!({
            "content_key": "facility_video",
            "content_value": "https://youtu.be/0zh97sdP8-k",
            "updated_at": "2025-02-01T10:00:00Z",
            "updated_by": "admin"
        })),
    )
    .await;

    let record = api(&server)
        .get(&ContentKey::new("facility_video"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(record.content_value, "https://youtu.be/0zh97sdP8-k");
    assert_eq!(record.updated_by.as_deref(), Some("admin"));
    assert!(record.updated_at.is_some());
}

#[tokio::test]
async fn test_unexpected_metadata_keeps_value() {
    let server = MockServer::start().await;
    mount_content(
        &server,
        "facility_video",
        ResponseTemplate::new(200).set_body_json(json!({
            "content_value": "https://youtu.be/dQw4w9WgXcQ",
            "updated_by": 7,
            "updated_at": 1700000000
        })),
    )
    .await;

    let fetcher = ContentFetcher::new(Arc::new(api(&server)));
    let outcome = fetcher
        .fetch_one(&ContentKey::new(ContentKey::FACILITY_VIDEO))
        .await;

    assert_eq!(
        outcome,
        FetchOutcome::Fetched("https://youtu.be/dQw4w9WgXcQ".to_string())
    );

    let record = api(&server)
        .get(&ContentKey::new(ContentKey::FACILITY_VIDEO))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.updated_by.as_deref(), Some("7"));
    assert!(record.updated_at.is_some());
}

#[tokio::test]
async fn test_batch_isolates_failures() {
    let server = MockServer::start().await;
    mount_content(
        &server,
        "good",
        ResponseTemplate::new(200).set_body_json(json!({"content_value": "https://cdn/a.jpg"})),
    )
    .await;
    mount_content(&server, "missing", ResponseTemplate::new(404)).await;
    mount_content(&server, "broken", ResponseTemplate::new(500)).await;
    mount_content(
        &server,
        "no_value_field",
        ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})),
    )
    .await;
    mount_content(
        &server,
        "not_json",
        ResponseTemplate::new(200).set_body_string("<html>proxy error</html>"),
    )
    .await;

    let fetcher = ContentFetcher::new(Arc::new(api(&server)));
    let keys: Vec<ContentKey> = ["good", "missing", "broken", "no_value_field", "not_json"]
        .into_iter()
        .map(ContentKey::new)
        .collect();

    let batch = fetcher.fetch_many(&keys).await;

    assert_eq!(batch.len(), 5);
    assert_eq!(
        batch.get(&ContentKey::new("good")),
        Some(&FetchOutcome::Fetched("https://cdn/a.jpg".to_string()))
    );
    assert_eq!(
        batch.get(&ContentKey::new("missing")),
        Some(&FetchOutcome::Missing)
    );
    assert!(matches!(
        batch.get(&ContentKey::new("broken")),
        Some(FetchOutcome::Failed(_))
    ));
    assert_eq!(
        batch.get(&ContentKey::new("no_value_field")),
        Some(&FetchOutcome::Missing)
    );
    assert!(matches!(
        batch.get(&ContentKey::new("not_json")),
        Some(FetchOutcome::Failed(_))
    ));
    assert_eq!(batch.present_count(), 1);
}

#[tokio::test]
async fn test_slow_fetch_degrades_to_absent() {
    let server = MockServer::start().await;
    mount_content(
        &server,
        "slow",
        ResponseTemplate::new(200)
            .set_body_json(json!({"content_value": "late"}))
            .set_delay(Duration::from_secs(3)),
    )
    .await;

    let api = SiteApi::new(server.uri(), Duration::from_millis(200)).unwrap();
    let fetcher = ContentFetcher::new(Arc::new(api));

    let outcome = fetcher.fetch_one(&ContentKey::new("slow")).await;
    assert!(matches!(outcome, FetchOutcome::Failed(_)));
    assert!(!outcome.envelope().is_present());
}

#[tokio::test]
async fn test_list_images() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/images"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "image_url": "https://cdn/1.jpg", "thumb_url": "https://cdn/1_t.jpg"},
            {"id": 2, "image_url": "https://cdn/2.jpg"}
        ])))
        .mount(&server)
        .await;

    let images = api(&server).list_images().await.unwrap();
    assert_eq!(images.len(), 2);
    assert_eq!(images[0].thumbnail(), "https://cdn/1_t.jpg");
    assert_eq!(images[1].thumbnail(), "https://cdn/2.jpg");
}

#[tokio::test]
async fn test_list_images_failure_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/images"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = api(&server).list_images().await.unwrap_err();
    assert_eq!(err.user_message(), "Failed to load images.");
}

#[tokio::test]
async fn test_delete_image_already_gone() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/images/4"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    assert!(api(&server)
        .delete_image(&ResourceId::Number(4))
        .await
        .is_ok());
}

#[tokio::test]
async fn test_delete_image_failure_message() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/images/5"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let err = api(&server)
        .delete_image(&ResourceId::Number(5))
        .await
        .unwrap_err();
    assert_eq!(
        err.user_message(),
        "Failed to delete image. Please try again."
    );
}

#[tokio::test]
async fn test_list_instructors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/instructors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "2", "name": "B", "bio": "<p>Bio</p>"},
            {"id": 1, "name": "A", "title": "Head Coach", "bio": ["#A", "*Black Belt"], "image": "https://cdn/a.jpg"}
        ])))
        .mount(&server)
        .await;

    let instructors = api(&server).list_instructors().await.unwrap();
    assert_eq!(instructors.len(), 2);
    assert_eq!(instructors[0].id, ResourceId::from("2"));
    assert_eq!(instructors[1].title.as_deref(), Some("Head Coach"));
}

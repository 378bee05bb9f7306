//! Video Normalization Integration Tests
//!
//! Tests for the supported URL shapes, passthrough, and idempotency.

use tatami::core::{canonical_embed, normalize_video};

const ID: &str = "dQw4w9WgXcQ";

#[test]
fn test_supported_shapes() {
    let urls = [
        format!("https://youtu.be/{}", ID),
        format!("https://youtu.be/{}?si=tracking", ID),
        format!("https://www.youtube.com/v/{}?version=3", ID),
        format!("https://www.youtube.com/u/w/{}", ID),
        format!("https://www.youtube.com/embed/{}", ID),
        format!("https://www.youtube.com/watch?v={}", ID),
        format!("https://www.youtube.com/watch?v={}&list=PL123#t=30", ID),
        format!("https://www.youtube.com/watch?feature=player_embedded&v={}", ID),
    ];

    for url in &urls {
        assert_eq!(normalize_video(url), canonical_embed(ID), "url = {}", url);
    }
}

#[test]
fn test_canonical_form() {
    assert_eq!(
        canonical_embed(ID),
        "https://www.youtube.com/embed/dQw4w9WgXcQ"
    );
}

#[test]
fn test_no_valid_id_passes_through() {
    let inputs = [
        "",
        "dQw4w9WgXcQ",
        "https://vimeo.com/76979871",
        "https://youtu.be/abc",
        "https://www.youtube.com/watch?v=dQw4w9WgXcQXYZ",
        "https://www.youtube.com/channel/UC123",
    ];

    for input in inputs {
        assert_eq!(normalize_video(input), input, "input = {}", input);
    }
}

#[test]
fn test_idempotent() {
    let inputs = [
        format!("https://youtu.be/{}", ID),
        format!("https://www.youtube.com/watch?v={}", ID),
        canonical_embed(ID),
        "https://vimeo.com/76979871".to_string(),
        "https://youtu.be/short".to_string(),
        "garbage".to_string(),
    ];

    for input in &inputs {
        let once = normalize_video(input);
        assert_eq!(normalize_video(&once), once, "input = {}", input);
    }
}

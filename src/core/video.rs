//! Video reference normalization.
//!
//! Admins paste whatever YouTube URL they have at hand (share links, watch
//! pages, old `/v/` embeds). The player needs the `/embed/<id>` form.

use std::sync::LazyLock;

use regex::Regex;

/// Base of the canonical embed URL
pub const EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// Length of a YouTube video id
pub const VIDEO_ID_LEN: usize = 11;

/// Recognized id positions: `youtu.be/`, `v/`, `u/<c>/`, `embed/`, `watch?v=`, `&v=`.
///
/// The leading `.*` is greedy, so the last recognized position in the URL wins.
static VIDEO_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*(youtu\.be/|v/|u/\w/|embed/|watch\?v=|&v=)([^#&?]*).*")
        .expect("Invalid video id regex")
});

/// Extract an 11-character video id, if the input carries one
pub fn extract_video_id(input: &str) -> Option<&str> {
    let id = VIDEO_ID_RE.captures(input)?.get(2)?.as_str();
    (id.chars().count() == VIDEO_ID_LEN).then_some(id)
}

/// Canonical embed URL for a video id
pub fn canonical_embed(id: &str) -> String {
    format!("{}{}", EMBED_BASE, id)
}

/// Normalize an arbitrary video reference to its embed URL.
///
/// Inputs without a recognizable id are returned unchanged. The result may
/// not play, but the section still renders.
pub fn normalize_video(input: &str) -> String {
    match extract_video_id(input) {
        Some(id) => canonical_embed(id),
        None => {
            tracing::debug!(input, "No video id found, using raw value");
            input.to_string()
        }
    }
}

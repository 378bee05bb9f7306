//! Instructor bio normalization.
//!
//! Bios come in two encodings:
//! - HTML produced by the admin rich-text editor
//! - a shorthand token list, one paragraph per token:
//!
//! ```text
//! #Coach Name        -> <h3>Coach Name</h3>
//! *Black Belt        -> <p><strong>Black Belt</strong></p>
//! Plain sentence.    -> <p>Plain sentence.</p>
//! ```
//!
//! Both are sanitized before they leave this module, so the result can be
//! injected into a page as-is.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

/// Prefix marking a subheading token
pub const HEADING_MARKER: char = '#';

/// Prefix marking a bold paragraph token
pub const EMPHASIS_MARKER: char = '*';

/// Opening paragraph or heading tag, with or without attributes
static BLOCK_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(?:p|h[1-6])(?:\s[^>]*)?>").expect("Invalid block tag regex")
});

static SANITIZER: LazyLock<ammonia::Builder<'static>> = LazyLock::new(|| {
    let mut builder = ammonia::Builder::default();
    // Editor output carries ql-* classes for alignment and indentation
    builder.add_generic_attributes(&["class"]);
    builder
});

/// A bio as stored on an instructor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BioInput {
    /// A single string: either editor HTML or one shorthand token
    Text(String),

    /// Ordered shorthand tokens
    Tokens(Vec<String>),
}

impl BioInput {
    /// Interpret a bio field from the instructors API.
    ///
    /// Non-string array items are coerced to their JSON text; `null` is an
    /// empty token list.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(s) => Self::Text(s.clone()),
            Value::Null => Self::Tokens(Vec::new()),
            Value::Array(items) => Self::Tokens(
                items
                    .iter()
                    .map(|item| match item {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect(),
            ),
            other => Self::Text(other.to_string()),
        }
    }

    /// Whether this bio is already editor markup
    pub fn is_markup(&self) -> bool {
        matches!(self, Self::Text(text) if BLOCK_TAG_RE.is_match(text))
    }
}

impl From<&str> for BioInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for BioInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<String>> for BioInput {
    fn from(tokens: Vec<String>) -> Self {
        Self::Tokens(tokens)
    }
}

/// Strip script-capable markup, keeping structural and inline formatting
pub fn sanitize_html(html: &str) -> String {
    SANITIZER.clean(html).to_string()
}

/// Render one shorthand token
fn render_token(token: &str, out: &mut String) {
    let token = token.trim();

    if let Some(rest) = token.strip_prefix(HEADING_MARKER) {
        out.push_str("<h3>");
        out.push_str(rest.trim());
        out.push_str("</h3>");
    } else if let Some(rest) = token.strip_prefix(EMPHASIS_MARKER) {
        out.push_str("<p><strong>");
        out.push_str(rest.trim());
        out.push_str("</strong></p>");
    } else {
        out.push_str("<p>");
        out.push_str(token);
        out.push_str("</p>");
    }
}

/// Render the shorthand encoding to (unsanitized) HTML
pub fn render_shorthand<'a>(tokens: impl IntoIterator<Item = &'a str>) -> String {
    let mut html = String::new();
    for token in tokens {
        render_token(token, &mut html);
    }
    html
}

/// Normalize a bio into sanitized HTML
pub fn normalize_bio(bio: &BioInput) -> String {
    let html = match bio {
        BioInput::Text(text) if bio.is_markup() => text.clone(),
        BioInput::Text(text) => render_shorthand([text.as_str()]),
        BioInput::Tokens(tokens) => render_shorthand(tokens.iter().map(String::as_str)),
    };

    sanitize_html(&html)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(items: &[&str]) -> BioInput {
        BioInput::Tokens(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_heading_token() {
        assert_eq!(normalize_bio(&"#Coach Name".into()), "<h3>Coach Name</h3>");
    }

    #[test]
    fn test_emphasis_token() {
        assert_eq!(
            normalize_bio(&"*Black Belt".into()),
            "<p><strong>Black Belt</strong></p>"
        );
    }

    #[test]
    fn test_plain_token() {
        assert_eq!(
            normalize_bio(&"Plain sentence.".into()),
            "<p>Plain sentence.</p>"
        );
    }

    #[test]
    fn test_markers_are_retrimmed() {
        assert_eq!(
            normalize_bio(&tokens(&["  #   Coach Name  ", "\t*  Black Belt "])),
            "<h3>Coach Name</h3><p><strong>Black Belt</strong></p>"
        );
    }

    #[test]
    fn test_tokens_keep_order() {
        let html = normalize_bio(&tokens(&["#Bio", "First.", "*Titles", "Second."]));
        assert_eq!(
            html,
            "<h3>Bio</h3><p>First.</p><p><strong>Titles</strong></p><p>Second.</p>"
        );
    }

    #[test]
    fn test_markup_passes_through() {
        let html = "<h2>About</h2><p>Trains <em>daily</em>.</p><ul><li>IBJJF</li></ul>";
        assert!(BioInput::from(html).is_markup());
        assert_eq!(normalize_bio(&html.into()), html);
    }

    #[test]
    fn test_markup_detection_with_attributes() {
        assert!(BioInput::from(r#"<p class="ql-align-center">x</p>"#).is_markup());
        assert!(BioInput::from("<H3>x</H3>").is_markup());
        assert!(!BioInput::from("<pre>x</pre>").is_markup());
        assert!(!BioInput::from("#Heading").is_markup());
    }

    #[test]
    fn test_editor_class_is_kept() {
        let html = r#"<p class="ql-align-center">Centered</p>"#;
        assert_eq!(normalize_bio(&html.into()), html);
    }

    #[test]
    fn test_script_is_stripped_from_markup() {
        let html = normalize_bio(&"<p>Hi</p><script>alert(1)</script>".into());
        assert_eq!(html, "<p>Hi</p>");
    }

    #[test]
    fn test_event_handlers_stripped_from_tokens() {
        let html = normalize_bio(&tokens(&[
            "<img src=x onerror=alert(1)>",
            "*<b onclick=\"steal()\">Belt</b>",
        ]));
        assert!(!html.contains("onerror"));
        assert!(!html.contains("onclick"));
        assert!(html.contains("Belt"));
    }

    #[test]
    fn test_from_value() {
        let value = serde_json::json!(["#A", 5, null]);
        assert_eq!(
            BioInput::from_value(&value),
            BioInput::Tokens(vec!["#A".to_string(), "5".to_string(), "null".to_string()])
        );
        assert_eq!(
            BioInput::from_value(&Value::Null),
            BioInput::Tokens(Vec::new())
        );
        assert_eq!(normalize_bio(&BioInput::from_value(&Value::Null)), "");
    }
}

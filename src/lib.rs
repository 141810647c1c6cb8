pub mod config;
pub mod error;
pub mod filter;
pub mod output;
pub mod server;
pub mod service;
pub mod source;
pub mod time;
pub mod youtube;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub use error::{Result, TranscriptError};

/// Bare 11-character video ID
static BARE_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_-]{11}$").unwrap());

/// youtube.com / youtu.be URL, with or without scheme and www./m. prefix
static URL_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:https?://)?(?:www\.)?(?:m\.)?(?:youtube\.com|youtu\.be)/(?:watch\?v=|embed/|v/|)([a-zA-Z0-9_-]{11})(?:[^#&?]*|$)",
    )
    .unwrap()
});

/// A single timed caption unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snippet {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

impl Snippet {
    pub fn new(text: impl Into<String>, start: f64, duration: f64) -> Self {
        Self {
            text: text.into(),
            start,
            duration,
        }
    }

    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}

/// Describes the caption track a response was built from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptMetadata {
    pub language: String,
    pub language_code: String,
    pub is_generated: bool,
    pub is_translatable: bool,
}

impl TranscriptMetadata {
    /// Placeholder used when the input could not even be parsed
    pub fn not_applicable() -> Self {
        Self {
            language: "N/A".to_string(),
            language_code: "N/A".to_string(),
            is_generated: false,
            is_translatable: false,
        }
    }

    /// Placeholder used before a track has been selected
    pub fn unknown() -> Self {
        Self {
            language: "Unknown".to_string(),
            language_code: "unk".to_string(),
            is_generated: true,
            is_translatable: false,
        }
    }
}

/// Extract video ID from a YouTube URL or a bare ID
pub fn extract_video_id(input: &str) -> Result<String> {
    if let Some(caps) = URL_ID_RE.captures(input) {
        return Ok(caps[1].to_string());
    }

    if BARE_ID_RE.is_match(input) {
        return Ok(input.to_string());
    }

    Err(TranscriptError::InvalidVideoId(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(input: &str) -> Option<String> {
        extract_video_id(input).ok()
    }

    #[test]
    fn test_bare_video_id() {
        assert_eq!(id("dQw4w9WgXcQ"), Some("dQw4w9WgXcQ".to_string()));
    }

    #[test]
    fn test_watch_url() {
        assert_eq!(
            id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_watch_url_with_extra_params() {
        assert_eq!(
            id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=120"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_short_url() {
        assert_eq!(id("https://youtu.be/dQw4w9WgXcQ"), Some("dQw4w9WgXcQ".to_string()));
        assert_eq!(id("youtu.be/dQw4w9WgXcQ?t=42"), Some("dQw4w9WgXcQ".to_string()));
    }

    #[test]
    fn test_embed_and_v_urls() {
        assert_eq!(
            id("https://www.youtube.com/embed/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(id("http://youtube.com/v/dQw4w9WgXcQ#t=3"), Some("dQw4w9WgXcQ".to_string()));
    }

    #[test]
    fn test_mobile_url_without_scheme() {
        assert_eq!(id("m.youtube.com/watch?v=a_b-c1D2e3F"), Some("a_b-c1D2e3F".to_string()));
    }

    #[test]
    fn test_every_url_form_yields_the_embedded_id() {
        let video_id = "Xy_9-zQ01Ab";
        let prefixes = [
            "https://www.youtube.com/watch?v=",
            "http://m.youtube.com/watch?v=",
            "youtube.com/embed/",
            "https://youtube.com/v/",
            "https://youtu.be/",
            "www.youtu.be/",
        ];
        for prefix in prefixes {
            for suffix in ["", "?feature=share", "&list=PL123", "#comments"] {
                let url = format!("{prefix}{video_id}{suffix}");
                assert_eq!(id(&url).as_deref(), Some(video_id), "url: {url}");
            }
        }
    }

    #[test]
    fn test_invalid_url() {
        assert!(matches!(
            extract_video_id("not-a-valid-id"),
            Err(TranscriptError::InvalidVideoId(_))
        ));
        assert_eq!(id("https://vimeo.com/123456789"), None);
    }

    #[test]
    fn test_eleven_safe_chars_count_as_bare_id() {
        // Any 11 characters from the ID alphabet are accepted as-is
        assert_eq!(id("not-a-video"), Some("not-a-video".to_string()));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(id(""), None);
    }

    #[test]
    fn test_surrounding_whitespace_rejected() {
        assert_eq!(id("  dQw4w9WgXcQ  "), None);
        assert_eq!(id("dQw4w9WgXcQ\n"), None);
    }

    #[test]
    fn test_snippet_end() {
        let s = Snippet::new("hi", 1.5, 2.0);
        assert!((s.end() - 3.5).abs() < f64::EPSILON);
    }
}

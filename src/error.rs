use thiserror::Error;

/// Everything that can go wrong between receiving a request and rendering a transcript
#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("Invalid YouTube video ID or URL format: {0}")]
    InvalidVideoId(String),

    #[error("Invalid time format: {0}. Expected seconds, MM:SS, or HH:MM:SS.")]
    InvalidTimeFormat(String),

    #[error("Time cannot be negative: {0}")]
    NegativeTime(String),

    #[error("No transcripts available for video ID: {0}")]
    NoTranscriptAvailable(String),

    #[error("Subtitles are disabled for video ID: {0}")]
    TranscriptsDisabled(String),

    #[error("The video is no longer available: {0}")]
    VideoUnavailable(String),

    #[error("The video {video_id} is unplayable: {reason}")]
    VideoUnplayable { video_id: String, reason: String },

    #[error("YouTube is blocking requests from this IP (while fetching {0})")]
    IpBlocked(String),

    #[error("Failed to set the consent cookie for video ID: {0}")]
    ConsentCookie(String),

    #[error("Could not parse YouTube data for video ID: {0}")]
    Unparsable(String),

    #[error("The {0} caption track requires a PO token")]
    PoTokenRequired(String),

    #[error("The requested transcript is not translatable")]
    NotTranslatable,

    #[error("The requested translation language is not available: {0}")]
    TranslationLanguageNotAvailable(String),

    #[error("error parsing caption XML: {0}")]
    CaptionXml(String),

    #[error("request to YouTube failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl TranscriptError {
    /// Errors meaning the video simply has no usable captions
    pub fn is_retrieval(&self) -> bool {
        matches!(
            self,
            TranscriptError::NoTranscriptAvailable(_) | TranscriptError::TranscriptsDisabled(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, TranscriptError>;

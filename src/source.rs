//! The transcript source abstraction: what the request handler needs from
//! wherever caption tracks come from.

use async_trait::async_trait;

use crate::{Result, Snippet, TranscriptError};

/// A language a track can be machine-translated into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationLanguage {
    pub language: String,
    pub language_code: String,
}

/// One caption stream in one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub language: String,
    pub language_code: String,
    pub is_generated: bool,
    pub is_translatable: bool,
    pub base_url: String,
    pub translation_languages: Vec<TranslationLanguage>,
}

impl Track {
    /// Derive the machine-translated version of this track
    ///
    /// The result is never translatable itself; translations are not chained.
    pub fn translate(&self, language_code: &str) -> Result<Track> {
        if !self.is_translatable {
            return Err(TranscriptError::NotTranslatable);
        }

        let target = self
            .translation_languages
            .iter()
            .find(|t| t.language_code == language_code)
            .ok_or_else(|| TranscriptError::TranslationLanguageNotAvailable(language_code.to_string()))?;

        Ok(Track {
            language: target.language.clone(),
            language_code: target.language_code.clone(),
            is_generated: self.is_generated,
            is_translatable: false,
            base_url: format!("{}&tlang={}", self.base_url, language_code),
            translation_languages: Vec::new(),
        })
    }
}

/// All caption tracks of a video, manually created ones first
#[derive(Debug, Clone)]
pub struct TrackList {
    pub video_id: String,
    tracks: Vec<Track>,
}

impl TrackList {
    pub fn new(video_id: impl Into<String>, tracks: Vec<Track>) -> Self {
        let (mut manual, generated): (Vec<_>, Vec<_>) = tracks.into_iter().partition(|t| !t.is_generated);
        manual.extend(generated);
        Self {
            video_id: video_id.into(),
            tracks: manual,
        }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// First manually created track matching the languages, in priority order
    pub fn find_manually_created(&self, languages: &[String]) -> Option<&Track> {
        self.find_in(languages, |t| !t.is_generated)
    }

    /// First track of either kind matching the languages, in priority order
    pub fn find_transcript(&self, languages: &[String]) -> Option<&Track> {
        self.find_in(languages, |_| true)
    }

    fn find_in(&self, languages: &[String], accept: impl Fn(&Track) -> bool) -> Option<&Track> {
        languages.iter().find_map(|code| {
            self.tracks
                .iter()
                .find(|&t| t.language_code == *code && accept(t))
        })
    }

    /// Pick a track: manual in a requested language, then any in a requested
    /// language, then English, then whatever comes first
    pub fn select(&self, languages: &[String]) -> Result<&Track> {
        self.find_manually_created(languages)
            .or_else(|| self.find_transcript(languages))
            .or_else(|| self.tracks.iter().find(|t| t.language_code == "en"))
            .or_else(|| self.tracks.first())
            .ok_or_else(|| TranscriptError::NoTranscriptAvailable(self.video_id.clone()))
    }
}

/// Something that can list and fetch caption tracks for a video
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// List every caption track the video offers
    async fn list(&self, video_id: &str) -> Result<TrackList>;

    /// Download a track's snippets; `preserve_formatting` keeps basic HTML markup
    async fn fetch(&self, track: &Track, preserve_formatting: bool) -> Result<Vec<Snippet>>;
}

//! Request handling: parse input, select and optionally translate a caption
//! track, window it, and render the uniform response.

use std::sync::Arc;

use log::{debug, error, info};
use serde::{Deserialize, Serialize};

use crate::filter::filter_snippets;
use crate::output::render_text;
use crate::source::TranscriptSource;
use crate::time::{TimeInput, TimeWindow};
use crate::{Result, Snippet, TranscriptMetadata, extract_video_id};

pub const SUCCESS_MESSAGE: &str = "Transcript fetched and processed successfully.";
pub const EMPTY_RANGE_MESSAGE: &str = "No transcript snippets found within the specified time range.";

/// Body of a transcript request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranscriptRequest {
    /// Video ID or any supported YouTube URL
    pub video_id: String,
    pub languages: Option<Vec<String>>,
    #[serde(default)]
    pub preserve_formatting: bool,
    pub translate_to: Option<String>,
    pub start_time: Option<TimeInput>,
    pub end_time: Option<TimeInput>,
}

/// Response returned for every request, successful or not
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptResponse {
    pub video_id: String,
    pub language: String,
    pub language_code: String,
    pub is_generated: bool,
    pub is_translatable: bool,
    pub raw_transcript_snippets: Vec<Snippet>,
    pub final_transcript_text: String,
    pub message: String,
}

impl TranscriptResponse {
    fn new(
        video_id: &str,
        metadata: TranscriptMetadata,
        snippets: Vec<Snippet>,
        final_transcript_text: String,
        message: String,
    ) -> Self {
        Self {
            video_id: video_id.to_string(),
            language: metadata.language,
            language_code: metadata.language_code,
            is_generated: metadata.is_generated,
            is_translatable: metadata.is_translatable,
            raw_transcript_snippets: snippets,
            final_transcript_text,
            message,
        }
    }

    fn failed(video_id: &str, metadata: TranscriptMetadata, message: String) -> Self {
        Self::new(video_id, metadata, Vec::new(), String::new(), message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    SelectingTranscript,
    Translating,
    Filtering,
    Formatting,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::SelectingTranscript => write!(f, "selecting transcript"),
            Stage::Translating => write!(f, "translating"),
            Stage::Filtering => write!(f, "filtering"),
            Stage::Formatting => write!(f, "formatting"),
        }
    }
}

/// Validated request input
struct ParsedInput {
    video_id: String,
    window: TimeWindow,
}

fn parse_input(request: &TranscriptRequest) -> Result<ParsedInput> {
    let video_id = extract_video_id(&request.video_id)?;
    let window = TimeWindow::parse(request.start_time.as_ref(), request.end_time.as_ref())?;
    Ok(ParsedInput { video_id, window })
}

/// Fetches, translates and windows transcripts on behalf of HTTP handlers
pub struct TranscriptService {
    source: Arc<dyn TranscriptSource>,
    default_languages: Vec<String>,
}

impl TranscriptService {
    pub fn new(source: Arc<dyn TranscriptSource>, default_languages: Vec<String>) -> Self {
        Self {
            source,
            default_languages,
        }
    }

    /// Handle one request; every failure is folded into the response message
    pub async fn fetch_transcript(&self, request: &TranscriptRequest) -> TranscriptResponse {
        let input = match parse_input(request) {
            Ok(input) => input,
            Err(e) => {
                debug!("Rejected input {:?}: {e}", request.video_id);
                return TranscriptResponse::failed(
                    &request.video_id,
                    TranscriptMetadata::not_applicable(),
                    format!("Input error: {e}"),
                );
            }
        };

        let languages = match request.languages.as_deref() {
            Some(langs) if !langs.is_empty() => langs.to_vec(),
            _ => self.default_languages.clone(),
        };

        let mut metadata = TranscriptMetadata::unknown();
        let mut stage = Stage::SelectingTranscript;

        let outcome = self
            .process(&input, request, &languages, &mut metadata, &mut stage)
            .await;

        match outcome {
            Ok((snippets, text)) => {
                let message = if snippets.is_empty() && !input.window.is_unbounded() {
                    EMPTY_RANGE_MESSAGE
                } else {
                    SUCCESS_MESSAGE
                };
                info!(
                    "Served {} snippets for {} ({})",
                    snippets.len(),
                    input.video_id,
                    metadata.language_code
                );
                TranscriptResponse::new(&input.video_id, metadata, snippets, text, message.to_string())
            }
            Err(e) if e.is_retrieval() => {
                info!("No transcript for {}: {e}", input.video_id);
                TranscriptResponse::failed(
                    &input.video_id,
                    metadata,
                    format!("Error fetching transcript: {e}. It might not have subtitles or they are disabled."),
                )
            }
            Err(e) => {
                error!("Unexpected error for video ID {} while {stage}: {e}", input.video_id);
                TranscriptResponse::failed(
                    &input.video_id,
                    metadata,
                    format!("An unexpected error occurred: {e}"),
                )
            }
        }
    }

    async fn process(
        &self,
        input: &ParsedInput,
        request: &TranscriptRequest,
        languages: &[String],
        metadata: &mut TranscriptMetadata,
        stage: &mut Stage,
    ) -> Result<(Vec<Snippet>, String)> {
        debug!("{}: {stage} with languages {languages:?}", input.video_id);
        let tracks = self.source.list(&input.video_id).await?;
        let mut track = tracks.select(languages)?.clone();
        *metadata = TranscriptMetadata {
            language: track.language.clone(),
            language_code: track.language_code.clone(),
            is_generated: track.is_generated,
            is_translatable: track.is_translatable,
        };

        if let Some(target) = request.translate_to.as_deref() {
            if track.is_translatable && track.language_code != target {
                *stage = Stage::Translating;
                debug!("{}: {stage} {} -> {target}", input.video_id, track.language_code);
                track = track.translate(target)?;
                *metadata = TranscriptMetadata {
                    language: track.language.clone(),
                    language_code: track.language_code.clone(),
                    is_generated: track.is_generated,
                    is_translatable: false,
                };
            }
        }

        let snippets = self.source.fetch(&track, request.preserve_formatting).await?;

        *stage = Stage::Filtering;
        debug!("{}: {stage} {} snippets with {:?}", input.video_id, snippets.len(), input.window);
        let snippets = filter_snippets(snippets, &input.window);

        *stage = Stage::Formatting;
        let text = render_text(&snippets);
        Ok((snippets, text))
    }
}

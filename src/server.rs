//! HTTP surface: one transcript endpoint plus a liveness root

use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use log::info;
use serde_json::{Value, json};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};

use crate::service::{TranscriptRequest, TranscriptResponse, TranscriptService};

/// Build the application router around a transcript service
pub fn router(service: Arc<TranscriptService>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root_handler))
        .route("/api/v1/youtube/transcript", post(transcript_handler))
        .with_state(service)
        .layer(cors)
        .layer(CatchPanicLayer::new())
}

/// Bind `host:port` and serve until the process is stopped
pub async fn serve(service: Arc<TranscriptService>, host: &str, port: u16) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(service)).await
}

async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "Plugin Server is running!" }))
}

async fn transcript_handler(
    State(service): State<Arc<TranscriptService>>,
    Json(request): Json<TranscriptRequest>,
) -> Json<TranscriptResponse> {
    Json(service.fetch_transcript(&request).await)
}

//! Mapping API routes
//!
//! `POST /map` fetches the run from the metadata source and projects it
//! into a specification document; `GET /health` is a fixed liveness
//! payload with no dependency checks.
//!
//! Every mapper or source failure translates to a 400-class response
//! embedding the original failure text; nothing is swallowed. An empty
//! run id is rejected before any fetch.

use aimbridge_core::{Error, MapperConfig, SpecificationDocument};
use aimbridge_mapper::build_document;
use aimbridge_tracking::RunSource;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

/// Shared state of the mapping API
#[derive(Debug, Clone)]
pub struct AppState<S> {
    /// Metadata source used when the request carries no override
    pub source: S,
    /// Builder configuration
    pub config: Arc<MapperConfig>,
}

impl<S> AppState<S> {
    /// State over the given source and configuration
    pub fn new(source: S, config: MapperConfig) -> Self {
        AppState {
            source,
            config: Arc::new(config),
        }
    }
}

/// Mapping request body
#[derive(Debug, Clone, Deserialize)]
pub struct MapRequest {
    /// Run to map
    pub run_id: String,
    /// Optional source-location override
    #[serde(default)]
    pub tracking_uri: Option<String>,
}

/// Mapping response body
#[derive(Debug, Clone, Serialize)]
pub struct MapResponse {
    /// Always "success"
    pub status: &'static str,
    /// The produced document
    pub data: SpecificationDocument,
}

/// Build the mapping API router over the given state
pub fn router<S>(state: AppState<S>) -> Router
where
    S: RunSource + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/map", post(map_run::<S>))
        .route("/health", get(health))
        .with_state(state)
}

async fn map_run<S>(
    State(state): State<AppState<S>>,
    Json(request): Json<MapRequest>,
) -> Result<Json<MapResponse>, (StatusCode, Json<Value>)>
where
    S: RunSource + Clone + Send + Sync + 'static,
{
    let run_id = request.run_id.trim();
    if run_id.is_empty() {
        return Err(bad_request(&Error::InvalidRequest(
            "run_id must be a non-empty string".to_string(),
        )));
    }

    let source = match request.tracking_uri.as_deref() {
        Some(uri) => state.source.with_location(uri),
        None => state.source.clone(),
    };

    let record = source.fetch_run(run_id).await.map_err(|err| {
        tracing::warn!(run_id, %err, "run fetch failed");
        bad_request(&err)
    })?;
    let document = build_document(&record, &state.config).map_err(|err| {
        tracing::warn!(run_id, %err, "mapping failed");
        bad_request(&err)
    })?;

    tracing::info!(run_id, document_id = %document.id, "mapped run to specification document");
    Ok(Json(MapResponse {
        status: "success",
        data: document,
    }))
}

async fn health() -> Json<Value> {
    Json(json!({"status": "healthy", "service": "tmf-api"}))
}

fn bad_request(err: &Error) -> (StatusCode, Json<Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({"detail": format!("Mapping failed: {err}")})),
    )
}

//! Mock TMF receiver routes
//!
//! Accepts specification documents, stores them by id, and serves them
//! back: all of them, one by id, or one projected onto a caller-supplied
//! field list.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::store::SpecStore;

/// Route prefix of the mock TMF endpoint
pub const API_PREFIX: &str = "/tmf-api/AiM/v4";

/// Build the receiver router over the given store
pub fn router(store: Arc<SpecStore>) -> Router {
    Router::new()
        .route(
            &format!("{API_PREFIX}/aiModelSpecification"),
            post(receive_model).get(all_models),
        )
        .route(
            &format!("{API_PREFIX}/aiModelSpecification/{{id}}"),
            get(model_by_id),
        )
        .with_state(store)
}

async fn receive_model(
    State(store): State<Arc<SpecStore>>,
    Json(document): Json<Value>,
) -> (StatusCode, Json<Value>) {
    match store.insert(document) {
        Ok(id) => {
            tracing::info!(%id, "stored specification document");
            (
                StatusCode::CREATED,
                Json(json!({"status": "received", "message": "Mock accepted JSON", "id": id})),
            )
        }
        Err(err) => {
            tracing::warn!(%err, "rejected specification document");
            (StatusCode::BAD_REQUEST, Json(json!({"error": err.to_string()})))
        }
    }
}

async fn all_models(State(store): State<Arc<SpecStore>>) -> Json<Value> {
    Json(Value::Array(store.all()))
}

#[derive(Debug, Deserialize)]
struct FieldsQuery {
    fields: Option<String>,
}

async fn model_by_id(
    State(store): State<Arc<SpecStore>>,
    Path(id): Path<String>,
    Query(query): Query<FieldsQuery>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let document = match &query.fields {
        Some(fields) => {
            let fields: Vec<String> = fields
                .split(',')
                .map(|field| field.trim().to_string())
                .filter(|field| !field.is_empty())
                .collect();
            store.get_projected(&id, &fields)
        }
        None => store.get(&id),
    };
    document
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, Json(json!({"detail": "Model not found"}))))
}

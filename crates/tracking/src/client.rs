//! Tracking server client
//!
//! [`RunSource`] is the seam between the HTTP service and the metadata
//! source, so handlers stay testable with an in-memory source.
//! [`TrackingClient`] is the reqwest-backed implementation.
//!
//! Failure classification:
//! - transport errors and non-2xx answers surface as a single
//!   `SourceUnavailable` class, message preserving the cause
//! - a 404 or a `RESOURCE_DOES_NOT_EXIST` error code means the run id
//!   does not exist and maps to `RunNotFound`
//! - an unparseable 2xx body maps to `MalformedResponse`

use aimbridge_core::{Error, Result, RunRecord};
use reqwest::StatusCode;
use std::future::Future;

use crate::wire::RunEnvelope;

/// Source of run metadata, keyed by run id
pub trait RunSource: Send + Sync {
    /// Fetch the normalized record for `run_id`
    fn fetch_run(&self, run_id: &str) -> impl Future<Output = Result<RunRecord>> + Send;

    /// The same source pointed at a different base location, for
    /// per-request overrides
    fn with_location(&self, location: &str) -> Self
    where
        Self: Sized;
}

/// HTTP client for the tracking server's REST surface
#[derive(Debug, Clone)]
pub struct TrackingClient {
    http: reqwest::Client,
    base_url: String,
}

impl TrackingClient {
    /// Client against the given base URL (trailing slashes stripped)
    pub fn new(base_url: impl Into<String>) -> Self {
        TrackingClient {
            http: reqwest::Client::new(),
            base_url: trim_base(base_url.into()),
        }
    }

    /// The configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch(&self, run_id: &str) -> Result<RunRecord> {
        let url = format!("{}/api/2.0/mlflow/runs/get", self.base_url);
        tracing::debug!(run_id, url = %url, "fetching run metadata");

        let response = self
            .http
            .get(&url)
            .query(&[("run_id", run_id)])
            .send()
            .await
            .map_err(|err| Error::SourceUnavailable(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = classify_failure(status, &body, run_id);
            tracing::warn!(run_id, status = status.as_u16(), %err, "tracking fetch failed");
            return Err(err);
        }

        let envelope: RunEnvelope = response
            .json()
            .await
            .map_err(|err| Error::MalformedResponse(err.to_string()))?;
        let record = envelope.into_record()?;
        tracing::info!(
            run_id = %record.run_id,
            params = record.params.len(),
            metrics = record.metrics.len(),
            tags = record.tags.len(),
            "fetched run metadata"
        );
        Ok(record)
    }
}

impl RunSource for TrackingClient {
    fn fetch_run(&self, run_id: &str) -> impl Future<Output = Result<RunRecord>> + Send {
        self.fetch(run_id)
    }

    fn with_location(&self, location: &str) -> Self {
        TrackingClient {
            http: self.http.clone(),
            base_url: trim_base(location.to_string()),
        }
    }
}

fn trim_base(mut base: String) -> String {
    while base.ends_with('/') {
        base.pop();
    }
    base
}

/// Map a non-2xx answer onto the error taxonomy
fn classify_failure(status: StatusCode, body: &str, run_id: &str) -> Error {
    if status == StatusCode::NOT_FOUND || body.contains("RESOURCE_DOES_NOT_EXIST") {
        Error::RunNotFound(run_id.to_string())
    } else {
        Error::SourceUnavailable(format!("tracking server answered {status}: {body}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trimmed() {
        let client = TrackingClient::new("http://localhost:5000///");
        assert_eq!(client.base_url(), "http://localhost:5000");
    }

    #[test]
    fn test_with_location_overrides_base() {
        let client = TrackingClient::new("http://localhost:5000");
        let other = client.with_location("http://mlflow.internal:5000/");
        assert_eq!(other.base_url(), "http://mlflow.internal:5000");
        // The original client keeps its base
        assert_eq!(client.base_url(), "http://localhost:5000");
    }

    #[test]
    fn test_not_found_classification() {
        let err = classify_failure(StatusCode::NOT_FOUND, "", "run-1");
        assert!(err.is_not_found());

        let body = r#"{"error_code": "RESOURCE_DOES_NOT_EXIST", "message": "Run not found"}"#;
        let err = classify_failure(StatusCode::BAD_REQUEST, body, "run-1");
        assert!(err.is_not_found());
        assert!(err.to_string().contains("run-1"));
    }

    #[test]
    fn test_other_failures_are_source_unavailable() {
        let err = classify_failure(StatusCode::INTERNAL_SERVER_ERROR, "boom", "run-1");
        assert!(err.is_source_failure());
        assert!(err.to_string().contains("boom"));
        assert!(err.to_string().contains("500"));
    }
}

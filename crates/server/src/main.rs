//! Mapping API binary
//!
//! Environment:
//! - `MAPPER_ADDR`: bind address (default `0.0.0.0:8000`)
//! - `TRACKING_URI`: default tracking server (default `http://localhost:5000`)
//! - `MAPPER_MODE`: `tag-driven` (default) or `always-populated`

use aimbridge_core::{MapperConfig, MappingMode, DEFAULT_TRACKING_URI};
use aimbridge_server::{router, AppState};
use aimbridge_tracking::TrackingClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let addr = std::env::var("MAPPER_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
    let tracking_uri =
        std::env::var("TRACKING_URI").unwrap_or_else(|_| DEFAULT_TRACKING_URI.to_string());
    let mode = match std::env::var("MAPPER_MODE") {
        Ok(raw) => raw.parse::<MappingMode>().map_err(std::io::Error::other)?,
        Err(_) => MappingMode::default(),
    };

    let state = AppState::new(
        TrackingClient::new(&tracking_uri),
        MapperConfig::with_mode(mode),
    );
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, %tracking_uri, ?mode, "mapping API listening");
    axum::serve(listener, app).await?;
    Ok(())
}

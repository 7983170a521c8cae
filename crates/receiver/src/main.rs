//! Mock TMF receiver binary
//!
//! Serves the mock storage/query endpoint. Bind address comes from
//! `RECEIVER_ADDR` (default `0.0.0.0:9000`).

use aimbridge_receiver::{router, SpecStore};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let addr = std::env::var("RECEIVER_ADDR").unwrap_or_else(|_| "0.0.0.0:9000".to_string());
    let store = Arc::new(SpecStore::new());
    let app = router(store);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "mock TMF receiver listening");
    axum::serve(listener, app).await?;
    Ok(())
}

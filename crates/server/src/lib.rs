//! Mapping API service
//!
//! axum routes wiring the tracking source and the mapping engine into
//! the request/response interface.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod routes;

pub use routes::{router, AppState, MapRequest, MapResponse};

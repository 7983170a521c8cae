//! Mock TMF receiver
//!
//! In-memory store of posted specification documents plus the axum
//! routes serving them. Validation is minimal (required top-level
//! fields); storage is insert-or-overwrite by document id.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod routes;
pub mod store;

pub use routes::{router, API_PREFIX};
pub use store::{SpecStore, StoreError, REQUIRED_FIELDS};

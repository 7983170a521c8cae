//! Error types for the bridge
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! The taxonomy separates four failure classes:
//! - source-fetch failures (`SourceUnavailable`): transport errors or
//!   non-2xx answers from the tracking server, surfaced as-is
//! - a missing run (`RunNotFound`), distinct from a transport failure
//! - malformed input (`MalformedResponse`, `InvalidOverride`): fails the
//!   whole mapping, never a partial document
//! - request rejection (`InvalidRequest`), caught before the mapper runs

use thiserror::Error;

/// Result type alias for bridge operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the bridge
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Tracking server could not be reached or answered with a failure
    #[error("tracking source unavailable: {0}")]
    SourceUnavailable(String),

    /// Run id unknown to the tracking server
    #[error("run not found: {0}")]
    RunNotFound(String),

    /// Tracking server answered with a body the wire layer could not interpret
    #[error("malformed tracking response: {0}")]
    MalformedResponse(String),

    /// A per-parameter override tag holds a value that does not parse
    #[error("invalid {attribute} override for parameter {param:?}: {value:?}")]
    InvalidOverride {
        /// Parameter the override targets
        param: String,
        /// Characteristic attribute being overridden
        attribute: String,
        /// The unparseable tag value
        value: String,
    },

    /// Request rejected before reaching the mapper
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl Error {
    /// True for failures of the metadata source itself (transport or 5xx)
    pub fn is_source_failure(&self) -> bool {
        matches!(self, Error::SourceUnavailable(_))
    }

    /// True when the run id simply does not exist at the source
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::RunNotFound(_))
    }
}

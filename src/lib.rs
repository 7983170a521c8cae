//! Aimbridge - MLflow run metadata to TMF AI model specifications
//!
//! Aimbridge converts the metadata of a tracked run (params, metrics,
//! tags, lifecycle timestamps) into a TMF-style AI model specification
//! document, exposes that conversion over a small HTTP interface, and
//! ships a mock receiver that stores and serves the produced documents.
//!
//! # Quick Start
//!
//! ```ignore
//! use aimbridge::{build_document, MapperConfig, RunRecord};
//!
//! let mut run = RunRecord::new("run-42");
//! run.params.insert("max_depth".into(), "5".into());
//!
//! let document = build_document(&run, &MapperConfig::default())?;
//! assert!(document.href.contains("run-42"));
//! ```
//!
//! # Architecture
//!
//! The mapping engine ([`build_document`]) is a pure function of the run
//! record; the tracking client, mapping API, and mock receiver are thin
//! glue around it.

// Re-export the public surface of the member crates
pub use aimbridge_core::{
    Characteristic, CharacteristicValue, Error, MapperConfig, MappingMode, MlflowMetadata,
    RelatedParty, ResourceRef, Result, RunRecord, SpecificationDocument, TargetServiceSchema,
    ValidFor,
};
pub use aimbridge_mapper::{build_document, format_epoch_ms, KvPayload, TagIndex};
pub use aimbridge_receiver::{SpecStore, StoreError};
pub use aimbridge_server::{AppState, MapRequest, MapResponse};
pub use aimbridge_tracking::{RunEnvelope, RunSource, TrackingClient};

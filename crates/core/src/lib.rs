//! Core types for aimbridge
//!
//! This crate defines the foundational types used throughout the system:
//! - RunRecord: normalized metadata of one tracked run
//! - SpecificationDocument: the fixed-shape output document and its parts
//! - MapperConfig / MappingMode: builder configuration and policy modes
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod document;
pub mod error;
pub mod run;

// Re-export commonly used types
pub use config::{
    MapperConfig, MappingMode, DEFAULT_CATALOG_BASE, DEFAULT_OWNER_ROLE, DEFAULT_PARTY_BASE,
    DEFAULT_TRACKING_URI, DOCUMENT_BASE_TYPE, DOCUMENT_TYPE, MODEL_SCHEMA_LOCATION,
    SPEC_SCHEMA_LOCATION, TARGET_SCHEMA_TYPE,
};
pub use document::{
    Characteristic, CharacteristicValue, MlflowMetadata, RelatedParty, ResourceRef,
    SpecificationDocument, TargetServiceSchema, ValidFor,
};
pub use error::{Error, Result};
pub use run::RunRecord;

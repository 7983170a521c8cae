//! Mapper configuration
//!
//! All schema URLs, discriminator strings, and default text used by the
//! document builder live here, in one structure passed into the builder.
//! The two projection behavior modes share the builder and differ only by
//! the [`MappingMode`] policy flag.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Default base for catalog `href` values
pub const DEFAULT_CATALOG_BASE: &str =
    "https://mycsp.com:8080/tmfapi/serviceCatalogManagement/v4";

/// Schema location of the specification document itself
pub const SPEC_SCHEMA_LOCATION: &str =
    "https://mycsp.com:8080/tmf-api/schema/AIM/AIModelSpecification.schema.json";

/// Schema location referenced by `targetServiceSchema`
pub const MODEL_SCHEMA_LOCATION: &str =
    "https://mycsp.com:8080/tmf-api/schema/AIM/AIModel.schema.json";

/// Default base for party-management `href` values
pub const DEFAULT_PARTY_BASE: &str =
    "https://mycsp.com:8080/tmf-api/partyManagement/v4";

/// Default tracking server UI address, used for the history section URL
/// when no `mlflow_tracking_uri` tag is present
pub const DEFAULT_TRACKING_URI: &str = "http://localhost:5000";

/// Default role for the run's owning party
pub const DEFAULT_OWNER_ROLE: &str = "ModelOwner";

/// `@type` discriminator of the produced document
pub const DOCUMENT_TYPE: &str = "AIModelSpecification";

/// `@baseType` discriminator of the produced document
pub const DOCUMENT_BASE_TYPE: &str = "ServiceSpecification";

/// `@type` discriminator of the target service schema
pub const TARGET_SCHEMA_TYPE: &str = "AIModel";

/// Projection behavior mode
///
/// Two incompatible conventions exist for optional-section defaults, so
/// both are explicit modes rather than a silent merge:
/// - `TagDriven` (product default): sections appear only when a driving
///   tag exists, and characteristic attributes honor per-parameter
///   override tags.
/// - `AlwaysPopulated`: every section appears with placeholder text, and
///   characteristic attributes take fixed defaults regardless of tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MappingMode {
    /// Tags drive section presence and characteristic attributes
    #[default]
    TagDriven,
    /// Every section present, fixed characteristic attributes
    AlwaysPopulated,
}

impl FromStr for MappingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tag-driven" | "tag_driven" => Ok(MappingMode::TagDriven),
            "always-populated" | "always_populated" => Ok(MappingMode::AlwaysPopulated),
            other => Err(format!("unknown mapping mode: {other:?}")),
        }
    }
}

/// Configuration passed into the document builder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapperConfig {
    /// Projection behavior mode
    pub mode: MappingMode,
    /// Base URL for the document `href`
    pub catalog_base: String,
    /// `@schemaLocation` of the document
    pub spec_schema_location: String,
    /// `@schemaLocation` of the target service schema
    pub model_schema_location: String,
    /// Base URL for related-party `href` values
    pub party_base: String,
    /// Tracking UI address used in the history section when no tag overrides it
    pub default_tracking_uri: String,
    /// Role assigned to the owning party when no tag overrides it
    pub default_role: String,
}

impl Default for MapperConfig {
    fn default() -> Self {
        MapperConfig {
            mode: MappingMode::TagDriven,
            catalog_base: DEFAULT_CATALOG_BASE.to_string(),
            spec_schema_location: SPEC_SCHEMA_LOCATION.to_string(),
            model_schema_location: MODEL_SCHEMA_LOCATION.to_string(),
            party_base: DEFAULT_PARTY_BASE.to_string(),
            default_tracking_uri: DEFAULT_TRACKING_URI.to_string(),
            default_role: DEFAULT_OWNER_ROLE.to_string(),
        }
    }
}

impl MapperConfig {
    /// Default configuration with the given mode
    pub fn with_mode(mode: MappingMode) -> Self {
        MapperConfig {
            mode,
            ..MapperConfig::default()
        }
    }
}

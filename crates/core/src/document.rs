//! Specification document model
//!
//! Typed shape of the TMF-style AI model specification produced by the
//! mapper. Serialization rules carry the projection invariants:
//!
//! - every optional top-level section is `Option` with
//!   `skip_serializing_if`, so an absent section means the key never
//!   appears in the JSON (no empty objects, no nulls at depth 1)
//! - `validFor.endDateTime` is likewise dropped when the window is open
//! - optional scalars inside `mlflowMetadata` serialize as `null` when
//!   absent (nested nulls are not pruned)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Validity window
///
/// `end_date_time` is present only for runs that finished; an open window
/// omits the key entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidFor {
    /// Window start, ISO-8601 local time
    pub start_date_time: String,
    /// Window end, ISO-8601 local time; absent while the window is open
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date_time: Option<String>,
}

/// One provenance/lifecycle artifact reference
///
/// Used by all reference sections. `mime_type` is carried only by the
/// data-sheet section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRef {
    /// Human-readable description of the artifact
    pub description: String,
    /// Artifact location
    pub url: String,
    /// Content type of the artifact, when meaningful
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

/// Literal value carried by a characteristic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacteristicValue {
    /// Declared type of the value
    pub value_type: String,
    /// Always true: the recorded parameter value is the default
    pub is_default: bool,
    /// The parameter value, verbatim
    pub value: String,
    /// Validity window mirroring the document's
    pub valid_for: ValidFor,
}

/// One parameter's projection into the document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Characteristic {
    /// Parameter key
    pub name: String,
    /// Description of the parameter
    pub description: String,
    /// Declared type of the parameter value
    pub value_type: String,
    /// Whether the characteristic may be reconfigured downstream
    pub configurable: bool,
    /// Validity window mirroring the document's
    pub valid_for: ValidFor,
    /// Minimum number of values
    pub min_cardinality: i64,
    /// Maximum number of values
    pub max_cardinality: i64,
    /// Whether values must be unique
    pub is_unique: bool,
    /// Validation pattern, possibly empty
    pub regex: String,
    /// Whether the value set is extensible
    pub extensible: bool,
    /// Exactly one element holding the recorded value
    pub service_spec_characteristic_value: Vec<CharacteristicValue>,
}

/// The run's owning party
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedParty {
    /// Party resource location
    pub href: String,
    /// Party identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Party role, e.g. "ModelOwner"
    pub role: String,
}

/// Fixed discriminator object for the target schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetServiceSchema {
    /// Schema type discriminator
    #[serde(rename = "@type")]
    pub type_name: String,
    /// Schema document location
    #[serde(rename = "@schemaLocation")]
    pub schema_location: String,
}

/// Passthrough extension bundling the source run's raw metadata
///
/// Optional scalars serialize as `null` when the source did not report
/// them; the maps are carried verbatim for traceability.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MlflowMetadata {
    /// Source run identifier
    pub run_id: String,
    /// Experiment the run belongs to
    pub experiment_id: Option<String>,
    /// Artifact storage location
    pub artifact_uri: Option<String>,
    /// Run lifecycle status
    pub status: Option<String>,
    /// Owning user
    pub user_id: Option<String>,
    /// Recorded metrics, verbatim
    pub metrics: BTreeMap<String, f64>,
    /// Recorded parameters, verbatim
    pub params: BTreeMap<String, String>,
    /// All tags, verbatim
    pub all_tags: BTreeMap<String, String>,
}

/// The produced specification document
///
/// Constructed, pruned, and returned in one mapping call; no further
/// mutation. Identity is the freshly generated `id` only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecificationDocument {
    /// Fresh UUID v4, generated unconditionally per call
    pub id: String,
    /// Catalog URL embedding the source run id
    pub href: String,
    /// Document type discriminator
    #[serde(rename = "@type")]
    pub type_name: String,
    /// Base type discriminator
    #[serde(rename = "@baseType")]
    pub base_type: String,
    /// Schema document location
    #[serde(rename = "@schemaLocation")]
    pub schema_location: String,
    /// Model name
    pub name: String,
    /// Model description
    pub description: String,
    /// Model version
    pub version: String,
    /// Document validity window
    pub valid_for: ValidFor,
    /// Last update timestamp, ISO-8601 local time
    pub last_update: String,
    /// Lifecycle status, e.g. "Active"
    pub lifecycle_status: String,
    /// Whether the specification bundles others
    pub is_bundle: bool,
    /// Development-history reference, always emitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_specification_history: Option<ResourceRef>,
    /// Parent model used via transfer learning
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherited_model: Option<ResourceRef>,
    /// Training data repository
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_training_data: Option<ResourceRef>,
    /// Evaluation data repository
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_evaluation_data: Option<ResourceRef>,
    /// Model data sheet document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_data_sheet: Option<ResourceRef>,
    /// Deployment approval record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_record: Option<ResourceRef>,
    /// Contract and version history
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_contract_version_history: Option<ResourceRef>,
    /// One characteristic per recorded parameter, in key order
    pub service_spec_characteristic: Vec<Characteristic>,
    /// The run's owning party (single element)
    pub related_party: Vec<RelatedParty>,
    /// Fixed target schema discriminator
    pub target_service_schema: TargetServiceSchema,
    /// Raw source metadata for traceability
    pub mlflow_metadata: MlflowMetadata,
}

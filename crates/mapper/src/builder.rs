//! Document builder
//!
//! Projects a [`RunRecord`] into a [`SpecificationDocument`]. Pure aside
//! from the generated document id and the clock fallback in timestamp
//! formatting; no I/O and no shared state, so concurrent invocations are
//! safe.
//!
//! The two projection modes share this builder and differ only by the
//! [`MappingMode`] flag in the configuration. Reference-section policy is
//! driven by the `SectionRule` table rather than scattered string
//! lookups.

use aimbridge_core::{
    Characteristic, CharacteristicValue, MapperConfig, MappingMode, MlflowMetadata, RelatedParty,
    ResourceRef, Result, RunRecord, SpecificationDocument, TargetServiceSchema, ValidFor,
    DOCUMENT_BASE_TYPE, DOCUMENT_TYPE, TARGET_SCHEMA_TYPE,
};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::tags::{
    coerce_bool, coerce_int, TagIndex, TAG_DESCRIPTION, TAG_IS_BUNDLE, TAG_LIFECYCLE_STATUS,
    TAG_OWNER_HREF, TAG_OWNER_ID, TAG_OWNER_NAME, TAG_OWNER_ROLE, TAG_RUN_NAME,
    TAG_TRACKING_URI, TAG_VERSION,
};
use crate::time::format_epoch_ms;

const HISTORY_DESCRIPTION: &str = "Model development history preserved in MLflow";

/// Mime-type lookup for a reference section
struct MimeRule {
    prefix: &'static str,
    suffix: &'static str,
    default: &'static str,
}

/// Policy for one reference section: which tag drives presence, where the
/// description override lives, and the default description text
struct SectionRule {
    driving_prefix: &'static str,
    driving_suffix: &'static str,
    description_prefix: &'static str,
    default_description: &'static str,
    mime: Option<MimeRule>,
}

const INHERITED_MODEL: SectionRule = SectionRule {
    driving_prefix: "inheritedModel",
    driving_suffix: "url",
    description_prefix: "inheritedModel",
    default_description: "Reference to parent model used via transfer learning",
    mime: None,
};

const TRAINING_DATA: SectionRule = SectionRule {
    driving_prefix: "training",
    driving_suffix: "dataSource",
    description_prefix: "trainingData",
    default_description: "Repository link for training data",
    mime: None,
};

const EVALUATION_DATA: SectionRule = SectionRule {
    driving_prefix: "evaluation",
    driving_suffix: "dataSource",
    description_prefix: "evaluationData",
    default_description: "Repository link for evaluation data",
    mime: None,
};

const DATA_SHEET: SectionRule = SectionRule {
    driving_prefix: "dataSheet",
    driving_suffix: "url",
    description_prefix: "dataSheet",
    default_description: "Digital document describing this model",
    mime: Some(MimeRule {
        prefix: "dataSheet",
        suffix: "mimeType",
        default: "application/json",
    }),
};

const DEPLOYMENT_RECORD: SectionRule = SectionRule {
    driving_prefix: "deploymentRecord",
    driving_suffix: "url",
    description_prefix: "deploymentRecord",
    default_description: "Deployment approval record for this model",
    mime: None,
};

const CONTRACT_HISTORY: SectionRule = SectionRule {
    driving_prefix: "contractHistory",
    driving_suffix: "url",
    description_prefix: "contractHistory",
    default_description: "Model contract and version history",
    mime: None,
};

/// Build a specification document from a run record
///
/// # Errors
///
/// Fails on a malformed per-parameter cardinality override; no partial
/// document is produced.
pub fn build_document(run: &RunRecord, config: &MapperConfig) -> Result<SpecificationDocument> {
    let tags = TagIndex::new(&run.tags);
    tracing::debug!(run_id = %run.run_id, mode = ?config.mode, "building specification document");

    let is_bundle = match config.mode {
        MappingMode::TagDriven => coerce_bool(tags.get(TAG_IS_BUNDLE), false),
        MappingMode::AlwaysPopulated => false,
    };

    let document = SpecificationDocument {
        id: Uuid::new_v4().to_string(),
        href: format!("{}/serviceSpecification/{}", config.catalog_base, run.run_id),
        type_name: DOCUMENT_TYPE.to_string(),
        base_type: DOCUMENT_BASE_TYPE.to_string(),
        schema_location: config.spec_schema_location.clone(),
        name: tags
            .get(TAG_RUN_NAME)
            .map(str::to_string)
            .unwrap_or_else(|| format!("MLflow Run {}", run.run_id)),
        description: tags
            .get(TAG_DESCRIPTION)
            .map(str::to_string)
            .unwrap_or_else(|| format!("AI Model specification from MLflow run {}", run.run_id)),
        version: tags.get(TAG_VERSION).unwrap_or("1.0").to_string(),
        valid_for: window(run),
        last_update: format_epoch_ms(run.end_time.filter(|ms| *ms != 0).or(run.start_time)),
        lifecycle_status: tags.get(TAG_LIFECYCLE_STATUS).unwrap_or("Active").to_string(),
        is_bundle,
        model_specification_history: Some(history_section(run, &tags, config)),
        inherited_model: reference_section(&tags, &INHERITED_MODEL, config.mode),
        model_training_data: reference_section(&tags, &TRAINING_DATA, config.mode),
        model_evaluation_data: reference_section(&tags, &EVALUATION_DATA, config.mode),
        model_data_sheet: reference_section(&tags, &DATA_SHEET, config.mode),
        deployment_record: reference_section(&tags, &DEPLOYMENT_RECORD, config.mode),
        model_contract_version_history: reference_section(&tags, &CONTRACT_HISTORY, config.mode),
        service_spec_characteristic: characteristics(run, &tags, config.mode)?,
        related_party: vec![related_party(run, &tags, config)],
        target_service_schema: TargetServiceSchema {
            type_name: TARGET_SCHEMA_TYPE.to_string(),
            schema_location: config.model_schema_location.clone(),
        },
        mlflow_metadata: MlflowMetadata {
            run_id: run.run_id.clone(),
            experiment_id: run.experiment_id.clone(),
            artifact_uri: run.artifact_uri.clone(),
            status: run.status.clone(),
            user_id: run.user_id.clone(),
            metrics: run.metrics.clone(),
            params: run.params.clone(),
            all_tags: run.tags.clone(),
        },
    };

    Ok(document)
}

/// The document validity window; the end stays open for unfinished runs
fn window(run: &RunRecord) -> ValidFor {
    ValidFor {
        start_date_time: format_epoch_ms(run.start_time),
        end_date_time: run
            .end_time
            .filter(|ms| *ms != 0)
            .map(|ms| format_epoch_ms(Some(ms))),
    }
}

/// The development-history section, emitted unconditionally
fn history_section(run: &RunRecord, tags: &TagIndex<'_>, config: &MapperConfig) -> ResourceRef {
    let tracking_uri = tags
        .get(TAG_TRACKING_URI)
        .unwrap_or(config.default_tracking_uri.as_str());
    let experiment = run.experiment_id.as_deref().unwrap_or_default();
    ResourceRef {
        description: HISTORY_DESCRIPTION.to_string(),
        url: format!("{}/#/experiments/{}/runs/{}", tracking_uri, experiment, run.run_id),
        mime_type: None,
    }
}

/// One reference section per its rule and the active mode
fn reference_section(
    tags: &TagIndex<'_>,
    rule: &SectionRule,
    mode: MappingMode,
) -> Option<ResourceRef> {
    let url = match mode {
        MappingMode::TagDriven => tags
            .driving_value(rule.driving_prefix, rule.driving_suffix)?
            .to_string(),
        MappingMode::AlwaysPopulated => tags
            .section_value(rule.driving_prefix, rule.driving_suffix)
            .unwrap_or_default()
            .to_string(),
    };
    let description = tags
        .section_value(rule.description_prefix, "description")
        .unwrap_or(rule.default_description)
        .to_string();
    let mime_type = rule.mime.as_ref().map(|mime| {
        tags.section_value(mime.prefix, mime.suffix)
            .unwrap_or(mime.default)
            .to_string()
    });
    Some(ResourceRef {
        description,
        url,
        mime_type,
    })
}

/// One characteristic per parameter, in the map's key order
fn characteristics(
    run: &RunRecord,
    tags: &TagIndex<'_>,
    mode: MappingMode,
) -> Result<Vec<Characteristic>> {
    let mut characteristics = Vec::with_capacity(run.params.len());
    for (name, value) in &run.params {
        let overrides = match mode {
            MappingMode::TagDriven => tags.characteristic_overrides(name),
            MappingMode::AlwaysPopulated => BTreeMap::new(),
        };
        let value_type = overrides
            .get("valueType")
            .copied()
            .unwrap_or("string")
            .to_string();
        characteristics.push(Characteristic {
            name: name.clone(),
            description: overrides
                .get("description")
                .copied()
                .map(str::to_string)
                .unwrap_or_else(|| format!("Parameter {name} from MLflow")),
            value_type: value_type.clone(),
            configurable: coerce_bool(overrides.get("configurable").copied(), false),
            valid_for: window(run),
            min_cardinality: coerce_int(
                overrides.get("minCardinality").copied(),
                0,
                name,
                "minCardinality",
            )?,
            max_cardinality: coerce_int(
                overrides.get("maxCardinality").copied(),
                1,
                name,
                "maxCardinality",
            )?,
            is_unique: coerce_bool(overrides.get("isUnique").copied(), true),
            regex: overrides.get("regex").copied().unwrap_or_default().to_string(),
            extensible: coerce_bool(overrides.get("extensible").copied(), false),
            service_spec_characteristic_value: vec![CharacteristicValue {
                value_type,
                is_default: true,
                value: value.clone(),
                valid_for: window(run),
            }],
        });
    }
    Ok(characteristics)
}

/// The run's owning party
fn related_party(run: &RunRecord, tags: &TagIndex<'_>, config: &MapperConfig) -> RelatedParty {
    let owner_id = tags.get(TAG_OWNER_ID).unwrap_or("unknown");
    let href = tags
        .get(TAG_OWNER_HREF)
        .map(str::to_string)
        .unwrap_or_else(|| format!("{}/individual/{}", config.party_base, owner_id));
    let user = run.user_id.clone().filter(|user| !user.is_empty());
    let name = match config.mode {
        MappingMode::TagDriven => tags
            .get(TAG_OWNER_NAME)
            .map(str::to_string)
            .or(user)
            .unwrap_or_else(|| "Unknown".to_string()),
        MappingMode::AlwaysPopulated => user.unwrap_or_else(|| "Unknown".to_string()),
    };
    let role = match config.mode {
        MappingMode::TagDriven => tags
            .get(TAG_OWNER_ROLE)
            .unwrap_or(config.default_role.as_str())
            .to_string(),
        MappingMode::AlwaysPopulated => config.default_role.clone(),
    };
    RelatedParty {
        href,
        id: owner_id.to_string(),
        name,
        role,
    }
}

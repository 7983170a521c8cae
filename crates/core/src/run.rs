//! Run metadata types
//!
//! A [`RunRecord`] is the normalized form of one tracked run: lifecycle
//! info plus the three key/value bags (params, metrics, tags). It is
//! immutable for the duration of a mapping call.
//!
//! Params, metrics, and tags are held in `BTreeMap`s so that iteration
//! order is lexicographic by key. Characteristic order in the output
//! document follows this iteration order, which makes the projection a
//! deterministic function of its input.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Normalized metadata for one tracked run
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RunRecord {
    /// Opaque run identifier, used verbatim in output fields and URLs
    pub run_id: String,
    /// Run start, epoch milliseconds
    pub start_time: Option<i64>,
    /// Run end, epoch milliseconds; absent while the run is active
    pub end_time: Option<i64>,
    /// Lifecycle status as reported by the source (e.g. "FINISHED")
    pub status: Option<String>,
    /// User that owns the run
    pub user_id: Option<String>,
    /// Experiment the run belongs to
    pub experiment_id: Option<String>,
    /// Artifact storage location
    pub artifact_uri: Option<String>,
    /// String-valued, write-once inputs recorded for the run
    pub params: BTreeMap<String, String>,
    /// Numeric values recorded for the run (latest value per key)
    pub metrics: BTreeMap<String, f64>,
    /// Free-form string annotations; some keys follow the
    /// `<prefix>_<suffix>` convention consumed by the mapper
    pub tags: BTreeMap<String, String>,
}

impl RunRecord {
    /// Create an empty record for the given run id
    pub fn new(run_id: impl Into<String>) -> Self {
        RunRecord {
            run_id: run_id.into(),
            ..RunRecord::default()
        }
    }

    /// True once the run has an end timestamp
    pub fn is_finished(&self) -> bool {
        matches!(self.end_time, Some(ms) if ms != 0)
    }
}

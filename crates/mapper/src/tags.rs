//! Tag index and coercion rules
//!
//! Tag keys using the informal `<prefix>_<suffix>` convention form a
//! flattened two-level object. [`TagIndex`] materializes that grouping
//! once per mapping call, so presence policy for reference sections is
//! decided against an explicit structure instead of ad hoc string
//! splitting. Keys containing multiple underscores split on the FIRST
//! one; the remainder is the suffix verbatim.
//!
//! The recognized per-parameter override suffixes are an explicit table
//! ([`CHARACTERISTIC_SUFFIXES`]) so additions stay additive and
//! reviewable.

use aimbridge_core::{Error, Result};
use std::collections::BTreeMap;

/// Reserved tag key carrying the run display name
pub const TAG_RUN_NAME: &str = "mlflow.runName";
/// Reserved tag key carrying the model description
pub const TAG_DESCRIPTION: &str = "description";
/// Reserved tag key carrying the model version
pub const TAG_VERSION: &str = "version";
/// Reserved tag key carrying the lifecycle status
pub const TAG_LIFECYCLE_STATUS: &str = "lifecycleStatus";
/// Reserved tag key carrying the bundle flag
pub const TAG_IS_BUNDLE: &str = "isBundle";
/// Reserved tag key carrying the tracking UI address
pub const TAG_TRACKING_URI: &str = "mlflow_tracking_uri";
/// Reserved tag key carrying the owning party's id
pub const TAG_OWNER_ID: &str = "owner_id";
/// Reserved tag key carrying the owning party's href
pub const TAG_OWNER_HREF: &str = "owner_href";
/// Reserved tag key carrying the owning party's display name
pub const TAG_OWNER_NAME: &str = "owner_name";
/// Reserved tag key carrying the owning party's role
pub const TAG_OWNER_ROLE: &str = "owner_role";

/// Per-parameter characteristic override suffixes recognized by the
/// builder, as `<param>_<suffix>` tag keys
pub const CHARACTERISTIC_SUFFIXES: [&str; 8] = [
    "description",
    "valueType",
    "configurable",
    "minCardinality",
    "maxCardinality",
    "isUnique",
    "regex",
    "extensible",
];

/// Grouped view over a run's tags
///
/// Holds the raw key→value view plus the prefix-grouped view. Built once
/// per mapping call; borrows the run's tag map.
#[derive(Debug)]
pub struct TagIndex<'a> {
    raw: &'a BTreeMap<String, String>,
    sections: BTreeMap<&'a str, BTreeMap<&'a str, &'a str>>,
}

impl<'a> TagIndex<'a> {
    /// Build the index, grouping every key that contains an underscore
    pub fn new(tags: &'a BTreeMap<String, String>) -> Self {
        let mut sections: BTreeMap<&str, BTreeMap<&str, &str>> = BTreeMap::new();
        for (key, value) in tags {
            if let Some((prefix, rest)) = key.split_once('_') {
                sections.entry(prefix).or_default().insert(rest, value.as_str());
            }
        }
        TagIndex { raw: tags, sections }
    }

    /// Direct lookup by full tag key
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.raw.get(key).map(String::as_str)
    }

    /// Grouped view for one prefix
    pub fn section(&self, prefix: &str) -> Option<&BTreeMap<&'a str, &'a str>> {
        self.sections.get(prefix)
    }

    /// Value of `<prefix>_<suffix>` through the grouped view
    pub fn section_value(&self, prefix: &str, suffix: &str) -> Option<&'a str> {
        self.sections.get(prefix).and_then(|s| s.get(suffix)).copied()
    }

    /// Non-empty driving value for a reference section
    pub fn driving_value(&self, prefix: &str, suffix: &str) -> Option<&'a str> {
        self.section_value(prefix, suffix).filter(|v| !v.is_empty())
    }

    /// Recognized override values for one parameter, keyed by suffix
    pub fn characteristic_overrides(&self, param: &str) -> BTreeMap<&'static str, &'a str> {
        let mut overrides = BTreeMap::new();
        for suffix in CHARACTERISTIC_SUFFIXES {
            if let Some(value) = self.get(&format!("{param}_{suffix}")) {
                overrides.insert(suffix, value);
            }
        }
        overrides
    }
}

/// Boolean coercion: a value parses to true iff it equals "true"
/// case-insensitively; an absent value takes the default
pub fn coerce_bool(value: Option<&str>, default: bool) -> bool {
    match value {
        Some(v) => v.eq_ignore_ascii_case("true"),
        None => default,
    }
}

/// Integer coercion for cardinality overrides
///
/// A malformed value is a mapping error, never a silent default;
/// cardinality feeds contract validation downstream.
///
/// # Errors
///
/// Returns [`Error::InvalidOverride`] when the value does not parse as a
/// base-10 integer.
pub fn coerce_int(value: Option<&str>, default: i64, param: &str, attribute: &str) -> Result<i64> {
    match value {
        Some(v) => v.trim().parse().map_err(|_| Error::InvalidOverride {
            param: param.to_string(),
            attribute: attribute.to_string(),
            value: v.to_string(),
        }),
        None => Ok(default),
    }
}

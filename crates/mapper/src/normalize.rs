//! Transport-shape normalization
//!
//! The tracking server emits params, metrics, and tags either as a
//! key→value object or as a list of `{key, value}` entries. [`KvPayload`]
//! accepts both and collapses to a `BTreeMap`, last-write-wins on
//! duplicate keys. The same normalization applies identically to all
//! three bags.
//!
//! Two scalar shapes also vary on the wire:
//! - metric values arrive as JSON numbers or as the strings "NaN",
//!   "Infinity", "-Infinity" ([`MetricValue`])
//! - epoch timestamps arrive as JSON integers or numeric strings
//!   ([`EpochMillis`])

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One `{key, value}` entry as emitted in list form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyValue<T> {
    /// Entry key
    pub key: String,
    /// Entry value
    pub value: T,
}

/// A payload that is either a key→value object or a list of entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KvPayload<T> {
    /// Already a mapping; passed through unchanged
    Map(BTreeMap<String, T>),
    /// List of entries; collapsed last-write-wins
    Pairs(Vec<KeyValue<T>>),
}

impl<T> KvPayload<T> {
    /// Collapse to a map. Duplicate keys in list form resolve to the
    /// last occurrence.
    pub fn into_map(self) -> BTreeMap<String, T> {
        match self {
            KvPayload::Map(map) => map,
            KvPayload::Pairs(pairs) => {
                let mut map = BTreeMap::new();
                for entry in pairs {
                    map.insert(entry.key, entry.value);
                }
                map
            }
        }
    }

    /// Number of entries before collapsing
    pub fn len(&self) -> usize {
        match self {
            KvPayload::Map(map) => map.len(),
            KvPayload::Pairs(pairs) => pairs.len(),
        }
    }

    /// True when the payload carries no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for KvPayload<T> {
    fn default() -> Self {
        KvPayload::Pairs(Vec::new())
    }
}

/// Metric value as found on the wire
///
/// Non-finite values are emitted by the source as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    /// Plain JSON number
    Number(f64),
    /// Stringified number, including "NaN" / "Infinity" / "-Infinity"
    Text(String),
}

impl MetricValue {
    /// Numeric value; unparseable text normalizes to NaN
    pub fn to_f64(&self) -> f64 {
        match self {
            MetricValue::Number(n) => *n,
            MetricValue::Text(s) => match s.trim() {
                "Infinity" => f64::INFINITY,
                "-Infinity" => f64::NEG_INFINITY,
                other => other.parse().unwrap_or(f64::NAN),
            },
        }
    }
}

/// Epoch-millisecond timestamp as found on the wire
///
/// The source serializes 64-bit integers as strings in some transports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EpochMillis {
    /// Plain JSON integer
    Number(i64),
    /// Stringified integer
    Text(String),
}

impl EpochMillis {
    /// Millisecond value; empty or unparseable text means absent
    pub fn to_millis(&self) -> Option<i64> {
        match self {
            EpochMillis::Number(n) => Some(*n),
            EpochMillis::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// Collapse an optional payload, treating absence as empty
pub fn normalize<T>(payload: Option<KvPayload<T>>) -> BTreeMap<String, T> {
    payload.map(KvPayload::into_map).unwrap_or_default()
}

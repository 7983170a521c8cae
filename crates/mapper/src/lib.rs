//! The mapping engine
//!
//! Projects a loosely structured bag of run metadata (arbitrary parameter
//! names, `<prefix>_<suffix>` tag conventions) into the fixed-shape
//! specification document:
//! - `normalize`: transport-shape normalization for params/metrics/tags
//! - `time`: epoch-millisecond → local ISO-8601 formatting
//! - `tags`: prefix grouping, reserved keys, coercion rules
//! - `builder`: the document builder and its mode policy table
//!
//! The engine is a pure function of its input apart from the generated
//! document id and the clock fallback for missing timestamps.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod normalize;
pub mod tags;
pub mod time;

pub use builder::build_document;
pub use normalize::{normalize, EpochMillis, KeyValue, KvPayload, MetricValue};
pub use tags::{coerce_bool, coerce_int, TagIndex, CHARACTERISTIC_SUFFIXES};
pub use time::format_epoch_ms;

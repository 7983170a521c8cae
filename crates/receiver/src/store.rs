//! In-memory specification store
//!
//! The only shared mutable state in the system. Writes (insert-or-
//! overwrite by id) serialize through the lock; reads clone out of a
//! consistent snapshot. Validation failures leave the store untouched.

use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Top-level fields a posted document must carry
pub const REQUIRED_FIELDS: [&str; 2] = ["name", "modelDataSheet"];

/// Rejection reasons for a posted document
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A required top-level field is missing or null
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// The document carries no usable `id`
    #[error("Missing model id")]
    MissingId,
}

/// In-memory store of specification documents, keyed by `id`
#[derive(Debug, Default)]
pub struct SpecStore {
    documents: RwLock<HashMap<String, Value>>,
}

impl SpecStore {
    /// Create an empty store
    pub fn new() -> Self {
        SpecStore::default()
    }

    /// Validate and store a document; overwrites any prior document with
    /// the same id and returns that id
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingField`] when `name` or
    /// `modelDataSheet` is absent or null, [`StoreError::MissingId`] when
    /// `id` is absent, non-string, or empty.
    pub fn insert(&self, document: Value) -> Result<String, StoreError> {
        for field in REQUIRED_FIELDS {
            match document.get(field) {
                None | Some(Value::Null) => return Err(StoreError::MissingField(field)),
                Some(_) => {}
            }
        }
        let id = document
            .get("id")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .ok_or(StoreError::MissingId)?
            .to_string();

        self.documents.write().insert(id.clone(), document);
        Ok(id)
    }

    /// All stored documents
    pub fn all(&self) -> Vec<Value> {
        self.documents.read().values().cloned().collect()
    }

    /// One document by id
    pub fn get(&self, id: &str) -> Option<Value> {
        self.documents.read().get(id).cloned()
    }

    /// One document projected onto an allow-list of top-level keys
    pub fn get_projected(&self, id: &str, fields: &[String]) -> Option<Value> {
        let documents = self.documents.read();
        let document = documents.get(id)?;
        let Value::Object(map) = document else {
            return Some(document.clone());
        };
        let filtered: serde_json::Map<String, Value> = map
            .iter()
            .filter(|(key, _)| fields.iter().any(|field| field == *key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Some(Value::Object(filtered))
    }

    /// Number of stored documents
    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    /// True when nothing is stored
    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }
}

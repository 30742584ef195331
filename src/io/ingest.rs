//! JSON ingest and structural validation.
//!
//! This module turns the two input documents of a journeys run into a
//! validated [`JourneyInputs`]:
//!
//! - the primary collection must be an array of objects, each with a unique,
//!   non-empty string id that is usable as a file name
//! - the reference table must be an object whose values are arrays
//!
//! Any failure is an `InputLoad` error and happens before the destination is touched.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::domain::{GenerateConfig, artifact_file_name};
use crate::error::GenerateError;
use crate::records::{ID_ALIAS, ID_FIELD, record_id};

/// Secondary table: journey id -> steps.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    entries: Map<String, Value>,
}

impl ReferenceTable {
    pub fn get(&self, id: &str) -> Option<&[Value]> {
        self.entries.get(id).and_then(Value::as_array).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Validated inputs of a journeys run.
#[derive(Debug, Clone)]
pub struct JourneyInputs {
    pub records: Vec<Value>,
    /// Record identifiers, index-aligned with `records`.
    pub ids: Vec<String>,
    pub steps: ReferenceTable,
}

/// Load and validate the primary collection and the reference table.
pub fn load_inputs(config: &GenerateConfig) -> Result<JourneyInputs, GenerateError> {
    let primary = load_document(&config.primary_path)?;
    let reference = load_document(&config.reference_path)?;

    let inputs = JourneyInputs::from_documents(primary, reference, &config.manifest_name)
        .map_err(|(which, reason)| {
            let path = match which {
                InputDocument::Primary => &config.primary_path,
                InputDocument::Reference => &config.reference_path,
            };
            GenerateError::input_load(path, reason)
        })?;

    tracing::info!(
        records = inputs.records.len(),
        references = inputs.steps.len(),
        "loaded journey inputs"
    );
    Ok(inputs)
}

/// Read and parse one JSON document.
pub fn load_document(path: &Path) -> Result<Value, GenerateError> {
    let raw = fs::read_to_string(path).map_err(|e| GenerateError::input_load(path, e.to_string()))?;
    serde_json::from_str(&raw).map_err(|e| GenerateError::input_load(path, format!("invalid JSON: {e}")))
}

/// Which input document a validation failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputDocument {
    Primary,
    Reference,
}

impl JourneyInputs {
    /// Validate already-parsed documents.
    ///
    /// `manifest_name` is reserved: no record may produce an artifact with that name.
    pub fn from_documents(
        primary: Value,
        reference: Value,
        manifest_name: &str,
    ) -> Result<Self, (InputDocument, String)> {
        let Value::Array(records) = primary else {
            return Err((InputDocument::Primary, "expected a top-level array of records".to_string()));
        };
        let Value::Object(entries) = reference else {
            return Err((InputDocument::Reference, "expected a top-level object keyed by id".to_string()));
        };

        if let Some((key, _)) = entries.iter().find(|(_, v)| !v.is_array()) {
            return Err((InputDocument::Reference, format!("entry '{key}' is not an array")));
        }

        let mut ids = Vec::with_capacity(records.len());
        let mut seen = HashSet::new();
        for (idx, record) in records.iter().enumerate() {
            if !record.is_object() {
                return Err((InputDocument::Primary, format!("record #{idx} is not an object")));
            }
            let id = record_id(record).ok_or_else(|| {
                (
                    InputDocument::Primary,
                    format!("record #{idx} has no string or integer `{ID_FIELD}` (or `{ID_ALIAS}`)"),
                )
            })?;
            validate_id(&id, manifest_name).map_err(|reason| (InputDocument::Primary, format!("record #{idx}: {reason}")))?;
            if !seen.insert(id.clone()) {
                return Err((InputDocument::Primary, format!("duplicate id '{id}'")));
            }
            ids.push(id);
        }

        Ok(Self {
            records,
            ids,
            steps: ReferenceTable { entries },
        })
    }
}

fn validate_id(id: &str, manifest_name: &str) -> Result<(), String> {
    if id == "." || id == ".." || id.contains(['/', '\\', '\0']) {
        return Err(format!("id '{id}' cannot be used as a file name"));
    }
    if artifact_file_name(id) == manifest_name {
        return Err(format!("id '{id}' collides with the manifest file '{manifest_name}'"));
    }
    Ok(())
}

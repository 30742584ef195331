//! Serialization of encoded values to their on-disk form.
//!
//! Files are pretty-printed with two-space indentation, matching what the
//! store's import tooling expects. Output is deterministic for a given value.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::domain::{ArrayValue, TypedValue};
use crate::error::{DestinationOp, GenerateError};

/// Serialize any encoded shape to pretty JSON bytes.
pub fn to_pretty_bytes<T: Serialize + ?Sized>(value: &T) -> std::io::Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(value)?)
}

/// Build the manifest body from identifiers, preserving their order.
pub fn manifest_value(ids: &[String]) -> ArrayValue {
    ArrayValue {
        values: ids.iter().map(|id| TypedValue::string(id.as_str())).collect(),
    }
}

/// Write one standalone document (config, themes, tenant) to `path`.
pub fn write_document<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), GenerateError> {
    let target = path.display().to_string();
    let bytes = to_pretty_bytes(value).map_err(|e| GenerateError::destination(DestinationOp::Write, &target, e))?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| GenerateError::destination(DestinationOp::Write, &target, e))?;
    }
    fs::write(path, bytes).map_err(|e| GenerateError::destination(DestinationOp::Write, target, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Entity;

    #[test]
    fn manifest_lists_string_values_in_order() {
        let ids = vec!["j2".to_string(), "j1".to_string()];
        let bytes = to_pretty_bytes(&manifest_value(&ids)).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text,
            "{\n  \"values\": [\n    {\n      \"stringValue\": \"j2\"\n    },\n    {\n      \"stringValue\": \"j1\"\n    }\n  ]\n}"
        );
    }

    #[test]
    fn documents_are_written_with_parent_directories() {
        let root = tempfile::tempdir().unwrap();
        let path = root.path().join("datastore").join("themes.json");
        write_document(&path, &Entity::default()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{\n  \"properties\": {}\n}");
    }
}

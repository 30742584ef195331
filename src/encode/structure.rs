//! Composite encoders: localized text, image sets, calls-to-action, lists, entities.
//!
//! Sparse omission propagates upward: an image variant with no value is dropped,
//! a platform with no variants is dropped, and an image set with no platforms
//! encodes to `None` so its parent omits the key as well.

use serde_json::{Map, Value};

use crate::domain::{ArrayValue, Entity, Properties, TypedValue};
use crate::encode::path::FieldPath;
use crate::encode::scalar::{ScalarKind, encode_scalar, is_falsy, kind_name, scalar_text};
use crate::error::EncodeError;

/// Fields of a call-to-action, in output order.
pub const CTA_FIELDS: [&str; 10] = [
    "type",
    "action",
    "backgroundColor",
    "fontColor",
    "text",
    "textDesktop",
    "textTablet",
    "disabledBackgroundColor",
    "disabledFontColor",
    "url",
];

/// Wrap pre-built properties into an entity value.
pub fn build_entity(properties: Properties) -> TypedValue {
    TypedValue::EntityValue(Entity::new(properties))
}

/// Encode a homogeneous list as one flat `ArrayValue`.
///
/// `values` holds exactly one encoded element per item; an empty list yields `values: []`.
pub fn encode_array_of<F>(items: &[Value], path: &FieldPath, mut element: F) -> Result<TypedValue, EncodeError>
where
    F: FnMut(&Value, &FieldPath) -> Result<TypedValue, EncodeError>,
{
    let values = items
        .iter()
        .enumerate()
        .map(|(idx, item)| element(item, &path.index(idx)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(TypedValue::ArrayValue(ArrayValue { values }))
}

/// [`encode_array_of`] for a field that must hold a JSON array.
pub fn encode_list<F>(value: &Value, path: &FieldPath, element: F) -> Result<TypedValue, EncodeError>
where
    F: FnMut(&Value, &FieldPath) -> Result<TypedValue, EncodeError>,
{
    encode_array_of(expect_array(value, path)?, path, element)
}

/// Encode `{text, fontColor}`. Both fields are required.
pub fn encode_localized_text(value: &Value, path: &FieldPath) -> Result<TypedValue, EncodeError> {
    let entry = expect_object(value, path)?;
    let mut properties = Properties::new();
    for field in ["text", "fontColor"] {
        let field_path = path.key(field);
        let raw = required(entry, field, path)?;
        properties.insert(field.to_string(), TypedValue::StringValue(scalar_text(raw, &field_path)?));
    }
    Ok(build_entity(properties))
}

/// Encode every entry of a key → localized text mapping.
pub fn encode_localized_map(value: &Value, path: &FieldPath) -> Result<TypedValue, EncodeError> {
    let entries = expect_object(value, path)?;
    let mut properties = Properties::new();
    for (key, entry) in entries {
        properties.insert(key.clone(), encode_localized_text(entry, &path.key(key))?);
    }
    Ok(build_entity(properties))
}

/// Encode a variant → path mapping, dropping empty variants.
///
/// Returns `None` when no variant has a value.
pub fn encode_variant_set(value: &Value, path: &FieldPath) -> Result<Option<TypedValue>, EncodeError> {
    if is_falsy(Some(value)) {
        return Ok(None);
    }
    let variants = expect_object(value, path)?;
    let mut entity = Entity::default();
    for (variant, raw) in variants {
        entity.insert_opt(variant, encode_scalar(Some(raw), ScalarKind::String, &path.key(variant))?);
    }
    Ok(non_empty(entity))
}

/// Encode a platform → variant → path mapping with sparse omission at every level.
pub fn encode_image_set(value: &Value, path: &FieldPath) -> Result<Option<TypedValue>, EncodeError> {
    if is_falsy(Some(value)) {
        return Ok(None);
    }
    let platforms = expect_object(value, path)?;
    let mut entity = Entity::default();
    for (platform, variants) in platforms {
        entity.insert_opt(platform, encode_variant_set(variants, &path.key(platform))?);
    }
    Ok(non_empty(entity))
}

/// Encode a call-to-action; fields with no value are left out.
pub fn encode_call_to_action(value: &Value, path: &FieldPath) -> Result<TypedValue, EncodeError> {
    let entry = expect_object(value, path)?;
    let mut entity = Entity::default();
    for field in CTA_FIELDS {
        entity.insert_opt(field, encode_scalar(entry.get(field), ScalarKind::String, &path.key(field))?);
    }
    Ok(entity.into())
}

pub fn expect_object<'a>(value: &'a Value, path: &FieldPath) -> Result<&'a Map<String, Value>, EncodeError> {
    value
        .as_object()
        .ok_or_else(|| path.error(format!("expected an object, found {}", kind_name(value))))
}

pub fn expect_array<'a>(value: &'a Value, path: &FieldPath) -> Result<&'a [Value], EncodeError> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| path.error(format!("expected an array, found {}", kind_name(value))))
}

/// Fetch a required field of `parent` (at `path`); `null` counts as missing.
pub fn required<'a>(parent: &'a Map<String, Value>, field: &str, path: &FieldPath) -> Result<&'a Value, EncodeError> {
    parent
        .get(field)
        .filter(|v| !v.is_null())
        .ok_or_else(|| path.key(field).error("required field is missing"))
}

/// Fetch an optional field; falsy values read as absent.
pub fn optional<'a>(parent: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    parent.get(field).filter(|v| !is_falsy(Some(*v)))
}

/// Optional composite field: present and truthy values are handed to `encode`.
pub fn optional_with<F>(
    parent: &Map<String, Value>,
    field: &str,
    path: &FieldPath,
    encode: F,
) -> Result<Option<TypedValue>, EncodeError>
where
    F: FnOnce(&Value, &FieldPath) -> Result<TypedValue, EncodeError>,
{
    match parent.get(field) {
        Some(value) if !is_falsy(Some(value)) => encode(value, &path.key(field)).map(Some),
        _ => Ok(None),
    }
}

fn non_empty(entity: Entity) -> Option<TypedValue> {
    if entity.properties.is_empty() { None } else { Some(entity.into()) }
}

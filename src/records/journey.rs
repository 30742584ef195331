//! Journey detail records (the batch artifacts) and their steps.

use serde_json::Value;

use crate::domain::{EncodeOptions, Entity, TypedValue};
use crate::encode::{
    FieldPath, ScalarKind, encode_array_of, encode_call_to_action, encode_flag, encode_image_set, encode_list,
    encode_localized_map, encode_scalar, encode_variant_set, expect_object, optional, optional_with,
};
use crate::error::EncodeError;

/// Identifier field of a journey record.
pub const ID_FIELD: &str = "journeyId";
/// Accepted fallback for [`ID_FIELD`].
pub const ID_ALIAS: &str = "id";
/// Theme used when a journey names none.
pub const DEFAULT_THEME: &str = "default";

/// Identifier of a journey record: a non-empty string, or an integer in its decimal form.
pub fn record_id(record: &Value) -> Option<String> {
    [ID_FIELD, ID_ALIAS].iter().find_map(|field| match record.get(*field)? {
        Value::String(id) if !id.is_empty() => Some(id.clone()),
        Value::Number(n) if n.is_i64() || n.is_u64() => Some(n.to_string()),
        _ => None,
    })
}

/// Encode one journey together with its joined steps.
pub fn encode_journey(record: &Value, steps: &[Value], options: &EncodeOptions) -> Result<Entity, EncodeError> {
    let root = FieldPath::root();
    let fields = expect_object(record, &root)?;
    let id = record_id(record).ok_or_else(|| root.key(ID_FIELD).error("required field is missing"))?;

    let mut journey = Entity::default();
    journey.insert_opt(ID_FIELD, Some(TypedValue::string(id)));
    journey.insert_opt("i18n", optional_with(fields, "i18n", &root, encode_localized_map)?);
    journey.insert_opt(
        "images",
        match optional(fields, "images") {
            Some(images) => encode_image_set(images, &root.key("images"))?,
            None => None,
        },
    );
    journey.insert_opt("highlighted", Some(encode_flag(fields.get("highlighted"))));
    journey.insert_opt("done", Some(encode_flag(fields.get("done"))));
    journey.insert_opt(
        "cta",
        optional(fields, "cta")
            .map(|cta| encode_list(cta, &root.key("cta"), encode_call_to_action))
            .transpose()?,
    );

    let theme = encode_scalar(fields.get("theme"), ScalarKind::String, &root.key("theme"))?;
    journey.insert_opt("theme", Some(theme.unwrap_or_else(|| TypedValue::string(DEFAULT_THEME))));

    journey.insert_opt("steps", Some(encode_array_of(steps, &root.key("steps"), encode_step)?));
    journey.insert_opt("date", options.generated_at.map(|ms| TypedValue::string(ms.to_string())));
    journey.insert_opt(
        "shareAlias",
        encode_scalar(fields.get("shareAlias"), ScalarKind::String, &root.key("shareAlias"))?,
    );
    journey.insert_opt(
        "video",
        match optional(fields, "video") {
            Some(video) => encode_variant_set(video, &root.key("video"))?,
            None => None,
        },
    );

    Ok(journey)
}

/// Encode one journey step.
pub fn encode_step(value: &Value, path: &FieldPath) -> Result<TypedValue, EncodeError> {
    let fields = expect_object(value, path)?;
    let mut step = Entity::default();
    step.insert_opt("i18n", optional_with(fields, "i18n", path, encode_localized_map)?);
    step.insert_opt("icons", encode_scalar(fields.get("icons"), ScalarKind::String, &path.key("icons"))?);
    step.insert_opt("canSkip", Some(encode_flag(fields.get("canSkip"))));
    for field in ["url", "type", "id"] {
        step.insert_opt(field, encode_scalar(fields.get(field), ScalarKind::String, &path.key(field))?);
    }
    Ok(step.into())
}

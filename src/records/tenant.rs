//! Tenant tutorial (single document).
//!
//! Unlike the journey artifacts, the tutorial file holds a full tagged value
//! (`{"entityValue": {...}}`) because it is stored as a nested property.

use serde_json::Value;

use crate::domain::{EncodeOptions, Entity, TypedValue};
use crate::encode::{
    FieldPath, ScalarKind, encode_call_to_action, encode_image_set, encode_localized_map, encode_scalar,
    expect_object, optional, optional_with,
};
use crate::error::EncodeError;

pub fn encode_tenant(doc: &Value, options: &EncodeOptions) -> Result<TypedValue, EncodeError> {
    let root = FieldPath::root();
    let fields = expect_object(doc, &root)?;

    let mut tutorial = Entity::default();
    tutorial.insert_opt("i18n", optional_with(fields, "i18n", &root, encode_localized_map)?);
    tutorial.insert_opt(
        "images",
        match optional(fields, "images") {
            Some(images) => encode_image_set(images, &root.key("images"))?,
            None => None,
        },
    );

    if let Some(color) = optional(fields, "color") {
        let color_path = root.key("color");
        let color = expect_object(color, &color_path)?;
        let mut palette = Entity::default();
        for name in ["overlay", "background"] {
            palette.insert_opt(name, encode_scalar(color.get(name), ScalarKind::String, &color_path.key(name))?);
        }
        tutorial.insert_opt("color", Some(palette.into()));
    }

    tutorial.insert_opt("added", options.generated_at.map(|ms| TypedValue::string(ms.to_string())));
    tutorial.insert_opt("cta", optional_with(fields, "cta", &root, encode_call_to_action)?);

    Ok(tutorial.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tutorial_is_a_wrapped_entity() {
        let doc = json!({
            "i18n": {"welcome": {"text": "Hello", "fontColor": "#222"}},
            "images": {"mobile": {"hero": "a.png"}},
            "color": {"overlay": "#00000080"},
            "cta": {"type": "button", "action": "next"}
        });
        let options = EncodeOptions { generated_at: Some(5) };
        let value = encode_tenant(&doc, &options).unwrap();

        let json = serde_json::to_value(&value).unwrap();
        assert!(json.get("entityValue").is_some());

        let tutorial = value.as_entity().unwrap();
        let color = tutorial.get("color").and_then(TypedValue::as_entity).unwrap();
        assert_eq!(color.properties.len(), 1);
        assert_eq!(tutorial.get("added"), Some(&TypedValue::string("5")));
        assert!(tutorial.get("cta").and_then(TypedValue::as_entity).is_some());
    }

    #[test]
    fn falsy_color_images_and_cta_are_omitted() {
        let doc = json!({"images": "", "color": false, "cta": 0});
        let value = encode_tenant(&doc, &EncodeOptions::default()).unwrap();
        assert!(value.as_entity().unwrap().properties.is_empty());
    }
}

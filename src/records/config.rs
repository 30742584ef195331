//! Journeys landing configuration (single document).

use serde_json::Value;

use crate::domain::{Entity, Properties, TypedValue};
use crate::encode::{
    FieldPath, ScalarKind, build_entity, encode_call_to_action, encode_list, encode_localized_text, encode_scalar,
    expect_object, optional, required,
};
use crate::error::EncodeError;

/// Localized texts the landing page cannot render without.
pub const CONFIG_TEXTS: [&str; 4] = ["title", "description", "inProgress", "completed"];

pub fn encode_journeys_config(doc: &Value) -> Result<Entity, EncodeError> {
    let root = FieldPath::root();
    let fields = expect_object(doc, &root)?;

    let i18n_path = root.key("i18n");
    let i18n = expect_object(required(fields, "i18n", &root)?, &i18n_path)?;
    let mut texts = Properties::new();
    for name in CONFIG_TEXTS {
        let entry = required(i18n, name, &i18n_path)?;
        texts.insert(name.to_string(), encode_localized_text(entry, &i18n_path.key(name))?);
    }

    let mut config = Entity::default();
    config.insert_opt("i18n", Some(build_entity(texts)));

    if let Some(colors) = optional(fields, "colors") {
        let colors_path = root.key("colors");
        let colors = expect_object(colors, &colors_path)?;
        let mut palette = Entity::default();
        palette.insert_opt(
            "background",
            encode_scalar(colors.get("background"), ScalarKind::String, &colors_path.key("background"))?,
        );
        config.insert_opt("colors", Some(TypedValue::EntityValue(palette)));
    }

    config.insert_opt(
        "cta",
        optional(fields, "cta")
            .map(|cta| encode_list(cta, &root.key("cta"), encode_call_to_action))
            .transpose()?,
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn text(s: &str) -> Value {
        json!({"text": s, "fontColor": "#000"})
    }

    #[test]
    fn encodes_texts_colors_and_cta() {
        let doc = json!({
            "i18n": {
                "title": text("T"),
                "description": text("D"),
                "inProgress": text("P"),
                "completed": text("C")
            },
            "colors": {"background": "#fafafa"},
            "cta": [{"type": "link", "text": "Start"}]
        });
        let config = encode_journeys_config(&doc).unwrap();

        let i18n = config.get("i18n").and_then(TypedValue::as_entity).unwrap();
        assert_eq!(i18n.properties.len(), 4);
        let colors = config.get("colors").and_then(TypedValue::as_entity).unwrap();
        assert_eq!(colors.get("background"), Some(&TypedValue::string("#fafafa")));
        assert_eq!(config.get("cta").and_then(TypedValue::as_array).unwrap().values.len(), 1);
    }

    #[test]
    fn missing_landing_text_is_malformed() {
        let doc = json!({"i18n": {"title": text("T"), "description": text("D"), "inProgress": text("P")}});
        let err = encode_journeys_config(&doc).unwrap_err();
        assert_eq!(err.path, "i18n.completed");
    }

    #[test]
    fn falsy_colors_and_cta_are_omitted() {
        let doc = json!({
            "i18n": {
                "title": text("T"),
                "description": text("D"),
                "inProgress": text("P"),
                "completed": text("C")
            },
            "colors": "",
            "cta": false
        });
        let config = encode_journeys_config(&doc).unwrap();
        assert!(config.get("colors").is_none());
        assert!(config.get("cta").is_none());
    }
}

//! Theme palettes (single document): theme name -> color name -> value.

use serde_json::Value;

use crate::domain::{Entity, TypedValue};
use crate::encode::{FieldPath, ScalarKind, encode_scalar, expect_object};
use crate::error::EncodeError;

pub fn encode_themes(doc: &Value) -> Result<Entity, EncodeError> {
    let root = FieldPath::root();
    let themes = expect_object(doc, &root)?;

    let mut out = Entity::default();
    for (name, colors) in themes {
        let theme_path = root.key(name);
        let mut palette = Entity::default();
        for (color, value) in expect_object(colors, &theme_path)? {
            palette.insert_opt(color, encode_scalar(Some(value), ScalarKind::String, &theme_path.key(color))?);
        }
        out.insert_opt(name, Some(TypedValue::EntityValue(palette)));
    }
    Ok(out)
}

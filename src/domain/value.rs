//! Tagged value model understood by the document store.
//!
//! Every value is wrapped in exactly one tag, e.g. `{"stringValue": "Hi"}`.
//! Composite values nest: an entity holds `properties`, an array holds `values`.
//!
//! Two shapes are also written to disk on their own:
//!
//! - an artifact file is a bare [`Entity`] (`{"properties": {...}}`)
//! - the manifest is a bare [`ArrayValue`] (`{"values": [...]}`)

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Named properties of an entity, in insertion order.
pub type Properties = IndexMap<String, TypedValue>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypedValue {
    StringValue(String),
    IntegerValue(i64),
    BooleanValue(bool),
    ArrayValue(ArrayValue),
    EntityValue(Entity),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayValue {
    pub values: Vec<TypedValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub properties: Properties,
}

impl TypedValue {
    pub fn string(text: impl Into<String>) -> Self {
        TypedValue::StringValue(text.into())
    }

    pub fn as_entity(&self) -> Option<&Entity> {
        match self {
            TypedValue::EntityValue(entity) => Some(entity),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&ArrayValue> {
        match self {
            TypedValue::ArrayValue(array) => Some(array),
            _ => None,
        }
    }
}

impl Entity {
    pub fn new(properties: Properties) -> Self {
        Self { properties }
    }

    pub fn get(&self, name: &str) -> Option<&TypedValue> {
        self.properties.get(name)
    }

    /// Insert `value` under `name` when present; absent values leave no key behind.
    pub fn insert_opt(&mut self, name: &str, value: Option<TypedValue>) {
        if let Some(value) = value {
            self.properties.insert(name.to_string(), value);
        }
    }
}

impl From<Entity> for TypedValue {
    fn from(entity: Entity) -> Self {
        TypedValue::EntityValue(entity)
    }
}

impl From<ArrayValue> for TypedValue {
    fn from(array: ArrayValue) -> Self {
        TypedValue::ArrayValue(array)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_wire_form_uses_camel_case_tags() {
        let json = serde_json::to_string(&TypedValue::string("Hi")).unwrap();
        assert_eq!(json, r#"{"stringValue":"Hi"}"#);

        let json = serde_json::to_string(&TypedValue::IntegerValue(7)).unwrap();
        assert_eq!(json, r#"{"integerValue":7}"#);

        let json = serde_json::to_string(&TypedValue::BooleanValue(false)).unwrap();
        assert_eq!(json, r#"{"booleanValue":false}"#);
    }

    #[test]
    fn composite_wire_form_nests_values_and_properties() {
        let mut entity = Entity::default();
        entity.insert_opt("title", Some(TypedValue::string("x")));
        entity.insert_opt("missing", None);
        let value = TypedValue::ArrayValue(ArrayValue {
            values: vec![entity.into()],
        });

        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(
            json,
            r#"{"arrayValue":{"values":[{"entityValue":{"properties":{"title":{"stringValue":"x"}}}}]}}"#
        );
    }
}

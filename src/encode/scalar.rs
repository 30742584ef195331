//! Scalar encoding and the "no value" convention.
//!
//! A field is *falsy* when it is absent, `null`, `false`, `0`, or `""`.
//! Falsy fields encode to `None` and the caller leaves the property key out.

use serde_json::Value;

use crate::domain::TypedValue;
use crate::encode::path::FieldPath;
use crate::error::EncodeError;

/// Declared type of a scalar field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    String,
    Integer,
    Boolean,
}

/// Whether `value` counts as "no value".
pub fn is_falsy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(flag)) => !flag,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v == 0.0 || v.is_nan()),
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => false,
    }
}

/// Encode a scalar field, or `None` when it has no value.
pub fn encode_scalar(
    value: Option<&Value>,
    kind: ScalarKind,
    path: &FieldPath,
) -> Result<Option<TypedValue>, EncodeError> {
    let Some(value) = value.filter(|v| !is_falsy(Some(*v))) else {
        return Ok(None);
    };

    let encoded = match kind {
        ScalarKind::String => TypedValue::StringValue(scalar_text(value, path)?),
        ScalarKind::Integer => TypedValue::IntegerValue(scalar_integer(value, path)?),
        ScalarKind::Boolean => TypedValue::BooleanValue(true),
    };
    Ok(Some(encoded))
}

/// Encode a flag that is always emitted; falsy or absent reads as `false`.
pub fn encode_flag(value: Option<&Value>) -> TypedValue {
    TypedValue::BooleanValue(!is_falsy(value))
}

/// Render a scalar as text. Numbers and booleans use their JSON spelling.
pub fn scalar_text(value: &Value, path: &FieldPath) -> Result<String, EncodeError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        other => Err(path.error(format!("expected a scalar, found {}", kind_name(other)))),
    }
}

fn scalar_integer(value: &Value, path: &FieldPath) -> Result<i64, EncodeError> {
    match value {
        Value::Number(n) => {
            if let Some(v) = n.as_i64() {
                return Ok(v);
            }
            match n.as_f64() {
                Some(v) if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 => Ok(v as i64),
                _ => Err(path.error(format!("expected an integer, found {n}"))),
            }
        }
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| path.error(format!("expected an integer, found \"{s}\""))),
        Value::Bool(flag) => Ok(i64::from(*flag)),
        other => Err(path.error(format!("expected an integer, found {}", kind_name(other)))),
    }
}

/// Short name of a JSON value's kind, for error messages.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn path() -> FieldPath {
        FieldPath::root().key("field")
    }

    #[test]
    fn falsy_values_encode_to_nothing() {
        for value in [json!(null), json!(""), json!(0), json!(false)] {
            let encoded = encode_scalar(Some(&value), ScalarKind::String, &path()).unwrap();
            assert_eq!(encoded, None, "{value} should be omitted");
        }
        assert_eq!(encode_scalar(None, ScalarKind::Integer, &path()).unwrap(), None);
    }

    #[test]
    fn scalars_are_wrapped_per_declared_kind() {
        let text = encode_scalar(Some(&json!("abc")), ScalarKind::String, &path()).unwrap();
        assert_eq!(text, Some(TypedValue::string("abc")));

        let number_as_text = encode_scalar(Some(&json!(1712)), ScalarKind::String, &path()).unwrap();
        assert_eq!(number_as_text, Some(TypedValue::string("1712")));

        let int = encode_scalar(Some(&json!("42")), ScalarKind::Integer, &path()).unwrap();
        assert_eq!(int, Some(TypedValue::IntegerValue(42)));

        let flag = encode_scalar(Some(&json!("yes")), ScalarKind::Boolean, &path()).unwrap();
        assert_eq!(flag, Some(TypedValue::BooleanValue(true)));
    }

    #[test]
    fn composite_where_scalar_declared_is_malformed() {
        let err = encode_scalar(Some(&json!({"a": 1})), ScalarKind::String, &path()).unwrap_err();
        assert_eq!(err.path, "field");
        assert!(err.reason.contains("an object"));

        let err = encode_scalar(Some(&json!(1.5)), ScalarKind::Integer, &path()).unwrap_err();
        assert!(err.reason.contains("integer"));
    }

    #[test]
    fn integers_beyond_i64_are_rejected_not_saturated() {
        let err = encode_scalar(Some(&json!(9_223_372_036_854_775_808u64)), ScalarKind::Integer, &path()).unwrap_err();
        assert!(err.reason.contains("integer"));

        let exact = encode_scalar(Some(&json!(4.0e18)), ScalarKind::Integer, &path()).unwrap();
        assert_eq!(exact, Some(TypedValue::IntegerValue(4_000_000_000_000_000_000)));
    }

    #[test]
    fn flags_are_always_emitted() {
        assert_eq!(encode_flag(None), TypedValue::BooleanValue(false));
        assert_eq!(encode_flag(Some(&json!(false))), TypedValue::BooleanValue(false));
        assert_eq!(encode_flag(Some(&json!(true))), TypedValue::BooleanValue(true));
    }
}

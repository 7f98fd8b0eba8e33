use core::fmt;

use serde_json::{Number, Value};

/// The schema type inferred for a JSON value.
///
/// There is no null variant: schema dialects have no first-class null-only
/// type, so null collapses to [`JsonType::String`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum JsonType {
    Boolean,
    Long,
    Double,
    String,
    Array,
    Struct,
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonType::Boolean => f.write_str("boolean"),
            JsonType::Long => f.write_str("long"),
            JsonType::Double => f.write_str("double"),
            JsonType::String => f.write_str("string"),
            JsonType::Array => f.write_str("array"),
            JsonType::Struct => f.write_str("struct"),
        }
    }
}

/// Classifies a JSON value into its schema type. Total over all values.
#[must_use]
pub fn infer_type(value: &Value) -> JsonType {
    match value {
        Value::Null | Value::String(_) => JsonType::String,
        Value::Bool(_) => JsonType::Boolean,
        Value::Number(number) => {
            if is_integral(number) {
                JsonType::Long
            } else {
                JsonType::Double
            }
        }
        Value::Array(_) => JsonType::Array,
        Value::Object(_) => JsonType::Struct,
    }
}

// 2^53 - 1, the largest integer exactly representable in an f64.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn is_integral(number: &Number) -> bool {
    if number.is_i64() || number.is_u64() {
        return true;
    }
    number
        .as_f64()
        .is_some_and(|float| float.fract() == 0.0 && float.abs() <= MAX_SAFE_INTEGER)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use test_case::test_case;

    use super::{infer_type, JsonType};

    #[test_case(json!(null), JsonType::String; "null")]
    #[test_case(json!(true), JsonType::Boolean; "bool")]
    #[test_case(json!(3), JsonType::Long; "integer")]
    #[test_case(json!(-17), JsonType::Long; "negative integer")]
    #[test_case(json!(3.5), JsonType::Double; "float")]
    #[test_case(json!(3.0), JsonType::Long; "integral float")]
    #[test_case(json!(9_007_199_254_740_993.5), JsonType::Double; "beyond safe integer range")]
    #[test_case(json!("x"), JsonType::String; "string")]
    #[test_case(json!([1, 2]), JsonType::Array; "array")]
    #[test_case(json!({"a": 1}), JsonType::Struct; "struct value")]
    fn test_infer_type(value: serde_json::Value, expected: JsonType) {
        assert_eq!(infer_type(&value), expected);
    }

    #[test]
    fn test_display() {
        assert_eq!(JsonType::Long.to_string(), "long");
        assert_eq!(JsonType::Struct.to_string(), "struct");
    }
}

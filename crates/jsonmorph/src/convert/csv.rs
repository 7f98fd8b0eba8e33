use serde_json::Value;

use crate::error::ConvertError;

/// Renders an array of flat objects as a CSV table.
///
/// The header row comes from the first element's keys in their own order;
/// every later row is aligned to that header positionally. Missing keys
/// render as empty cells and extra keys are dropped.
///
/// # Errors
///
/// Returns [`ConvertError::ExpectedArray`] when the value is not an array.
pub fn to_csv(value: &Value) -> Result<String, ConvertError> {
    let Value::Array(rows) = value else {
        return Err(ConvertError::ExpectedArray);
    };
    if rows.is_empty() {
        return Ok(String::new());
    }
    let headers: Vec<&str> = match &rows[0] {
        Value::Object(first) => first.keys().map(String::as_str).collect(),
        _ => Vec::new(),
    };
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(headers.join(","));
    for row in rows {
        let cells: Vec<String> = headers
            .iter()
            .map(|header| cell(row.get(*header)))
            .collect();
        lines.push(cells.join(","));
    }
    Ok(lines.join("\n"))
}

fn cell(value: Option<&Value>) -> String {
    let text = match value {
        None | Some(Value::Null) => return String::new(),
        Some(container @ (Value::Object(_) | Value::Array(_))) => {
            serde_json::to_string(container).expect("Failed to serialize JSON value")
        }
        Some(Value::Bool(boolean)) => boolean.to_string(),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::String(string)) => string.clone(),
    };
    if text.contains(',') || text.contains('"') || text.contains('\n') {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{to_csv, ConvertError};

    #[test]
    fn test_rejects_non_array() {
        assert_eq!(
            to_csv(&json!({"a": 1})),
            Err(ConvertError::ExpectedArray)
        );
        assert_eq!(to_csv(&json!("x")), Err(ConvertError::ExpectedArray));
    }

    #[test]
    fn test_empty_array() {
        assert_eq!(to_csv(&json!([])).expect("Should convert"), "");
    }

    #[test]
    fn test_header_from_first_element() {
        let value = json!([{"a": 1, "b": 2}, {"a": 3}]);
        assert_eq!(to_csv(&value).expect("Should convert"), "a,b\n1,2\n3,");
    }

    #[test]
    fn test_extra_keys_are_dropped() {
        let value = json!([{"a": 1}, {"a": 2, "b": 3}]);
        assert_eq!(to_csv(&value).expect("Should convert"), "a\n1\n2");
    }

    #[test]
    fn test_comma_triggers_quoting() {
        let value = json!([{"x": "a,b"}]);
        assert_eq!(to_csv(&value).expect("Should convert"), "x\n\"a,b\"");
    }

    #[test]
    fn test_quotes_are_doubled() {
        let value = json!([{"x": "say \"hi\""}]);
        assert_eq!(
            to_csv(&value).expect("Should convert"),
            "x\n\"say \"\"hi\"\"\""
        );
    }

    #[test]
    fn test_null_cell_is_empty() {
        let value = json!([{"a": null, "b": 1}]);
        assert_eq!(to_csv(&value).expect("Should convert"), "a,b\n,1");
    }

    #[test]
    fn test_nested_value_renders_as_json() {
        let value = json!([{"a": {"x": 1}}]);
        assert_eq!(
            to_csv(&value).expect("Should convert"),
            "a\n\"{\"\"x\"\":1}\""
        );
    }
}

use serde_json::Value;

/// Renders a value as YAML-flavored text.
///
/// Strings are emitted as bare tokens unless they contain a colon, in which
/// case they are double-quoted verbatim; no further escaping is performed.
/// Non-empty containers render block-style with a leading newline, which the
/// caller displays untouched.
#[must_use]
pub fn to_yaml(value: &Value) -> String {
    render(value, 0)
}

fn render(value: &Value, indent: usize) -> String {
    let spaces = "  ".repeat(indent);
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(boolean) => boolean.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(string) => {
            if string.contains(':') {
                format!("\"{string}\"")
            } else {
                string.clone()
            }
        }
        Value::Array(items) => {
            if items.is_empty() {
                return "[]".to_string();
            }
            let mut out = String::new();
            for item in items {
                out.push('\n');
                out.push_str(&spaces);
                out.push_str("- ");
                // The first line of a nested container loses its own indent
                // and lines up after the dash; deeper lines keep theirs.
                out.push_str(render(item, indent + 1).trim());
            }
            out
        }
        Value::Object(entries) => {
            if entries.is_empty() {
                return "{}".to_string();
            }
            let mut out = String::new();
            for (key, child) in entries {
                let rendered = render(child, indent + 1);
                out.push('\n');
                out.push_str(&spaces);
                out.push_str(key);
                out.push(':');
                if !rendered.starts_with('\n') {
                    out.push(' ');
                }
                out.push_str(&rendered);
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use test_case::test_case;

    use super::to_yaml;

    #[test_case(json!(null), "null"; "null")]
    #[test_case(json!(true), "true"; "bool")]
    #[test_case(json!(42), "42"; "integer")]
    #[test_case(json!(2.5), "2.5"; "float")]
    #[test_case(json!("plain"), "plain"; "bare string")]
    #[test_case(json!("key: value"), "\"key: value\""; "string with colon is quoted")]
    #[test_case(json!([]), "[]"; "empty array")]
    #[test_case(json!({}), "{}"; "empty object")]
    fn test_scalars(value: serde_json::Value, expected: &str) {
        assert_eq!(to_yaml(&value), expected);
    }

    #[test]
    fn test_flat_object() {
        let value = json!({"name": "morph", "count": 3});
        assert_eq!(to_yaml(&value), "\nname: morph\ncount: 3");
    }

    #[test]
    fn test_nested_object_block_style() {
        let value = json!({"outer": {"inner": 1}});
        assert_eq!(to_yaml(&value), "\nouter:\n  inner: 1");
    }

    #[test]
    fn test_array_of_scalars() {
        let value = json!([1, 2, 3]);
        assert_eq!(to_yaml(&value), "\n- 1\n- 2\n- 3");
    }

    #[test]
    fn test_array_of_objects() {
        let value = json!([{"a": 1, "b": 2}]);
        assert_eq!(to_yaml(&value), "\n- a: 1\n  b: 2");
    }

    #[test]
    fn test_empty_containers_inline_under_key() {
        let value = json!({"a": [], "b": {}});
        assert_eq!(to_yaml(&value), "\na: []\nb: {}");
    }

    #[test]
    fn test_nested_array_under_key() {
        let value = json!({"items": ["x", "y"]});
        assert_eq!(to_yaml(&value), "\nitems:\n  - x\n  - y");
    }
}

use core::fmt;

use serde_json::Value;

/// Renders a value as XML text inside a prolog + `<root>` envelope.
///
/// Object keys become tag names with every character outside `[A-Za-z0-9_-]`
/// replaced by `_`; array elements become positional `<item index="i">` tags.
/// Scalar text content is interpolated as-is, without escaping.
#[must_use]
pub fn to_xml(value: &Value) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<root>\n{}</root>",
        Body { value }
    )
}

struct Body<'a> {
    value: &'a Value,
}

impl fmt::Display for Body<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self.value, 1)
    }
}

fn write_value(f: &mut fmt::Formatter<'_>, value: &Value, depth: usize) -> fmt::Result {
    match value {
        Value::Null => {
            indent(f, depth)?;
            f.write_str("<null/>\n")
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                indent(f, depth)?;
                writeln!(f, "<item index=\"{index}\">")?;
                write_value(f, item, depth + 1)?;
                indent(f, depth)?;
                f.write_str("</item>\n")?;
            }
            Ok(())
        }
        Value::Object(entries) => {
            for (key, child) in entries {
                let tag = sanitize_tag(key);
                indent(f, depth)?;
                if matches!(child, Value::Object(_) | Value::Array(_)) {
                    writeln!(f, "<{tag}>")?;
                    write_value(f, child, depth + 1)?;
                    indent(f, depth)?;
                    writeln!(f, "</{tag}>")?;
                } else {
                    // Scalars, including null, render inline on one line.
                    writeln!(f, "<{tag}>{}</{tag}>", Scalar { value: child })?;
                }
            }
            Ok(())
        }
        scalar => {
            indent(f, depth)?;
            writeln!(f, "<value>{}</value>", Scalar { value: scalar })
        }
    }
}

fn indent(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        f.write_str("  ")?;
    }
    Ok(())
}

struct Scalar<'a> {
    value: &'a Value,
}

impl fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Value::Null => f.write_str("null"),
            Value::Bool(boolean) => write!(f, "{boolean}"),
            Value::Number(number) => write!(f, "{number}"),
            Value::String(string) => f.write_str(string),
            Value::Array(_) | Value::Object(_) => unreachable!("containers are never inline"),
        }
    }
}

fn sanitize_tag(key: &str) -> String {
    key.chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' {
                ch
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::to_xml;

    const PROLOG: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

    #[test]
    fn test_scalar_root() {
        assert_eq!(
            to_xml(&json!(42)),
            format!("{PROLOG}<root>\n  <value>42</value>\n</root>")
        );
    }

    #[test]
    fn test_null_root() {
        assert_eq!(
            to_xml(&json!(null)),
            format!("{PROLOG}<root>\n  <null/>\n</root>")
        );
    }

    #[test]
    fn test_tag_sanitization() {
        assert_eq!(
            to_xml(&json!({"my key!": 1})),
            format!("{PROLOG}<root>\n  <my_key_>1</my_key_>\n</root>")
        );
    }

    #[test]
    fn test_null_object_value_is_inline() {
        assert_eq!(
            to_xml(&json!({"a": null})),
            format!("{PROLOG}<root>\n  <a>null</a>\n</root>")
        );
    }

    #[test]
    fn test_array_items_are_indexed() {
        assert_eq!(
            to_xml(&json!(["x", "y"])),
            format!(
                "{PROLOG}<root>\n  <item index=\"0\">\n    <value>x</value>\n  </item>\n  <item index=\"1\">\n    <value>y</value>\n  </item>\n</root>"
            )
        );
    }

    #[test]
    fn test_nested_object() {
        assert_eq!(
            to_xml(&json!({"outer": {"inner": true}})),
            format!(
                "{PROLOG}<root>\n  <outer>\n    <inner>true</inner>\n  </outer>\n</root>"
            )
        );
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(
            to_xml(&json!({"a": [], "b": {}})),
            format!("{PROLOG}<root>\n  <a>\n  </a>\n  <b>\n  </b>\n</root>")
        );
    }
}

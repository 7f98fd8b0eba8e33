use serde_json::Value;

use crate::types::{infer_type, JsonType};

/// Generates a PySpark `StructType` declaration describing the value.
#[must_use]
pub fn to_spark_python(value: &Value) -> String {
    format!(
        "from pyspark.sql.types import *\n\nschema = {}",
        schema_body(value, 1, Dialect::Python)
    )
}

/// Generates a Scala Spark `StructType` declaration describing the value.
#[must_use]
pub fn to_spark_scala(value: &Value) -> String {
    format!(
        "import org.apache.spark.sql.types._\n\nval schema = {}",
        schema_body(value, 1, Dialect::Scala)
    )
}

#[derive(Debug, Clone, Copy)]
enum Dialect {
    Python,
    Scala,
}

impl Dialect {
    fn unit(self) -> &'static str {
        match self {
            Dialect::Python => "    ",
            Dialect::Scala => "  ",
        }
    }

    fn nullable(self) -> &'static str {
        match self {
            Dialect::Python => "True",
            Dialect::Scala => "nullable = true",
        }
    }

    fn primitive(self, ty: JsonType) -> &'static str {
        match (self, ty) {
            (Dialect::Python, JsonType::Long) => "LongType()",
            (Dialect::Python, JsonType::Double) => "DoubleType()",
            (Dialect::Python, JsonType::Boolean) => "BooleanType()",
            (Dialect::Python, _) => "StringType()",
            (Dialect::Scala, JsonType::Long) => "LongType",
            (Dialect::Scala, JsonType::Double) => "DoubleType",
            (Dialect::Scala, JsonType::Boolean) => "BooleanType",
            (Dialect::Scala, _) => "StringType",
        }
    }
}

/// Recursive schema body. Arrays sample their first element only; an empty
/// array falls back to an array-of-string placeholder.
fn schema_body(value: &Value, depth: usize, dialect: Dialect) -> String {
    match value {
        Value::Array(items) => match items.first() {
            None => format!("ArrayType({})", dialect.primitive(JsonType::String)),
            Some(first) => format!("ArrayType({})", schema_body(first, depth, dialect)),
        },
        Value::Object(entries) => {
            let spaces = dialect.unit().repeat(depth);
            let fields: Vec<String> = entries
                .iter()
                .map(|(key, child)| {
                    let field_type = match infer_type(child) {
                        JsonType::Struct => schema_body(child, depth + 1, dialect),
                        JsonType::Array => schema_body(child, depth, dialect),
                        primitive => dialect.primitive(primitive).to_string(),
                    };
                    format!(
                        "{spaces}StructField(\"{key}\", {field_type}, {})",
                        dialect.nullable()
                    )
                })
                .collect();
            let closing = dialect.unit().repeat(depth - 1);
            match dialect {
                Dialect::Python => {
                    format!("StructType([\n{}\n{closing}])", fields.join(",\n"))
                }
                Dialect::Scala => {
                    format!("StructType(Array(\n{}\n{closing}))", fields.join(",\n"))
                }
            }
        }
        scalar => dialect.primitive(infer_type(scalar)).to_string(),
    }
}

//! Converters from a parsed JSON value to sibling text formats.
//!
//! Every converter is a pure, total function over [`serde_json::Value`],
//! except CSV which only accepts arrays.
mod csv;
mod spark;
mod xml;
mod yaml;

pub use csv::to_csv;
pub use spark::{to_spark_python, to_spark_scala};
pub use xml::to_xml;
pub use yaml::to_yaml;

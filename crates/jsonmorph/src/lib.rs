//! # jsonmorph
//!
//! Local JSON inspection and transformation: canonical formatting, conversion
//! to sibling text formats (YAML, XML, CSV, Spark schema declarations), and a
//! line-based structural diff with navigation.
//!
//! All operations are pure functions over an already-parsed
//! [`serde_json::Value`]; parsing and presentation belong to the caller.
//!
//! ```
//! use serde_json::json;
//!
//! let value = json!({"name": "morph", "tags": ["json", "yaml"]});
//! let pretty = jsonmorph::format(&value);
//! assert_eq!(serde_json::from_str::<serde_json::Value>(&pretty).unwrap(), value);
//! ```
pub mod convert;
mod diff;
mod error;
mod types;

use serde_json::Value;

pub use diff::{compare, DiffSession, LineDiff};
pub use error::ConvertError;
pub use types::{infer_type, JsonType};

/// Renders a value as canonical 2-space-indented JSON text.
///
/// This is the same rendering the diff engine uses on both sides of a
/// comparison.
#[must_use]
pub fn format(value: &Value) -> String {
    serde_json::to_string_pretty(value).expect("Failed to serialize JSON value")
}

/// Renders a value as compact JSON text with no insignificant whitespace.
#[must_use]
pub fn minify(value: &Value) -> String {
    serde_json::to_string(value).expect("Failed to serialize JSON value")
}

/// Size statistics for a text document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentStats {
    /// Number of lines, counting the last line even without a trailing newline.
    pub lines: usize,
    /// Number of characters.
    pub chars: usize,
    /// UTF-8 encoded size in bytes.
    pub bytes: usize,
}

/// Computes line, character, and byte counts for a document.
#[must_use]
pub fn stats(content: &str) -> DocumentStats {
    DocumentStats {
        lines: content.split('\n').count(),
        chars: content.chars().count(),
        bytes: content.len(),
    }
}

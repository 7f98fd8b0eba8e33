use serde_json::Value;

use crate::format;

/// A single differing line between two canonically formatted documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDiff {
    /// Zero-based line index into the side-by-side rendering.
    pub line_number: usize,
    /// The line on the left side, empty when past its end.
    pub left: String,
    /// The line on the right side, empty when past its end.
    pub right: String,
}

/// Compares two values line by line over their canonical 2-space-indented
/// renderings.
///
/// The comparison is strictly positional: lines are paired by index, with
/// out-of-range positions treated as empty strings. A single inserted line
/// therefore shifts every following pair and each shifted pair is reported.
/// Records are ordered ascending by line number.
#[must_use]
pub fn compare(left: &Value, right: &Value) -> Vec<LineDiff> {
    let left_text = format(left);
    let right_text = format(right);
    let left_lines: Vec<&str> = left_text.split('\n').collect();
    let right_lines: Vec<&str> = right_text.split('\n').collect();

    let mut records = Vec::new();
    for line_number in 0..left_lines.len().max(right_lines.len()) {
        let left_line = left_lines.get(line_number).copied().unwrap_or("");
        let right_line = right_lines.get(line_number).copied().unwrap_or("");
        if left_line != right_line {
            records.push(LineDiff {
                line_number,
                left: left_line.to_string(),
                right: right_line.to_string(),
            });
        }
    }
    records
}

/// A comparison result with a circular cursor over its records.
///
/// Owned by a single interactive session; an empty session is the explicit
/// "no differences" outcome, distinct from not having compared at all.
#[derive(Debug)]
pub struct DiffSession {
    records: Vec<LineDiff>,
    cursor: usize,
}

impl DiffSession {
    /// Runs a fresh comparison with the cursor on the first record.
    #[must_use]
    pub fn compare(left: &Value, right: &Value) -> DiffSession {
        DiffSession {
            records: compare(left, right),
            cursor: 0,
        }
    }

    /// All differing lines, ordered ascending by line number.
    #[must_use]
    pub fn records(&self) -> &[LineDiff] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The record under the cursor, or `None` when the documents match.
    #[must_use]
    pub fn current(&self) -> Option<&LineDiff> {
        self.records.get(self.cursor)
    }

    /// Zero-based cursor position, or `None` when the documents match.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        if self.records.is_empty() {
            None
        } else {
            Some(self.cursor)
        }
    }

    /// Moves the cursor forward, wrapping past the last record.
    pub fn next(&mut self) {
        if !self.records.is_empty() {
            self.cursor = (self.cursor + 1) % self.records.len();
        }
    }

    /// Moves the cursor backward, wrapping past the first record.
    pub fn previous(&mut self) {
        if !self.records.is_empty() {
            self.cursor = (self.cursor + self.records.len() - 1) % self.records.len();
        }
    }
}

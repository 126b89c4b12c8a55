use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// The complete set of line values at one instant.
///
/// The line count is fixed when the snapshot is created. Replacing a line
/// produces a new snapshot; clones share storage, so a snapshot handed out
/// earlier never observes later edits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormSnapshot {
    lines: Arc<[String]>,
}

impl FormSnapshot {
    /// Creates a snapshot of `line_count` empty lines.
    pub fn blank(line_count: usize) -> Self {
        Self {
            lines: vec![String::new(); line_count].into(),
        }
    }

    /// Number of lines. Never changes for the lifetime of the value.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if the snapshot holds zero lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns `true` if every line is the empty string.
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(String::is_empty)
    }

    /// Returns the line at `index`, or `None` if out of bounds.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Returns all lines in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns a copy of this snapshot with line `index` replaced by `value`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn with_line(&self, index: usize, value: impl Into<String>) -> Self {
        assert!(
            index < self.lines.len(),
            "line index {index} out of range for {} lines",
            self.lines.len()
        );
        let mut lines = self.lines.to_vec();
        lines[index] = value.into();
        Self {
            lines: lines.into(),
        }
    }
}

impl From<Vec<String>> for FormSnapshot {
    fn from(lines: Vec<String>) -> Self {
        Self {
            lines: lines.into(),
        }
    }
}

use chrono::{DateTime, Utc};

use super::FormSnapshot;

/// A finalized copy of the form, stamped with when it was submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// The lines as they stood at submission time.
    pub lines: FormSnapshot,
    /// UTC time of submission.
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    /// Stamps `lines` with the current UTC time.
    pub fn now(lines: FormSnapshot) -> Self {
        Self {
            lines,
            submitted_at: Utc::now(),
        }
    }

    /// Number of non-empty lines.
    pub fn filled_count(&self) -> usize {
        self.lines.lines().iter().filter(|l| !l.is_empty()).count()
    }
}

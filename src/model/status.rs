use std::fmt;

/// Outcome of the most recent load, save, submit, or clear.
///
/// Purely informational: no operation is gated on the current status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    /// Nothing has happened yet this session.
    #[default]
    Ready,
    /// A saved draft was restored at startup.
    DraftLoaded,
    /// The stored draft could not be read or decoded.
    LoadFailed,
    /// The latest edit was written to the store.
    Saved,
    /// The latest edit could not be written to the store.
    SaveFailed,
    /// The form was submitted.
    Submitted,
    /// The form and the stored draft were cleared.
    Cleared,
    /// The form was cleared but the stored draft could not be deleted.
    ClearFailed,
}

impl Status {
    /// The user-facing message for this status.
    pub fn message(self) -> &'static str {
        match self {
            Self::Ready => "Ready",
            Self::DraftLoaded => "Draft loaded from your last session.",
            Self::LoadFailed => "Could not load saved data.",
            Self::Saved => "Progress saved automatically.",
            Self::SaveFailed => "Could not save progress.",
            Self::Submitted => "Form submitted successfully!",
            Self::Cleared => "Form cleared. Ready for a new entry.",
            Self::ClearFailed => "Form cleared, but the saved draft could not be removed.",
        }
    }

    /// Returns `true` for statuses reporting a storage failure.
    pub fn is_error(self) -> bool {
        matches!(self, Self::LoadFailed | Self::SaveFailed | Self::ClearFailed)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

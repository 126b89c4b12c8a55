//! Actions returned by screen event handlers.

use crossterm::event::KeyEvent;

use crate::model::FormSnapshot;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` applies these to the [`FormSession`](crate::session::FormSession).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Replace the line at `index` with `value`.
    Edit {
        /// Line index.
        index: usize,
        /// The line's full new text.
        value: String,
    },
    /// Submit the form.
    Submit,
    /// Blank the form and delete the saved draft.
    Clear,
    /// Quit the application.
    Quit,
}

/// Common behavior for all screen state types.
pub trait ScreenState {
    /// Process a key event against the current lines and return an
    /// [`Action`] for the `App` to apply.
    fn handle_key(&mut self, key: KeyEvent, lines: &FormSnapshot) -> Action;
}

//! The form session: in-memory lines, their status, and their stored draft.
//!
//! Every mutation saves synchronously before returning, so the store always
//! reflects the last non-blank edit. Storage failures never escape: they are
//! logged and reported through [`FormSession::status`], and the in-memory
//! lines stay as the user left them.

use tracing::{debug, error, info};

use crate::config::Config;
use crate::model::{FormSnapshot, Status, Submission};
use crate::storage::record::{self, SaveOutcome};
use crate::storage::{KeyValueStore, LoadError, SaveError};

/// One editing session over a fixed number of lines.
#[derive(Debug)]
pub struct FormSession<S> {
    store: S,
    key: String,
    snapshot: FormSnapshot,
    status: Status,
}

impl<S: KeyValueStore> FormSession<S> {
    /// Starts a session, restoring the stored draft if there is a valid one.
    ///
    /// Never writes to the store. A draft that cannot be read or decoded is
    /// logged and left in place; the session starts blank with
    /// [`Status::LoadFailed`].
    pub fn initialize(store: S, config: &Config) -> Self {
        let mut session = Self {
            store,
            key: config.storage_key.clone(),
            snapshot: FormSnapshot::blank(config.line_count),
            status: Status::Ready,
        };
        match session.load() {
            Ok(Some(snapshot)) => {
                info!(key = %session.key, "restored saved draft");
                session.snapshot = snapshot;
                session.status = Status::DraftLoaded;
            }
            Ok(None) => {}
            Err(e) => {
                error!(key = %session.key, error = %e, "failed to load saved draft");
                session.status = Status::LoadFailed;
            }
        }
        session
    }

    /// Reads the stored draft without touching session state.
    pub fn load(&self) -> Result<Option<FormSnapshot>, LoadError> {
        record::load(&self.store, &self.key, self.snapshot.len())
    }

    /// Persists the current lines.
    ///
    /// A blank form is not written and leaves the status alone. Otherwise the
    /// status becomes [`Status::Saved`] or [`Status::SaveFailed`].
    pub fn save(&mut self) -> Result<SaveOutcome, SaveError> {
        match record::save(&mut self.store, &self.key, &self.snapshot) {
            Ok(SaveOutcome::Written) => {
                debug!(key = %self.key, "saved draft");
                self.status = Status::Saved;
                Ok(SaveOutcome::Written)
            }
            Ok(SaveOutcome::SkippedBlank) => Ok(SaveOutcome::SkippedBlank),
            Err(e) => {
                error!(key = %self.key, error = %e, "failed to save draft");
                self.status = Status::SaveFailed;
                Err(e)
            }
        }
    }

    /// Replaces line `index` with `value` and saves.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.line_count()`.
    pub fn edit_field(&mut self, index: usize, value: impl Into<String>) {
        self.snapshot = self.snapshot.with_line(index, value);
        // Failure is already logged and reflected in the status.
        let _ = self.save();
    }

    /// Finalizes the current lines.
    ///
    /// Nothing is validated or cleared; the submission is logged and returned.
    pub fn submit(&mut self) -> Submission {
        let submission = Submission::now(self.snapshot.clone());
        info!(
            lines = ?submission.lines.lines(),
            filled = submission.filled_count(),
            submitted_at = %submission.submitted_at,
            "form submitted"
        );
        self.status = Status::Submitted;
        submission
    }

    /// Blanks every line and deletes the stored draft.
    ///
    /// Lines are blanked even if the delete fails, in which case the status
    /// is [`Status::ClearFailed`].
    pub fn clear_form(&mut self) {
        self.snapshot = FormSnapshot::blank(self.snapshot.len());
        match self.store.delete(&self.key) {
            Ok(()) => {
                info!(key = %self.key, "cleared form and saved draft");
                self.status = Status::Cleared;
            }
            Err(e) => {
                error!(key = %self.key, error = %e, "failed to delete saved draft");
                self.status = Status::ClearFailed;
            }
        }
    }

    /// Returns the current lines.
    pub fn snapshot(&self) -> &FormSnapshot {
        &self.snapshot
    }

    /// Returns the outcome of the most recent operation.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the fixed number of lines.
    pub fn line_count(&self) -> usize {
        self.snapshot.len()
    }

    /// Returns the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

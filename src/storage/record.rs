//! Encoding of a [`FormSnapshot`] as the stored draft record.
//!
//! The record is a JSON array of strings, one element per line, stored under
//! a single fixed key.

use super::error::{LoadError, SaveError};
use super::store::KeyValueStore;
use crate::model::FormSnapshot;

/// What [`save`] did with the snapshot it was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The record was written to the store.
    Written,
    /// Every line was empty, so nothing was written.
    SkippedBlank,
}

/// Encodes a snapshot as a JSON array of strings.
pub fn encode(snapshot: &FormSnapshot) -> Result<Vec<u8>, SaveError> {
    serde_json::to_vec(snapshot).map_err(SaveError::Encode)
}

/// Decodes a stored record, requiring exactly `line_count` lines.
///
/// Bytes that are not UTF-8 JSON are a malformed record.
pub fn decode(raw: &[u8], line_count: usize) -> Result<FormSnapshot, LoadError> {
    let snapshot: FormSnapshot =
        serde_json::from_slice(raw).map_err(LoadError::MalformedRecord)?;
    if snapshot.len() != line_count {
        return Err(LoadError::LengthMismatch {
            expected: line_count,
            found: snapshot.len(),
        });
    }
    Ok(snapshot)
}

/// Reads the draft stored under `key`.
///
/// Returns `Ok(None)` when there is no draft. An empty stored value counts
/// as no draft.
pub fn load<S: KeyValueStore + ?Sized>(
    store: &S,
    key: &str,
    line_count: usize,
) -> Result<Option<FormSnapshot>, LoadError> {
    match store.get(key)? {
        Some(raw) if !raw.is_empty() => decode(&raw, line_count).map(Some),
        _ => Ok(None),
    }
}

/// Writes `snapshot` under `key`, unless every line is empty.
pub fn save<S: KeyValueStore + ?Sized>(
    store: &mut S,
    key: &str,
    snapshot: &FormSnapshot,
) -> Result<SaveOutcome, SaveError> {
    if snapshot.is_blank() {
        return Ok(SaveOutcome::SkippedBlank);
    }
    let raw = encode(snapshot)?;
    store.set(key, &raw)?;
    Ok(SaveOutcome::Written)
}

use super::error::StoreError;

/// A persistent byte store keyed by string that outlives a single session.
///
/// Implementations are accessed from one thread, at most once per user
/// action, so no locking is expected.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` if there is none.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// A failed write leaves the previous value in place.
    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Removes the value under `key`. Removing an absent key succeeds.
    fn delete(&mut self, key: &str) -> Result<(), StoreError>;
}

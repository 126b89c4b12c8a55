/// Errors raised by a [`KeyValueStore`](super::KeyValueStore) backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// An I/O error occurred while reading, writing, or removing a value.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Writing the value would exceed the store's capacity.
    #[error("storage quota exceeded: {requested} bytes requested, limit is {limit}")]
    QuotaExceeded {
        /// Maximum total bytes the store accepts.
        limit: usize,
        /// Total bytes the store would hold after the write.
        requested: usize,
    },
}

/// Errors that can occur while loading the saved draft.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The stored value is not a JSON array of strings.
    #[error("malformed draft record: {0}")]
    MalformedRecord(#[source] serde_json::Error),

    /// The stored array decoded but holds the wrong number of lines.
    #[error("draft record has {found} lines, expected {expected}")]
    LengthMismatch {
        /// The configured line count.
        expected: usize,
        /// The number of lines in the stored record.
        found: usize,
    },

    /// The store could not be read.
    #[error("could not read draft: {0}")]
    Store(#[from] StoreError),
}

/// Errors that can occur while saving the draft.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    /// The snapshot could not be encoded.
    #[error("could not encode draft: {0}")]
    Encode(#[source] serde_json::Error),

    /// The store rejected the write.
    #[error("could not write draft: {0}")]
    Store(#[from] StoreError),
}

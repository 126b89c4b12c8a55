//! Draft persistence: a key-value store abstraction and the record format.
//!
//! The whole form is stored as one JSON array of strings under a single key.
//! [`FileStore`] keeps values on disk between runs; [`MemoryStore`] keeps them
//! in memory, optionally with a byte quota.

mod error;
mod file_store;
mod memory;
pub mod record;
mod store;

pub use error::{LoadError, SaveError, StoreError};
pub use file_store::FileStore;
pub use memory::MemoryStore;
pub use record::SaveOutcome;
pub use store::KeyValueStore;

//! Phonebook Storage Layer
//!
//! Durable key-value persistence for the phonebook.
//! Every value is a whole serialized document; writers overwrite, never patch.

mod database;
mod error;
mod memory;
mod migrations;

pub use database::Database;
pub use error::StorageError;
pub use memory::MemoryStore;

pub type Result<T> = std::result::Result<T, StorageError>;

/// A string-keyed, string-valued durable slot store.
///
/// Implementations must make `set_many` all-or-nothing.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn set_many(&self, pairs: &[(&str, &str)]) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;
}

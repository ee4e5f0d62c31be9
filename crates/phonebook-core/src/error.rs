//! Core error types

use thiserror::Error;

use crate::entry::EntryId;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] phonebook_storage::StorageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Entry not found: {0}")]
    EntryNotFound(EntryId),

    #[error("No entry id left to assign")]
    IdSpaceExhausted,

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Row out of range: {0}")]
    RowOutOfRange(usize),

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Phonebook not initialized")]
    NotInitialized,
}

//! Phonebook Core
//!
//! Contact entries, the Record Store that mirrors them to durable storage,
//! and the Entry Editor that drives the grid and its dialogs.

mod config;
mod editor;
mod entry;
mod error;
mod form;
mod seed;
mod state;
mod store;
mod validation;
mod view;

pub use config::{Config, DEFAULT_PAGE_SIZE, DEFAULT_STORAGE_KEY};
pub use editor::{Action, Editor, Outcome};
pub use entry::{Entry, EntryFields, EntryId, EntryPatch, Field};
pub use error::CoreError;
pub use form::FormState;
pub use seed::seed_entries;
pub use state::{EditorPhase, EditorState};
pub use store::{IdPolicy, LocalRecordStore, RecordStore};
pub use validation::{is_valid_phone_number, validate, FieldError, ValidationReport};
pub use view::{
    columns, Column, DialogView, FormFieldView, GridRow, GridView, RowAction, CANCEL_LABEL,
    NEW_BUTTON_LABEL,
};

pub use phonebook_storage::{Database, KeyValueStore, MemoryStore, StorageError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Open the configured database and mount an editor over it
pub fn open(config: &Config) -> Result<Editor<LocalRecordStore<Database>>> {
    config.validate()?;

    if let Some(parent) = config.database_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let db = Database::open(&config.database_path)?;
    let store = LocalRecordStore::new(db, config.storage_key.clone(), config.id_policy);

    tracing::info!(
        path = %config.database_path.display(),
        key = %config.storage_key,
        "Opened phonebook"
    );

    Editor::mount(store)
}

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // A subscriber may already be installed by the host or another test
    let _ = fmt().with_env_filter(filter).with_target(true).try_init();
}

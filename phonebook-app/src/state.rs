//! Application state management
use parking_lot::RwLock;
use std::sync::Arc;

use phonebook_core::{
    Config, CoreError, Database, Editor, KeyValueStore, LocalRecordStore, RecordStore, Result,
};

/// Thread-safe application state wrapper
///
/// The editor is generic over its store so tests can mount one over an
/// in-memory fake; the shell uses the SQLite-backed default.
pub struct AppState<S = LocalRecordStore<Database>> {
    config: Config,
    editor: Arc<RwLock<Option<Editor<S>>>>,
}

impl AppState<LocalRecordStore<Database>> {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            editor: Arc::new(RwLock::new(None)),
        }
    }

    /// Open storage and hydrate the entry list
    pub fn initialize(&self) -> Result<()> {
        let editor = phonebook_core::open(&self.config)?;
        *self.editor.write() = Some(editor);
        Ok(())
    }
}

impl<K: KeyValueStore> AppState<LocalRecordStore<K>> {
    /// Mount over an arbitrary key-value store
    pub fn with_store(config: Config, kv: K) -> Result<Self> {
        config.validate()?;
        let store = LocalRecordStore::new(kv, config.storage_key.clone(), config.id_policy);
        let editor = Editor::mount(store)?;

        Ok(Self {
            config,
            editor: Arc::new(RwLock::new(Some(editor))),
        })
    }
}

impl<S: RecordStore> AppState<S> {
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_initialized(&self) -> bool {
        self.editor.read().is_some()
    }

    pub fn with_editor<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Editor<S>) -> Result<T>,
    {
        let guard = self.editor.read();
        match guard.as_ref() {
            Some(editor) => f(editor),
            None => Err(CoreError::NotInitialized),
        }
    }

    pub fn with_editor_mut<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Editor<S>) -> Result<T>,
    {
        let mut guard = self.editor.write();
        match guard.as_mut() {
            Some(editor) => f(editor),
            None => Err(CoreError::NotInitialized),
        }
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            editor: Arc::clone(&self.editor),
        }
    }
}

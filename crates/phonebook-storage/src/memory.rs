//! In-memory key-value store
//!
//! Stands in for the durable store in tests. Writes can be switched off to
//! simulate a full or disabled backing store.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use crate::error::StorageError;
use crate::{KeyValueStore, Result};

#[derive(Default)]
struct Inner {
    values: RwLock<HashMap<String, String>>,
    read_only: AtomicBool,
    writes: AtomicUsize,
}

#[derive(Default)]
pub struct MemoryStore {
    inner: Arc<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every subsequent write with `StorageError::Unavailable`
    pub fn set_read_only(&self, read_only: bool) {
        self.inner.read_only.store(read_only, Ordering::SeqCst);
    }

    /// Number of successful write calls so far
    pub fn write_count(&self) -> usize {
        self.inner.writes.load(Ordering::SeqCst)
    }

    fn check_writable(&self) -> Result<()> {
        if self.inner.read_only.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("store is read-only".to_string()));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.inner.values.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.check_writable()?;
        self.inner
            .values
            .write()
            .insert(key.to_string(), value.to_string());
        self.inner.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn set_many(&self, pairs: &[(&str, &str)]) -> Result<()> {
        self.check_writable()?;
        let mut values = self.inner.values.write();
        for (key, value) in pairs {
            values.insert(key.to_string(), value.to_string());
        }
        self.inner.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.check_writable()?;
        self.inner.values.write().remove(key);
        self.inner.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

impl Clone for MemoryStore {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_values() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set("phonebook", "[]").unwrap();
        assert_eq!(other.get("phonebook").unwrap().as_deref(), Some("[]"));
        assert_eq!(other.write_count(), 1);
    }

    #[test]
    fn test_read_only_rejects_writes() {
        let store = MemoryStore::new();
        store.set("phonebook", "[]").unwrap();
        store.set_read_only(true);

        let result = store.set("phonebook", "[1]");
        assert!(matches!(result, Err(StorageError::Unavailable(_))));
        assert!(store.set_many(&[("a", "1")]).is_err());
        assert_eq!(store.get("phonebook").unwrap().as_deref(), Some("[]"));
        assert_eq!(store.write_count(), 1);
    }
}

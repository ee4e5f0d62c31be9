//! Record Store
//!
//! Owns the ordered entry collection and mirrors it to a durable key-value slot.
//! Every mutation re-serializes the whole collection and overwrites the slot;
//! the in-memory copy only changes once that write has succeeded.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use phonebook_storage::KeyValueStore;

use crate::entry::{Entry, EntryFields, EntryId, EntryPatch};
use crate::error::CoreError;
use crate::seed::seed_entries;
use crate::Result;

/// How identifiers are chosen for inserted entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdPolicy {
    /// `collection length + 1`. Reuses ids after a delete.
    #[default]
    Length,
    /// Counter persisted next to the collection; never reuses ids.
    Sequential,
}

pub trait RecordStore: Send + Sync {
    /// Load the collection, writing the seed set if nothing is stored yet
    fn hydrate(&self) -> Result<Vec<Entry>>;

    /// Snapshot of the in-memory collection
    fn entries(&self) -> Vec<Entry>;

    fn replace_all(&self, entries: Vec<Entry>) -> Result<()>;

    fn insert(&self, fields: EntryFields) -> Result<Entry>;

    fn update(&self, id: EntryId, patch: EntryPatch) -> Result<Entry>;

    /// Remove every entry with `id`, returning how many were removed
    fn delete(&self, id: EntryId) -> Result<usize>;
}

#[derive(Debug, Default)]
struct Collection {
    entries: Vec<Entry>,
    next_id: EntryId,
}

pub struct LocalRecordStore<K> {
    kv: K,
    key: String,
    id_policy: IdPolicy,
    collection: Arc<RwLock<Collection>>,
}

impl<K: KeyValueStore> LocalRecordStore<K> {
    pub fn new(kv: K, key: impl Into<String>, id_policy: IdPolicy) -> Self {
        Self {
            kv,
            key: key.into(),
            id_policy,
            collection: Arc::new(RwLock::new(Collection {
                entries: Vec::new(),
                next_id: 1,
            })),
        }
    }

    fn counter_key(&self) -> String {
        format!("{}.next_id", self.key)
    }

    /// Write the collection (and counter, when sequential) in one store call
    fn persist(&self, entries: &[Entry], next_id: EntryId) -> Result<()> {
        let json = serde_json::to_string(entries)?;

        let written = match self.id_policy {
            IdPolicy::Length => self.kv.set(&self.key, &json),
            IdPolicy::Sequential => {
                let counter_key = self.counter_key();
                let counter = next_id.to_string();
                self.kv.set_many(&[
                    (self.key.as_str(), json.as_str()),
                    (counter_key.as_str(), counter.as_str()),
                ])
            }
        };

        written.map_err(|e| {
            tracing::error!(key = %self.key, error = %e, "Failed to persist entries");
            CoreError::from(e)
        })
    }

    /// Apply `f` to a copy of the collection and commit it only if the write succeeds
    fn mutate<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Vec<Entry>, &mut EntryId) -> Result<T>,
    {
        let mut collection = self.collection.write();
        let mut entries = collection.entries.clone();
        let mut next_id = collection.next_id;

        let output = f(&mut entries, &mut next_id)?;
        self.persist(&entries, next_id)?;

        collection.entries = entries;
        collection.next_id = next_id;

        Ok(output)
    }

    /// Saturates at `EntryId::MAX`; stored ids are not range-checked on load
    fn next_id_after(entries: &[Entry]) -> EntryId {
        entries
            .iter()
            .map(|e| e.id)
            .max()
            .unwrap_or(0)
            .saturating_add(1)
    }
}

impl<K: KeyValueStore> RecordStore for LocalRecordStore<K> {
    fn hydrate(&self) -> Result<Vec<Entry>> {
        let mut collection = self.collection.write();

        let entries: Vec<Entry> = match self.kv.get(&self.key)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => {
                let seed = seed_entries();
                self.persist(&seed, Self::next_id_after(&seed))?;
                tracing::info!(key = %self.key, count = seed.len(), "Seeded phonebook");
                seed
            }
        };

        let next_id = match self.id_policy {
            IdPolicy::Length => entries.len() as EntryId + 1,
            IdPolicy::Sequential => {
                let stored = self
                    .kv
                    .get(&self.counter_key())?
                    .and_then(|raw| raw.trim().parse::<EntryId>().ok())
                    .unwrap_or(0);
                stored.max(Self::next_id_after(&entries))
            }
        };

        collection.entries = entries.clone();
        collection.next_id = next_id;

        tracing::info!(key = %self.key, count = entries.len(), "Hydrated phonebook");

        Ok(entries)
    }

    fn entries(&self) -> Vec<Entry> {
        self.collection.read().entries.clone()
    }

    fn replace_all(&self, replacement: Vec<Entry>) -> Result<()> {
        let policy = self.id_policy;
        self.mutate(|entries, next_id| {
            *entries = replacement;
            *next_id = match policy {
                IdPolicy::Length => entries.len() as EntryId + 1,
                IdPolicy::Sequential => (*next_id).max(Self::next_id_after(entries)),
            };
            Ok(())
        })
    }

    fn insert(&self, fields: EntryFields) -> Result<Entry> {
        let policy = self.id_policy;
        let entry = self.mutate(|entries, next_id| {
            let id = match policy {
                IdPolicy::Length => entries.len() as EntryId + 1,
                IdPolicy::Sequential => *next_id,
            };

            if entries.iter().any(|e| e.id == id) {
                if policy == IdPolicy::Sequential {
                    tracing::error!(entry_id = %id, "Sequential id counter exhausted");
                    return Err(CoreError::IdSpaceExhausted);
                }
                tracing::warn!(entry_id = %id, "Assigned id collides with an existing entry");
            }

            let entry = Entry::new(id, fields);
            entries.push(entry.clone());
            *next_id = match policy {
                IdPolicy::Length => entries.len() as EntryId + 1,
                IdPolicy::Sequential => id.saturating_add(1),
            };
            Ok(entry)
        })?;

        tracing::info!(entry_id = %entry.id, "Inserted entry");

        Ok(entry)
    }

    fn update(&self, id: EntryId, patch: EntryPatch) -> Result<Entry> {
        let entry = self.mutate(|entries, _| {
            let mut updated = None;
            for entry in entries.iter_mut().filter(|e| e.id == id) {
                entry.apply(&patch);
                updated.get_or_insert_with(|| entry.clone());
            }
            updated.ok_or(CoreError::EntryNotFound(id))
        })?;

        tracing::info!(entry_id = %id, "Updated entry");

        Ok(entry)
    }

    fn delete(&self, id: EntryId) -> Result<usize> {
        let policy = self.id_policy;
        let removed = self.mutate(|entries, next_id| {
            let before = entries.len();
            entries.retain(|e| e.id != id);
            let removed = before - entries.len();
            if removed == 0 {
                return Err(CoreError::EntryNotFound(id));
            }
            if policy == IdPolicy::Length {
                *next_id = entries.len() as EntryId + 1;
            }
            Ok(removed)
        })?;

        tracing::info!(entry_id = %id, removed, "Deleted entry");

        Ok(removed)
    }
}

impl<K: Clone> Clone for LocalRecordStore<K> {
    fn clone(&self) -> Self {
        Self {
            kv: self.kv.clone(),
            key: self.key.clone(),
            id_policy: self.id_policy,
            collection: Arc::clone(&self.collection),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonebook_storage::MemoryStore;

    fn stored(kv: &MemoryStore) -> Vec<Entry> {
        let raw = kv.get("phonebook").unwrap().unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    fn store(policy: IdPolicy) -> (MemoryStore, LocalRecordStore<MemoryStore>) {
        let kv = MemoryStore::new();
        let store = LocalRecordStore::new(kv.clone(), "phonebook", policy);
        store.hydrate().unwrap();
        (kv, store)
    }

    #[test]
    fn test_hydrate_seeds_empty_storage() {
        let kv = MemoryStore::new();
        let store = LocalRecordStore::new(kv.clone(), "phonebook", IdPolicy::Length);

        let entries = store.hydrate().unwrap();
        assert_eq!(entries.len(), 20);
        assert_eq!(
            entries[0],
            Entry::new(1, EntryFields::new("John", "Doe", "1234567890"))
        );
        assert_eq!(stored(&kv), entries);
    }

    #[test]
    fn test_hydrate_twice_writes_seed_once() {
        let kv = MemoryStore::new();
        let store = LocalRecordStore::new(kv.clone(), "phonebook", IdPolicy::Length);

        let first = store.hydrate().unwrap();
        let second = store.hydrate().unwrap();

        assert_eq!(first, second);
        assert_eq!(kv.write_count(), 1);
    }

    #[test]
    fn test_hydrate_accepts_unvalidated_data() {
        let kv = MemoryStore::new();
        kv.set(
            "phonebook",
            r#"[{"id":7,"name":"","surname":"X","phoneNumber":"12"}]"#,
        )
        .unwrap();
        let store = LocalRecordStore::new(kv, "phonebook", IdPolicy::Length);

        let entries = store.hydrate().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, 7);
        assert!(entries[0].name.is_empty());
    }

    #[test]
    fn test_hydrate_accepts_max_id_then_refuses_insert() {
        let kv = MemoryStore::new();
        kv.set(
            "phonebook",
            r#"[{"id":18446744073709551615,"name":"Max","surname":"Id","phoneNumber":"1234567890"}]"#,
        )
        .unwrap();
        let store = LocalRecordStore::new(kv.clone(), "phonebook", IdPolicy::Sequential);

        let entries = store.hydrate().unwrap();
        assert_eq!(entries[0].id, EntryId::MAX);

        let writes = kv.write_count();
        let result = store.insert(EntryFields::new("Zoe", "X", "1111111111"));
        assert!(matches!(result, Err(CoreError::IdSpaceExhausted)));
        assert_eq!(store.entries().len(), 1);
        assert_eq!(kv.write_count(), writes);
    }

    #[test]
    fn test_hydrate_rejects_malformed_json() {
        let kv = MemoryStore::new();
        kv.set("phonebook", "not json").unwrap();
        let store = LocalRecordStore::new(kv, "phonebook", IdPolicy::Length);

        assert!(matches!(store.hydrate(), Err(CoreError::Serialization(_))));
    }

    #[test]
    fn test_insert_appends_with_length_id() {
        let (kv, store) = store(IdPolicy::Length);

        let entry = store
            .insert(EntryFields::new("Zoe", "X", "1111111111"))
            .unwrap();

        assert_eq!(entry.id, 21);
        assert_eq!(stored(&kv).len(), 21);
        assert_eq!(store.entries().last(), Some(&entry));
    }

    #[test]
    fn test_update_unknown_id_writes_nothing() {
        let (kv, store) = store(IdPolicy::Length);
        let writes = kv.write_count();

        let result = store.update(99, EntryPatch::name("Nobody"));
        assert!(matches!(result, Err(CoreError::EntryNotFound(99))));
        assert_eq!(kv.write_count(), writes);
    }

    #[test]
    fn test_delete_unknown_id() {
        let (_kv, store) = store(IdPolicy::Length);
        assert!(matches!(store.delete(42), Err(CoreError::EntryNotFound(42))));
        assert_eq!(store.entries().len(), 20);
    }

    #[test]
    fn test_failed_write_leaves_memory_untouched() {
        let (kv, store) = store(IdPolicy::Length);
        kv.set_read_only(true);

        let result = store.insert(EntryFields::new("Zoe", "X", "1111111111"));
        assert!(matches!(result, Err(CoreError::Storage(_))));
        assert_eq!(store.entries().len(), 20);
        assert_eq!(stored(&kv), store.entries());
    }

    #[test]
    fn test_sequential_ids_are_not_reused() {
        let (kv, store) = store(IdPolicy::Sequential);

        store.delete(20).unwrap();
        let entry = store
            .insert(EntryFields::new("New", "Y", "2222222222"))
            .unwrap();

        assert_eq!(entry.id, 21);
        assert_eq!(kv.get("phonebook.next_id").unwrap().as_deref(), Some("22"));
    }

    #[test]
    fn test_sequential_counter_survives_reload() {
        let (kv, store) = store(IdPolicy::Sequential);
        store
            .insert(EntryFields::new("Zoe", "X", "1111111111"))
            .unwrap();
        store.delete(21).unwrap();

        let reloaded = LocalRecordStore::new(kv, "phonebook", IdPolicy::Sequential);
        reloaded.hydrate().unwrap();
        let entry = reloaded
            .insert(EntryFields::new("Amy", "Z", "3333333333"))
            .unwrap();

        assert_eq!(entry.id, 22);
    }

    #[test]
    fn test_replace_all() {
        let (kv, store) = store(IdPolicy::Length);
        let first_two: Vec<Entry> = store.entries().into_iter().take(2).collect();

        store.replace_all(first_two.clone()).unwrap();

        assert_eq!(store.entries(), first_two);
        assert_eq!(stored(&kv), first_two);
    }
}

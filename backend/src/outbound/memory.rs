//! In-process key-value store for tests and ephemeral sessions.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::ports::{KeyValueStore, KeyValueStoreError};

/// Key-value store held in memory; contents vanish with the value.
///
/// # Examples
///
/// ```
/// use satchel::domain::ports::KeyValueStore;
/// use satchel::outbound::InMemoryKeyValueStore;
///
/// let store = InMemoryKeyValueStore::default();
/// store.set("greeting", "\"hi\"").expect("set succeeds");
/// assert_eq!(store.get("greeting").expect("get succeeds").as_deref(), Some("\"hi\""));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl InMemoryKeyValueStore {
    /// Build a store pre-populated with `entries`.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: Mutex::new(
                entries
                    .into_iter()
                    .map(|(key, value)| (key.into(), value.into()))
                    .collect(),
            ),
        }
    }

    /// Keys currently held, in sorted order.
    pub fn keys(&self) -> Vec<String> {
        self.lock()
            .map(|entries| entries.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<String, String>>, KeyValueStoreError> {
        self.entries
            .lock()
            .map_err(|_| KeyValueStoreError::unavailable("in-memory store lock poisoned"))
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError> {
        self.lock()?.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), KeyValueStoreError> {
        self.lock()?.remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), KeyValueStoreError> {
        self.lock()?.clear();
        Ok(())
    }
}

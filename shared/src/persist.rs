use std::collections::BTreeMap;

use crate::constants::STORE_ID;
use crate::error::StoreError;
use crate::types::AccountState;

/// Save/restore binding of a store. The store calls `save` after every
/// mutation and `load` once when it is constructed.
pub trait Persist {
    fn load(&self) -> Option<AccountState>;
    fn save(&mut self, state: &AccountState) -> Result<(), StoreError>;
}

/// Host key/value storage, shaped after the browser `Storage` API.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove_item(&mut self, key: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Clone)]
pub struct PersistOptions {
    pub key: String,
}

impl Default for PersistOptions {
    fn default() -> Self {
        Self { key: STORE_ID.to_string() }
    }
}

/// Stores the whole state as one JSON entry under `options.key`.
#[derive(Debug, Clone)]
pub struct Persistence<S> {
    storage: S,
    options: PersistOptions,
}

impl<S: KeyValueStorage> Persistence<S> {
    pub fn new(storage: S) -> Self {
        Self::with_options(storage, PersistOptions::default())
    }

    pub fn with_options(storage: S, options: PersistOptions) -> Self {
        Self { storage, options }
    }

    pub fn key(&self) -> &str {
        &self.options.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Drop the persisted entry; the in-memory store is untouched.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.storage.remove_item(&self.options.key)
    }
}

impl<S: KeyValueStorage> Persist for Persistence<S> {
    fn load(&self) -> Option<AccountState> {
        let json = match self.storage.get_item(&self.options.key) {
            Ok(Some(json)) => json,
            Ok(None) => return None,
            Err(err) => {
                log::error!("load {}: {}", self.options.key, err);
                return None;
            }
        };
        match serde_json::from_str::<AccountState>(&json) {
            Ok(state) => Some(state),
            Err(err) => {
                log::warn!("load {}: ignoring unreadable state: {}", self.options.key, err);
                None
            }
        }
    }

    fn save(&mut self, state: &AccountState) -> Result<(), StoreError> {
        let json = serde_json::to_string(state)?;
        self.storage.set_item(&self.options.key, &json)
    }
}

/// In-memory storage for native hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: BTreeMap<String, String>,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following write fail, like a full quota.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Storage(format!("quota exceeded writing {key}")));
        }
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StoreError> {
        self.items.remove(key);
        Ok(())
    }
}

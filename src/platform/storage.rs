//! Key-value storage for settings
//!
//! The simulation never touches storage. Settings and the difficulty source
//! read through [`SettingsStore`] so the browser build can back it with
//! LocalStorage and tests with a plain map.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend unavailable")]
    Unavailable,

    #[error("storage rejected write for key {key}: {reason}")]
    WriteRejected { key: String, reason: String },

    #[error("could not encode value for key {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// String key-value capability
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store (native builds and tests)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Lets a menu and the running game share one store
impl<S: SettingsStore> SettingsStore for Rc<RefCell<S>> {
    fn get(&self, key: &str) -> Option<String> {
        self.borrow().get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.borrow_mut().set(key, value)
    }
}

/// Browser LocalStorage
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct LocalStore {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl LocalStore {
    pub fn open() -> Result<Self, StoreError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StoreError::Unavailable)?;
        Ok(Self { storage })
    }
}

#[cfg(target_arch = "wasm32")]
impl SettingsStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|err| StoreError::WriteRejected {
                key: key.to_string(),
                reason: format!("{err:?}"),
            })
    }
}

//! Selection persistence over a string key-value store.
//!
//! The browser provides `localStorage`; tests and pages without storage use
//! `MemoryStore`. Failures never reach the caller: a failed read is "nothing
//! persisted" and a failed write is "persistence skipped".

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::core::error::{Result, SiteError};
use crate::core::property::SelectedProperty;

/// A string-keyed string store.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value under `key`, bypassing the trait.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.raw(key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.insert_raw(key, value);
        Ok(())
    }
}

/// Loads and saves the selection list under one key.
#[derive(Debug)]
pub struct SelectionStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> SelectionStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Persist the list, logging and swallowing any failure.
    pub fn save(&mut self, selected: &[SelectedProperty]) {
        if let Err(e) = self.try_save(selected) {
            log::debug!("[cart] could not save selection: {e}");
        }
    }

    /// Read the persisted list; empty on absence or corruption.
    pub fn load(&self) -> Vec<SelectedProperty> {
        match self.try_load() {
            Ok(selected) => selected,
            Err(e) => {
                log::debug!("[cart] could not read selection: {e}");
                Vec::new()
            }
        }
    }

    fn try_save(&mut self, selected: &[SelectedProperty]) -> Result<()> {
        let raw = serde_json::to_string(selected)?;
        self.store.set_item(&self.key, &raw)
    }

    fn try_load(&self) -> Result<Vec<SelectedProperty>> {
        let Some(raw) = self.store.get_item(&self.key)? else {
            return Ok(Vec::new());
        };
        if raw.is_empty() {
            return Ok(Vec::new());
        }
        let value: serde_json::Value = serde_json::from_str(&raw)?;
        let serde_json::Value::Array(items) = value else {
            return Err(SiteError::Storage(format!(
                "value under '{}' is not a list",
                self.key
            )));
        };
        Ok(items
            .into_iter()
            .filter_map(|item| match serde_json::from_value(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    log::debug!("[cart] dropping malformed entry: {e}");
                    None
                }
            })
            .collect())
    }
}

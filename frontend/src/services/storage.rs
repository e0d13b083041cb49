//! Browser key-value storage.

use property_site::core::storage::{KeyValueStore, MemoryStore};
use property_site::core::{Result, SiteError};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// `window.localStorage`, or an in-memory map when the browser refuses it
/// (private mode, disabled storage, sandboxed iframe).
#[derive(Debug, Clone)]
pub enum BrowserStore {
    Local(Storage),
    Memory(MemoryStore),
}

impl BrowserStore {
    pub fn open() -> Self {
        let storage = web_sys::window().map(|w| w.local_storage());
        match storage {
            Some(Ok(Some(storage))) => BrowserStore::Local(storage),
            Some(Err(e)) => {
                log::debug!("[storage] localStorage unavailable: {}", js_error(&e));
                BrowserStore::Memory(MemoryStore::new())
            }
            _ => {
                log::debug!("[storage] no localStorage, selection lasts for this page only");
                BrowserStore::Memory(MemoryStore::new())
            }
        }
    }

    pub fn is_persistent(&self) -> bool {
        matches!(self, BrowserStore::Local(_))
    }
}

impl KeyValueStore for BrowserStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        match self {
            BrowserStore::Local(storage) => storage
                .get_item(key)
                .map_err(|e| SiteError::Storage(js_error(&e))),
            BrowserStore::Memory(store) => store.get_item(key),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        match self {
            BrowserStore::Local(storage) => storage
                .set_item(key, value)
                .map_err(|e| SiteError::Storage(js_error(&e))),
            BrowserStore::Memory(store) => store.set_item(key, value),
        }
    }
}

pub(crate) fn js_error(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}

//! `localStorage` behind the core's key-value port.

use diadanh_core::persistence::{KeyValueStore, MemoryStore};
use diadanh_core::{GazetteerError, Result};
use wasm_bindgen::JsValue;

/// Browser storage, or an in-memory map when `localStorage` is unavailable
/// (private mode, sandboxed iframes, workers).
pub enum BrowserStore {
    Local(web_sys::Storage),
    Memory(MemoryStore),
}

impl BrowserStore {
    pub fn detect() -> Self {
        match web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            Some(storage) => BrowserStore::Local(storage),
            None => {
                web_sys::console::warn_1(&"localStorage unavailable; history will not persist".into());
                BrowserStore::Memory(MemoryStore::new())
            }
        }
    }
}

fn js_err(op: &str, key: &str, e: JsValue) -> GazetteerError {
    let msg = e.as_string().unwrap_or_else(|| format!("{e:?}"));
    GazetteerError::Io(std::io::Error::other(format!("localStorage {op} '{key}': {msg}")))
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            BrowserStore::Local(s) => s.get_item(key).ok().flatten(),
            BrowserStore::Memory(m) => m.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match self {
            // Quota errors end up here.
            BrowserStore::Local(s) => s.set_item(key, value).map_err(|e| js_err("set", key, e)),
            BrowserStore::Memory(m) => m.set(key, value),
        }
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        match self {
            BrowserStore::Local(s) => s.remove_item(key).map_err(|e| js_err("remove", key, e)),
            BrowserStore::Memory(m) => m.remove(key),
        }
    }
}

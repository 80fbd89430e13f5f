// crates/diadanh-core/src/persistence/mod.rs

//! # Persistence
//!
//! History and favorites live behind a small key-value port so the core
//! never touches ambient global storage. The CLI uses [`FileStore`], tests
//! use [`MemoryStore`], and the WASM bindings plug in `localStorage`.
//!
//! Stored values are JSON. A missing or unreadable value degrades to an
//! empty list; it is never an error.

mod favorites;
mod history;
mod store;

pub use favorites::{favorite_key, Favorite, Favorites, FAVORITES_CAPACITY};
pub use history::{should_record_history, History, HISTORY_CAPACITY};
pub use store::{FileStore, MemoryStore};

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const HISTORY_KEY: &str = "diadanh_history";
pub const FAVORITES_KEY: &str = "diadanh_favorites";

/// Minimal string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// Reads and decodes `key`, falling back to `T::default()` on any problem.
pub(crate) fn load_json_or_default<T, S>(store: &S, key: &str) -> T
where
    T: DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key) else {
        return T::default();
    };
    match serde_json::from_str(&raw) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("discarding unreadable '{key}' state: {e}");
            T::default()
        }
    }
}

pub(crate) fn save_json<T, S>(store: &mut S, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

// crates/diadanh-core/src/persistence/history.rs
use super::{load_json_or_default, save_json, KeyValueStore, HISTORY_KEY};
use crate::error::Result;
use crate::model::PlaceRecord;
use crate::text::char_len;
use crate::traits::GazetteerBackend;
use serde::{Deserialize, Serialize};

pub const HISTORY_CAPACITY: usize = 10;

/// Whether a finished search is worth remembering.
///
/// True when the text is longer than one character, the search found
/// something, and every hit names a ward (new or old, ignoring whitespace).
/// Queries that only matched on district or province names are not kept.
pub fn should_record_history<B: GazetteerBackend>(text: &str, results: &[&PlaceRecord<B>]) -> bool {
    char_len(text) > 1 && !results.is_empty() && results.iter().all(|r| r.has_ward_name())
}

/// Accepted query strings, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the stored history; anything unreadable yields an empty one.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let mut history: Self = load_json_or_default(store, HISTORY_KEY);
        history.entries.truncate(HISTORY_CAPACITY);
        history
    }

    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<()> {
        save_json(store, HISTORY_KEY, self)
    }

    /// Moves `query` to the front, dropping an exact duplicate and anything
    /// past capacity.
    pub fn record(&mut self, query: &str) {
        self.entries.retain(|q| q != query);
        self.entries.insert(0, query.to_string());
        self.entries.truncate(HISTORY_CAPACITY);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

// crates/diadanh-core/src/persistence/favorites.rs
use super::{load_json_or_default, save_json, KeyValueStore, FAVORITES_KEY};
use crate::error::Result;
use crate::model::PlaceRecord;
use crate::traits::GazetteerBackend;
use serde::{Deserialize, Serialize};

pub const FAVORITES_CAPACITY: usize = 100;

/// Identity of a record in the favorites list.
///
/// `"<ward new>|<province new>"` when both names are present. Otherwise the
/// post-reform ward code is used (`"#<code>"`, old code as second choice),
/// and as a last resort the name pair built from whichever generation is
/// present. Valid records always reach one of these.
///
/// ```rust
/// use diadanh_core::persistence::favorite_key;
/// use diadanh_core::model::convert::record_from_raw;
/// use diadanh_core::raw::PlaceRaw;
/// use diadanh_core::DefaultBackend;
///
/// let rec = record_from_raw::<DefaultBackend>(PlaceRaw {
///     province_new: Some("Hà Nội".into()),
///     district_old: Some("Đống Đa".into()),
///     ward_new: Some("Phường Láng".into()),
///     ..Default::default()
/// });
/// assert_eq!(favorite_key(&rec), "Phường Láng|Hà Nội");
/// ```
pub fn favorite_key<B: GazetteerBackend>(record: &PlaceRecord<B>) -> String {
    if let (Some(ward), Some(province)) = (record.ward_new(), record.province_new()) {
        return format!("{ward}|{province}");
    }
    if let Some(code) = record.ward_code_new().or_else(|| record.ward_code_old()) {
        return format!("#{code}");
    }
    format!(
        "{}|{}",
        record.ward().unwrap_or(""),
        record.province().unwrap_or("")
    )
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Favorite<B: GazetteerBackend> {
    pub key: String,
    pub record: PlaceRecord<B>,
}

/// Starred records, most recent first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent, bound = "")]
pub struct Favorites<B: GazetteerBackend> {
    entries: Vec<Favorite<B>>,
}

impl<B: GazetteerBackend> Default for Favorites<B> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<B: GazetteerBackend> Favorites<B> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the stored list; anything unreadable yields an empty one.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let mut favorites: Self = load_json_or_default(store, FAVORITES_KEY);
        favorites.entries.truncate(FAVORITES_CAPACITY);
        favorites
    }

    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<()> {
        save_json(store, FAVORITES_KEY, self)
    }

    pub fn contains(&self, record: &PlaceRecord<B>) -> bool {
        let key = favorite_key(record);
        self.entries.iter().any(|f| f.key == key)
    }

    /// Adds `record` at the front, or removes it if its key is present.
    /// Returns `true` when the record is a favorite afterwards.
    pub fn toggle(&mut self, record: &PlaceRecord<B>) -> bool {
        let key = favorite_key(record);
        if let Some(pos) = self.entries.iter().position(|f| f.key == key) {
            self.entries.remove(pos);
            return false;
        }
        self.entries.insert(
            0,
            Favorite {
                key,
                record: record.clone(),
            },
        );
        self.entries.truncate(FAVORITES_CAPACITY);
        true
    }

    /// Removes the entry stored under `key`, if any.
    pub fn remove_key(&mut self, key: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|f| f.key != key);
        self.entries.len() != before
    }

    pub fn entries(&self) -> &[Favorite<B>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::DefaultBackend;
    use crate::model::convert::record_from_raw;
    use crate::persistence::MemoryStore;
    use crate::raw::PlaceRaw;

    fn rec(ward: &str) -> PlaceRecord<DefaultBackend> {
        record_from_raw(PlaceRaw {
            province_new: Some("Hà Nội".into()),
            district_old: Some("Đống Đa".into()),
            ward_new: Some(ward.into()),
            ..Default::default()
        })
    }

    #[test]
    fn toggle_twice_restores_membership() {
        let mut favs = Favorites::new();
        let r = rec("Phường Láng");
        assert!(!favs.contains(&r));
        assert!(favs.toggle(&r));
        assert!(favs.contains(&r));
        assert!(!favs.toggle(&r));
        assert!(!favs.contains(&r));
        assert!(favs.is_empty());
    }

    #[test]
    fn newest_first_and_capped() {
        let mut favs = Favorites::new();
        for i in 0..(FAVORITES_CAPACITY + 5) {
            favs.toggle(&rec(&format!("Phường {i}")));
        }
        assert_eq!(favs.len(), FAVORITES_CAPACITY);
        assert_eq!(favs.entries()[0].key, format!("Phường {}|Hà Nội", FAVORITES_CAPACITY + 4));
    }

    #[test]
    fn key_falls_back_to_codes_then_any_names() {
        let coded = record_from_raw::<DefaultBackend>(PlaceRaw {
            province_old: Some("Hà Tây".into()),
            district_old: Some("Hà Đông".into()),
            ward_new: Some("Phường Văn Khê".into()),
            ward_code_old: Some("09556".into()),
            ..Default::default()
        });
        assert_eq!(favorite_key(&coded), "#09556");

        let uncoded = record_from_raw::<DefaultBackend>(PlaceRaw {
            province_old: Some("Hà Tây".into()),
            district_old: Some("Hà Đông".into()),
            ward_old: Some("Xã Văn Khê".into()),
            ..Default::default()
        });
        assert_eq!(favorite_key(&uncoded), "Xã Văn Khê|Hà Tây");
    }

    #[test]
    fn serializes_as_a_bare_array_of_entries() {
        let mut favs = Favorites::new();
        favs.toggle(&rec("Phường Láng"));

        let json = serde_json::to_value(&favs).unwrap();
        assert_eq!(json[0]["key"], "Phường Láng|Hà Nội");
        assert_eq!(json.as_array().map(Vec::len), Some(1));

        let back: Favorites<DefaultBackend> = serde_json::from_value(json).unwrap();
        assert_eq!(back.entries()[0].record.ward_new(), Some("Phường Láng"));
    }

    #[test]
    fn persists_through_store() {
        let mut store = MemoryStore::new();
        let mut favs = Favorites::new();
        favs.toggle(&rec("Phường Láng"));
        favs.save(&mut store).unwrap();

        let mut back: Favorites<DefaultBackend> = Favorites::load(&store);
        assert_eq!(back, favs);
        assert!(back.remove_key("Phường Láng|Hà Nội"));
        assert!(!back.remove_key("Phường Láng|Hà Nội"));
        assert!(back.is_empty());

        store.set(FAVORITES_KEY, "[{\"key\": 1}]").unwrap();
        assert!(Favorites::<DefaultBackend>::load(&store).is_empty());
    }
}

// crates/diadanh-core/src/traits.rs
use crate::common::GazetteerStats;
use crate::model::{PlaceRecord, SearchQuery};
use crate::tree::HierarchyTree;
use serde::{Deserialize, Serialize};

/// Storage backend for strings held by the gazetteer.
///
/// This abstraction lets the crate swap how textual data is stored internally
/// (for example an interned or small-string type) without changing the public
/// accessors, which always hand out `&str` views.
///
/// Implementors must be `Clone + Send + Sync + 'static` and, like the
/// associated string type, serializable, so a validated dataset can be cached
/// via bincode and favorites can be stored as JSON.
pub trait GazetteerBackend:
    Clone + Send + Sync + std::fmt::Debug + PartialEq + Serialize + for<'de> Deserialize<'de> + 'static
{
    type Str: Clone
        + Send
        + Sync
        + std::fmt::Debug
        + PartialEq
        + Serialize
        + for<'de> Deserialize<'de>
        + AsRef<str>;

    fn str_from(s: &str) -> Self::Str;

    #[inline]
    fn str_to_string(v: &Self::Str) -> String {
        v.as_ref().to_string()
    }
}

/// The derivations available over a loaded dataset.
///
/// Every method is a pure function of the dataset and its arguments; nothing
/// is cached between calls except the province list, which is derived once at
/// construction.
pub trait GazetteerSearch<B: GazetteerBackend> {
    fn stats(&self) -> GazetteerStats;

    /// The full, validated dataset in load order.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use diadanh_core::{DefaultGazetteer, GazetteerSearch};
    ///
    /// let db = DefaultGazetteer::load().unwrap();
    /// for record in db.records().iter().take(5) {
    ///     println!("{} ({})", record.ward_new().unwrap_or("-"), record.province_new().unwrap_or("-"));
    /// }
    /// ```
    fn records(&self) -> &[PlaceRecord<B>];

    /// Distinct post-reform province names, sorted.
    fn provinces(&self) -> &[B::Str];

    /// Records matching `query`, in dataset order.
    ///
    /// The province filter is an exact, case-sensitive comparison on the
    /// post-reform province name. Text shorter than two characters does not
    /// narrow the result.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use diadanh_core::{DefaultGazetteer, GazetteerSearch, SearchQuery};
    ///
    /// let db = DefaultGazetteer::load().unwrap();
    /// let hits = db.search(&SearchQuery::new("o cho dua").with_province("Hà Nội"));
    /// println!("{} matches", hits.len());
    /// ```
    fn search(&self, query: &SearchQuery) -> Vec<&PlaceRecord<B>>;

    /// Up to eight distinct post-reform ward names for the autocomplete list.
    fn suggest(&self, text: &str) -> Vec<&str>;

    /// Province → district → wards projection for tree display.
    fn tree(&self) -> HierarchyTree<'_>;

    /// First record addressed by a tree leaf.
    fn find_record(&self, province: &str, district: &str, ward: &str) -> Option<&PlaceRecord<B>>;
}

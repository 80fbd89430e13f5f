// crates/diadanh-core/src/model/place.rs
use crate::traits::GazetteerBackend;
use serde::{Deserialize, Serialize};

/// The in-memory gazetteer: the validated dataset plus its province list.
///
/// Built once at load time and never mutated afterwards. Every view
/// (search results, suggestions, tree) borrows from it.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Gazetteer<B: GazetteerBackend> {
    /// Valid records in source order.
    pub records: Vec<PlaceRecord<B>>,
    /// Distinct post-reform province names, sorted.
    pub provinces: Vec<B::Str>,
}

/// One ward/commune entry with its pre-reform ("old") and post-reform
/// ("new") naming.
///
/// Empty strings from the source are stored as `None`. Whitespace-only
/// values are kept as they are.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct PlaceRecord<B: GazetteerBackend> {
    pub province_new: Option<B::Str>,
    pub province_old: Option<B::Str>,
    pub district_old: Option<B::Str>,
    pub district_new: Option<B::Str>,
    pub ward_new: Option<B::Str>,
    pub ward_old: Option<B::Str>,

    // Display-only identifiers, never matched against.
    pub ward_code_new: Option<B::Str>,
    pub ward_code_old: Option<B::Str>,
    pub district_code_old: Option<B::Str>,
}

#[inline]
fn view<S: AsRef<str>>(v: &Option<S>) -> Option<&str> {
    v.as_ref().map(|s| s.as_ref())
}

impl<B: GazetteerBackend> PlaceRecord<B> {
    pub fn province_new(&self) -> Option<&str> {
        view(&self.province_new)
    }

    pub fn province_old(&self) -> Option<&str> {
        view(&self.province_old)
    }

    pub fn district_old(&self) -> Option<&str> {
        view(&self.district_old)
    }

    pub fn district_new(&self) -> Option<&str> {
        view(&self.district_new)
    }

    pub fn ward_new(&self) -> Option<&str> {
        view(&self.ward_new)
    }

    pub fn ward_old(&self) -> Option<&str> {
        view(&self.ward_old)
    }

    pub fn ward_code_new(&self) -> Option<&str> {
        view(&self.ward_code_new)
    }

    pub fn ward_code_old(&self) -> Option<&str> {
        view(&self.ward_code_old)
    }

    pub fn district_code_old(&self) -> Option<&str> {
        view(&self.district_code_old)
    }

    /// District shown on the "new" side of a record.
    ///
    /// The pre-reform district is usually still the operative unit, so it
    /// wins over the post-reform name when both exist.
    pub fn district(&self) -> Option<&str> {
        self.district_old().or_else(|| self.district_new())
    }

    /// Province name, preferring the post-reform one.
    pub fn province(&self) -> Option<&str> {
        self.province_new().or_else(|| self.province_old())
    }

    /// Ward name, preferring the post-reform one.
    pub fn ward(&self) -> Option<&str> {
        self.ward_new().or_else(|| self.ward_old())
    }

    /// A record is valid iff it names a province, a district and a ward,
    /// in either naming generation.
    pub fn is_valid(&self) -> bool {
        self.province().is_some() && self.district().is_some() && self.ward().is_some()
    }

    /// The six text fields free-text search runs over, absent values as `""`.
    ///
    /// Order: ward new, ward old, district (old with new fallback),
    /// district old, province new, province old.
    pub fn search_fields(&self) -> [&str; 6] {
        [
            self.ward_new().unwrap_or(""),
            self.ward_old().unwrap_or(""),
            self.district().unwrap_or(""),
            self.district_old().unwrap_or(""),
            self.province_new().unwrap_or(""),
            self.province_old().unwrap_or(""),
        ]
    }

    /// The two fields autocomplete runs over.
    pub fn ward_fields(&self) -> [&str; 2] {
        [self.ward_new().unwrap_or(""), self.ward_old().unwrap_or("")]
    }

    /// `true` if either ward name has non-whitespace content.
    pub fn has_ward_name(&self) -> bool {
        self.ward_fields().iter().any(|w| !w.trim().is_empty())
    }

    /// `true` when the pre-reform side carries anything worth displaying.
    pub fn has_old_info(&self) -> bool {
        self.ward_old().is_some()
            || self.district_old().is_some()
            || self.province_old().is_some()
            || self.ward_code_old().is_some()
            || self.district_code_old().is_some()
    }
}

/// The user's current query. Replaced wholesale on every change.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub text: String,
    /// Exact post-reform province name. `None` and `Some("")` both mean
    /// "all provinces".
    pub province: Option<String>,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            province: None,
        }
    }

    pub fn with_province(mut self, province: impl Into<String>) -> Self {
        self.province = Some(province.into());
        self
    }

    /// The active province filter, if any.
    pub fn province_filter(&self) -> Option<&str> {
        self.province.as_deref().filter(|p| !p.is_empty())
    }
}

impl<B: GazetteerBackend> Gazetteer<B> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

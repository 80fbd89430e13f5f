// crates/diadanh-core/src/suggest.rs

//! # Autocomplete Suggester

use crate::model::PlaceRecord;
use crate::text::{char_len, FoldedQuery};
use crate::traits::GazetteerBackend;

/// Maximum number of records considered for suggestions.
pub const MAX_SUGGESTIONS: usize = 8;

/// Queries shorter than this many characters produce no suggestions.
///
/// One character is enough here even though the search table needs two:
/// the list starts helping before the table starts narrowing.
pub const MIN_SUGGEST_CHARS: usize = 1;

/// Post-reform ward names for the autocomplete list.
///
/// Only the two ward-name fields are matched (same with/without-accent rule
/// as the search engine). The first [`MAX_SUGGESTIONS`] matching records are
/// taken in dataset order, then mapped to their post-reform ward name. Records
/// without one are skipped and repeated names collapse to their first
/// occurrence, so the result can be shorter than the cap.
pub fn suggest<'a, B: GazetteerBackend>(records: &'a [PlaceRecord<B>], text: &str) -> Vec<&'a str> {
    if char_len(text) < MIN_SUGGEST_CHARS {
        return Vec::new();
    }
    let matcher = FoldedQuery::new(text);

    let mut out: Vec<&'a str> = Vec::with_capacity(MAX_SUGGESTIONS);
    for ward in records
        .iter()
        .filter(|r| matcher.matches_any(r.ward_fields()))
        .take(MAX_SUGGESTIONS)
        .filter_map(|r| r.ward_new())
    {
        if !out.contains(&ward) {
            out.push(ward);
        }
    }
    out
}

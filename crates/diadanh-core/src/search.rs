// crates/diadanh-core/src/search.rs

//! # Search/Filter Engine
//!
//! Plain linear scans over the dataset. Each query is evaluated from
//! scratch in O(records × fields); there is no incremental index. That is
//! comfortable at gazetteer scale (tens of thousands of wards) and is the
//! first thing to revisit for a much larger dataset.

use crate::common::GazetteerStats;
use crate::model::{Gazetteer, PlaceRecord, SearchQuery};
use crate::suggest;
use crate::text::{char_len, FoldedQuery};
use crate::traits::{GazetteerBackend, GazetteerSearch};
use crate::tree::{self, HierarchyTree};

/// Queries shorter than this many characters do not narrow results.
pub const MIN_QUERY_CHARS: usize = 2;

/// Filters `records` by `query`, preserving order.
///
/// 1. A non-empty province filter keeps records whose post-reform province
///    equals it exactly.
/// 2. Text of two or more characters keeps records where any of the six
///    [`PlaceRecord::search_fields`] contains it, with or without accents.
pub fn filter_records<'a, B: GazetteerBackend>(
    records: &'a [PlaceRecord<B>],
    query: &SearchQuery,
) -> Vec<&'a PlaceRecord<B>> {
    let province = query.province_filter();
    let matcher = (char_len(&query.text) >= MIN_QUERY_CHARS).then(|| FoldedQuery::new(&query.text));

    records
        .iter()
        .filter(|r| province.map_or(true, |p| r.province_new() == Some(p)))
        .filter(|r| {
            matcher
                .as_ref()
                .map_or(true, |m| m.matches_any(r.search_fields()))
        })
        .collect()
}

impl<B: GazetteerBackend> GazetteerSearch<B> for Gazetteer<B> {
    fn stats(&self) -> GazetteerStats {
        let tree = self.tree();
        GazetteerStats {
            records: self.records.len(),
            provinces: tree.province_count(),
            districts: tree.district_count(),
            wards: tree.leaf_count(),
        }
    }

    fn records(&self) -> &[PlaceRecord<B>] {
        &self.records
    }

    fn provinces(&self) -> &[B::Str] {
        &self.provinces
    }

    fn search(&self, query: &SearchQuery) -> Vec<&PlaceRecord<B>> {
        filter_records(&self.records, query)
    }

    fn suggest(&self, text: &str) -> Vec<&str> {
        suggest::suggest(&self.records, text)
    }

    fn tree(&self) -> HierarchyTree<'_> {
        tree::build_tree(&self.records)
    }

    fn find_record(&self, province: &str, district: &str, ward: &str) -> Option<&PlaceRecord<B>> {
        self.records.iter().find(|r| {
            r.province_new() == Some(province)
                && r.district_old() == Some(district)
                && r.ward_new() == Some(ward)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{convert, DefaultGazetteer};
    use crate::raw::PlaceRaw;

    fn row(province: &str, district: &str, ward_new: &str, ward_old: &str) -> PlaceRaw {
        PlaceRaw {
            province_new: Some(province.into()),
            district_old: Some(district.into()),
            ward_new: Some(ward_new.into()),
            ward_old: Some(ward_old.into()),
            ..Default::default()
        }
    }

    fn sample() -> DefaultGazetteer {
        convert::from_raw(vec![
            row("Hà Nội", "Đống Đa", "Phường Ô Chợ Dừa", "Xã Ô Chợ Dừa"),
            row("Hà Nội", "Đống Đa", "Phường Láng", "Phường Láng Hạ"),
            row("Đà Nẵng", "Hải Châu", "Phường Hải Châu", "Phường Hải Châu 1"),
            PlaceRaw {
                province_old: Some("Thừa Thiên Huế".into()),
                province_new: Some("Huế".into()),
                district_new: Some("Phú Vang".into()),
                ward_old: Some("Xã Phú Thuận".into()),
                ..Default::default()
            },
        ])
    }

    fn wards(hits: &[&PlaceRecord<crate::DefaultBackend>]) -> Vec<String> {
        hits.iter().map(|r| r.ward().unwrap_or("").to_string()).collect()
    }

    #[test]
    fn unaccented_query_matches_ward_new() {
        let db = sample();
        let hits = db.search(&SearchQuery::new("o cho dua"));
        assert_eq!(wards(&hits), vec!["Phường Ô Chợ Dừa"]);
    }

    #[test]
    fn accented_query_matches_case_insensitively() {
        let db = sample();
        let hits = db.search(&SearchQuery::new("LÁNG"));
        assert_eq!(wards(&hits), vec!["Phường Láng"]);
    }

    #[test]
    fn old_names_are_searchable() {
        let db = sample();
        assert_eq!(wards(&db.search(&SearchQuery::new("lang ha"))), vec!["Phường Láng"]);
        assert_eq!(wards(&db.search(&SearchQuery::new("thua thien"))), vec!["Xã Phú Thuận"]);
        // district_new is only reached through the district fallback
        assert_eq!(wards(&db.search(&SearchQuery::new("phu vang"))), vec!["Xã Phú Thuận"]);
    }

    #[test]
    fn short_text_only_applies_province_filter() {
        let db = sample();
        assert_eq!(db.search(&SearchQuery::new("")).len(), 4);
        assert_eq!(db.search(&SearchQuery::new("x")).len(), 4);
        assert_eq!(db.search(&SearchQuery::new("Đ")).len(), 4);
        assert_eq!(db.search(&SearchQuery::new("x").with_province("Hà Nội")).len(), 2);
    }

    #[test]
    fn empty_query_returns_dataset_in_order() {
        let db = sample();
        let hits = db.search(&SearchQuery::new("").with_province(""));
        let all: Vec<&PlaceRecord<_>> = db.records().iter().collect();
        assert_eq!(hits, all);
    }

    #[test]
    fn province_filter_is_exact_and_case_sensitive() {
        let db = sample();
        assert_eq!(db.search(&SearchQuery::new("").with_province("Hà Nội")).len(), 2);
        assert!(db.search(&SearchQuery::new("").with_province("Hà nội")).is_empty());
        assert!(db.search(&SearchQuery::new("").with_province("Ha Noi")).is_empty());
    }

    #[test]
    fn province_filter_combines_with_text() {
        let db = sample();
        let q = SearchQuery::new("phuong").with_province("Đà Nẵng");
        assert_eq!(wards(&db.search(&q)), vec!["Phường Hải Châu"]);
    }

    #[test]
    fn longer_queries_never_grow_the_result() {
        let db = sample();
        let text = "phuong lang";
        let mut prev = usize::MAX;
        for end in text.char_indices().map(|(i, c)| i + c.len_utf8()) {
            let n = db.search(&SearchQuery::new(&text[..end])).len();
            assert!(n <= prev, "{:?} grew the result", &text[..end]);
            prev = n;
        }
    }

    #[test]
    fn find_record_uses_tree_coordinates() {
        let db = sample();
        let rec = db.find_record("Hà Nội", "Đống Đa", "Phường Láng").unwrap();
        assert_eq!(rec.ward_old(), Some("Phường Láng Hạ"));
        assert!(db.find_record("Huế", "Phú Vang", "Xã Phú Thuận").is_none());
    }

    #[test]
    fn stats_count_the_tree_projection() {
        let db = sample();
        let stats = db.stats();
        assert_eq!(stats.records, 4);
        assert_eq!(stats.provinces, 2);
        assert_eq!(stats.districts, 2);
        assert_eq!(stats.wards, 3);
    }
}

// crates/diadanh-core/src/tree.rs

//! # Hierarchy Builder
//!
//! Province → district → wards, borrowed from the dataset.

use crate::model::PlaceRecord;
use crate::traits::GazetteerBackend;
use serde::Serialize;
use std::collections::BTreeMap;

pub type DistrictMap<'a> = BTreeMap<&'a str, Vec<&'a str>>;

/// Three-level grouping of the dataset for tree display.
///
/// Provinces and districts iterate in code-point order. Ward lists keep
/// dataset order and keep duplicates; use [`HierarchyTree::sorted_wards`]
/// for display ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HierarchyTree<'a> {
    provinces: BTreeMap<&'a str, DistrictMap<'a>>,
}

/// Builds the tree in one pass.
///
/// Only records with a post-reform province, a pre-reform district and a
/// post-reform ward take part. This is narrower than the dataset validity
/// rule on purpose: records outside it stay searchable but have no tree
/// position.
pub fn build_tree<B: GazetteerBackend>(records: &[PlaceRecord<B>]) -> HierarchyTree<'_> {
    let mut tree = HierarchyTree::default();
    for r in records {
        if let (Some(province), Some(district), Some(ward)) =
            (r.province_new(), r.district_old(), r.ward_new())
        {
            tree.provinces
                .entry(province)
                .or_default()
                .entry(district)
                .or_default()
                .push(ward);
        }
    }
    tree
}

impl<'a> HierarchyTree<'a> {
    pub fn is_empty(&self) -> bool {
        self.provinces.is_empty()
    }

    pub fn provinces(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.provinces.keys().copied()
    }

    /// Districts of `province`, empty when it is not in the tree.
    pub fn districts(&self, province: &str) -> Vec<&'a str> {
        self.provinces
            .get(province)
            .map(|d| d.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Wards in dataset order, duplicates kept.
    pub fn wards(&self, province: &str, district: &str) -> &[&'a str] {
        self.provinces
            .get(province)
            .and_then(|d| d.get(district))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Wards sorted for display.
    pub fn sorted_wards(&self, province: &str, district: &str) -> Vec<&'a str> {
        let mut wards = self.wards(province, district).to_vec();
        wards.sort_unstable();
        wards
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &DistrictMap<'a>)> + '_ {
        self.provinces.iter().map(|(p, d)| (*p, d))
    }

    pub fn province_count(&self) -> usize {
        self.provinces.len()
    }

    /// Number of (province, district) pairs.
    pub fn district_count(&self) -> usize {
        self.provinces.values().map(BTreeMap::len).sum()
    }

    /// Total ward entries; equals the number of records that qualified.
    pub fn leaf_count(&self) -> usize {
        self.provinces
            .values()
            .flat_map(BTreeMap::values)
            .map(Vec::len)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::DefaultBackend;
    use crate::model::convert::record_from_raw;
    use crate::raw::PlaceRaw;

    fn rec(p: Option<&str>, d_old: Option<&str>, w_new: Option<&str>) -> PlaceRecord<DefaultBackend> {
        record_from_raw(PlaceRaw {
            province_new: p.map(Into::into),
            province_old: Some("Tỉnh cũ".into()),
            district_old: d_old.map(Into::into),
            district_new: Some("Huyện mới".into()),
            ward_new: w_new.map(Into::into),
            ward_old: Some("Xã cũ".into()),
            ..Default::default()
        })
    }

    #[test]
    fn groups_in_one_pass_keeping_ward_order_and_duplicates() {
        let records = vec![
            rec(Some("Hà Nội"), Some("Đống Đa"), Some("Phường Láng")),
            rec(Some("Hà Nội"), Some("Đống Đa"), Some("Phường Kim Liên")),
            rec(Some("Hà Nội"), Some("Đống Đa"), Some("Phường Láng")),
            rec(Some("Hà Nội"), Some("Ba Đình"), Some("Phường Ngọc Hà")),
        ];
        let tree = build_tree(&records);
        assert_eq!(tree.provinces().collect::<Vec<_>>(), vec!["Hà Nội"]);
        assert_eq!(tree.districts("Hà Nội"), vec!["Ba Đình", "Đống Đa"]);
        assert_eq!(
            tree.wards("Hà Nội", "Đống Đa"),
            &["Phường Láng", "Phường Kim Liên", "Phường Láng"]
        );
        assert_eq!(
            tree.sorted_wards("Hà Nội", "Đống Đa"),
            vec!["Phường Kim Liên", "Phường Láng", "Phường Láng"]
        );
    }

    #[test]
    fn needs_all_three_specific_fields() {
        let records = vec![
            rec(Some("Hà Nội"), Some("Đống Đa"), Some("Phường Láng")),
            rec(None, Some("Đống Đa"), Some("Phường Láng")),
            rec(Some("Hà Nội"), None, Some("Phường Láng")),
            rec(Some("Hà Nội"), Some("Đống Đa"), None),
        ];
        let tree = build_tree(&records);
        assert_eq!(tree.leaf_count(), 1);
        assert_eq!(tree.district_count(), 1);
        assert!(tree.wards("Tỉnh cũ", "Huyện mới").is_empty());
    }

    #[test]
    fn unknown_keys_are_empty() {
        let tree = build_tree::<DefaultBackend>(&[]);
        assert!(tree.is_empty());
        assert!(tree.districts("Hà Nội").is_empty());
        assert!(tree.wards("Hà Nội", "Đống Đa").is_empty());
    }

    #[test]
    fn serializes_as_nested_maps() {
        let records = vec![rec(Some("Huế"), Some("Phú Vang"), Some("Xã Phú Thuận"))];
        let json = serde_json::to_string(&build_tree(&records)).unwrap();
        assert_eq!(json, r#"{"Huế":{"Phú Vang":["Xã Phú Thuận"]}}"#);
    }
}

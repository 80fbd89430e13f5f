// crates/diadanh-core/src/model/convert.rs
use super::place::{Gazetteer, PlaceRecord};
use crate::raw::PlaceRaw;
use crate::traits::GazetteerBackend;
use std::collections::BTreeSet;

fn non_empty<B: GazetteerBackend>(s: Option<String>) -> Option<B::Str> {
    s.filter(|v| !v.is_empty()).map(|v| B::str_from(&v))
}

/// Raw row -> record. Empty strings become `None`.
pub fn record_from_raw<B: GazetteerBackend>(raw: PlaceRaw) -> PlaceRecord<B> {
    PlaceRecord {
        province_new: non_empty::<B>(raw.province_new),
        province_old: non_empty::<B>(raw.province_old),
        district_old: non_empty::<B>(raw.district_old),
        district_new: non_empty::<B>(raw.district_new),
        ward_new: non_empty::<B>(raw.ward_new),
        ward_old: non_empty::<B>(raw.ward_old),
        ward_code_new: non_empty::<B>(raw.ward_code_new),
        ward_code_old: non_empty::<B>(raw.ward_code_old),
        district_code_old: non_empty::<B>(raw.district_code_old),
    }
}

/// Distinct post-reform province names, sorted. Records without one are
/// skipped.
pub fn province_list<B: GazetteerBackend>(records: &[PlaceRecord<B>]) -> Vec<B::Str> {
    let set: BTreeSet<&str> = records.iter().filter_map(|r| r.province_new()).collect();
    set.into_iter().map(B::str_from).collect()
}

/// **Loader/validator:** raw rows -> gazetteer.
///
/// Invalid rows are dropped silently; only the count is logged.
pub fn from_raw<B: GazetteerBackend>(raw: Vec<PlaceRaw>) -> Gazetteer<B> {
    let total = raw.len();
    let records: Vec<PlaceRecord<B>> = raw
        .into_iter()
        .map(record_from_raw::<B>)
        .filter(|r| r.is_valid())
        .collect();

    let dropped = total - records.len();
    if dropped > 0 {
        log::debug!("dropped {dropped} of {total} records missing a province, district or ward name");
    }

    from_records(records)
}

/// Wraps already-built records, applying the same validity filter.
pub fn from_records<B: GazetteerBackend>(mut records: Vec<PlaceRecord<B>>) -> Gazetteer<B> {
    records.retain(|r| r.is_valid());
    let provinces = province_list(&records);
    Gazetteer { records, provinces }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::DefaultBackend;

    fn raw(province: &str, district: &str, ward: &str) -> PlaceRaw {
        PlaceRaw {
            province_new: Some(province.into()),
            district_old: Some(district.into()),
            ward_new: Some(ward.into()),
            ..Default::default()
        }
    }

    #[test]
    fn drops_rows_missing_a_level() {
        let rows = vec![
            raw("Hà Nội", "Đống Đa", "Phường Ô Chợ Dừa"),
            raw("Hà Nội", "", "Phường Láng Hạ"),
            PlaceRaw {
                province_old: Some("Hà Tây".into()),
                district_new: Some("Hà Đông".into()),
                ward_old: Some("Xã Văn Khê".into()),
                ..Default::default()
            },
            PlaceRaw::default(),
        ];
        let db = from_raw::<DefaultBackend>(rows);
        assert_eq!(db.records.len(), 2);
        assert_eq!(db.records[0].ward_new(), Some("Phường Ô Chợ Dừa"));
        assert_eq!(db.records[1].ward_old(), Some("Xã Văn Khê"));
    }

    #[test]
    fn province_list_is_sorted_distinct_and_new_only() {
        let rows = vec![
            raw("Huế", "Phú Vang", "Xã Phú Thuận"),
            raw("Hà Nội", "Đống Đa", "Phường Láng Hạ"),
            raw("Huế", "Phú Vang", "Xã Phú Diên"),
            PlaceRaw {
                province_old: Some("Hà Tây".into()),
                district_old: Some("Hà Đông".into()),
                ward_old: Some("Xã Văn Khê".into()),
                ..Default::default()
            },
        ];
        let db = from_raw::<DefaultBackend>(rows);
        assert_eq!(db.records.len(), 4);
        // Plain code-point order, so the unaccented "Hu" sorts before "Hà".
        assert_eq!(db.provinces, vec!["Huế".to_string(), "Hà Nội".to_string()]);
    }

    #[test]
    fn empty_strings_become_none() {
        let mut row = raw("Hà Nội", "Đống Đa", "Phường Láng Hạ");
        row.ward_old = Some(String::new());
        row.ward_code_new = Some("00256".into());
        let rec = record_from_raw::<DefaultBackend>(row);
        assert_eq!(rec.ward_old(), None);
        assert_eq!(rec.ward_code_new(), Some("00256"));
    }
}

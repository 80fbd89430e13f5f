use diadanh_core::export::export_csv;
use diadanh_core::pager;
use diadanh_core::{DefaultGazetteer, GazetteerSearch, SearchQuery};

const SAMPLE: &str = include_str!("fixtures/sample.json");

fn sample() -> DefaultGazetteer {
    DefaultGazetteer::from_json_str(SAMPLE).expect("fixture parses")
}

fn wards<'a>(hits: &[&'a diadanh_core::PlaceRecord<diadanh_core::DefaultBackend>]) -> Vec<&'a str> {
    hits.iter().map(|r| r.ward().unwrap_or("")).collect()
}

#[test]
fn drops_rows_without_province_district_or_ward() {
    let db = sample();
    assert_eq!(db.records().len(), 17);
    assert!(db.records().iter().all(|r| r.is_valid()));
    // Numeric codes in the source are kept as text.
    let saigon = db.records().iter().find(|r| r.ward_new() == Some("Phường Sài Gòn")).unwrap();
    assert_eq!(saigon.ward_code_new(), Some("26740"));
}

#[test]
fn province_list_is_distinct_and_byte_ordered() {
    let db = sample();
    let provinces: Vec<&str> = db.provinces().iter().map(String::as_str).collect();
    assert_eq!(provinces, vec!["Huế", "Hà Nội", "Hà nội", "TP. Hồ Chí Minh", "Đà Nẵng"]);
}

#[test]
fn unaccented_query_matches_accented_ward() {
    let db = sample();
    let hits = db.search(&SearchQuery::new("o cho dua"));
    assert_eq!(wards(&hits), vec!["Phường Ô Chợ Dừa", "Phường Ô Chợ Dừa"]);

    let hits = db.search(&SearchQuery::new("Ô Chợ"));
    assert_eq!(hits.len(), 2);
}

#[test]
fn matches_pre_reform_names() {
    let db = sample();
    let hits = db.search(&SearchQuery::new("ben nghe"));
    assert_eq!(wards(&hits), vec!["Phường Sài Gòn"]);

    // A record known only by its old names is still searchable.
    let hits = db.search(&SearchQuery::new("quang trung"));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].province(), Some("Tỉnh Hà Tây"));
}

#[test]
fn province_filter_is_exact_and_case_sensitive() {
    let db = sample();
    let hanoi = db.search(&SearchQuery::new("").with_province("Hà Nội"));
    assert_eq!(hanoi.len(), 7);
    assert!(hanoi.iter().all(|r| r.province_new() == Some("Hà Nội")));

    let typo = db.search(&SearchQuery::new("").with_province("Hà nội"));
    assert_eq!(wards(&typo), vec!["Phường Hoàn Kiếm"]);

    let combined = db.search(&SearchQuery::new("lang").with_province("Hà Nội"));
    assert_eq!(wards(&combined), vec!["Phường Láng"]);
    assert!(db.search(&SearchQuery::new("lang").with_province("Huế")).is_empty());
}

#[test]
fn one_character_does_not_narrow() {
    let db = sample();
    assert_eq!(db.search(&SearchQuery::new("z")).len(), db.records().len());
    assert_eq!(db.search(&SearchQuery::new("zz")).len(), 0);
}

#[test]
fn suggestions_come_from_ward_names_only() {
    let db = sample();
    assert_eq!(db.suggest("ben"), vec!["Phường Sài Gòn", "Phường Bến Thành"]);
    assert!(db.suggest("quan 1").is_empty());
    assert!(!db.search(&SearchQuery::new("quan 1")).is_empty());

    // Eight matching records, one repeated name.
    assert_eq!(
        db.suggest("phuong"),
        vec![
            "Phường Ô Chợ Dừa",
            "Phường Láng",
            "Phường Văn Miếu - Quốc Tử Giám",
            "Phường Ba Đình",
            "Phường Ngọc Hà",
            "Phường Hoàn Kiếm",
            "Phường Thuận Hóa",
        ]
    );
    assert!(db.suggest("").is_empty());
}

#[test]
fn tree_holds_every_complete_record_once() {
    let db = sample();
    let tree = db.tree();
    let complete = db
        .records()
        .iter()
        .filter(|r| r.province_new().is_some() && r.district_old().is_some() && r.ward_new().is_some())
        .count();
    assert_eq!(tree.leaf_count(), complete);
    assert_eq!(tree.leaf_count(), 15);
    assert_eq!(
        tree.districts("Hà Nội"),
        vec!["Huyện Mê Linh", "Quận Ba Đình", "Quận Đống Đa"]
    );
    assert_eq!(
        tree.wards("Hà Nội", "Quận Đống Đa"),
        &["Phường Ô Chợ Dừa", "Phường Ô Chợ Dừa", "Phường Láng", "Phường Văn Miếu - Quốc Tử Giám"]
    );
    assert!(tree.districts("Tỉnh Hà Tây").is_empty());

    let stats = db.stats();
    assert_eq!((stats.records, stats.provinces, stats.districts, stats.wards), (17, 5, 9, 15));
}

#[test]
fn tree_leaf_leads_back_to_its_record() {
    let db = sample();
    let rec = db.find_record("Huế", "Thành phố Huế", "Phường Phú Xuân").unwrap();
    assert_eq!(rec.ward_old(), Some("Phường Tây Lộc"));
    assert!(db.find_record("Huế", "Thành phố Huế", "Phường Láng").is_none());
}

#[test]
fn pages_reassemble_the_result_list() {
    let db = sample();
    let hits = db.search(&SearchQuery::new("phuong"));
    let size = 4;
    let pages = pager::total_pages(hits.len(), size);
    let mut joined = Vec::new();
    for n in 1..=pages {
        joined.extend_from_slice(pager::page(&hits, n, size).unwrap());
    }
    assert_eq!(joined, hits);
    assert!(pager::page(&hits, pages + 1, size).unwrap().is_empty());
}

#[test]
fn csv_export_covers_the_whole_dataset() {
    let db = sample();
    let mut out = Vec::new();
    let rows = export_csv(db.records(), &mut out).unwrap();
    assert_eq!(rows, 17);

    let mut rdr = csv::Reader::from_reader(out.as_slice());
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(headers.get(6), Some("Mã phường/xã mới "));
    let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 17);
    assert_eq!(records[0].get(4), Some("Phường Ô Chợ Dừa"));
}

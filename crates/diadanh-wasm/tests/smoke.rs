#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use diadanh_wasm::{export_csv, load_dataset, query_string, record_count, set_province, set_text, toggle_favorite};

const SAMPLE: &str = r#"[
    {"Tên tỉnh/TP mới": "Hà Nội", "Tên Quận huyện TMS (cũ)": "Quận Đống Đa", "Tên Phường/Xã mới": "Phường Ô Chợ Dừa", "Tên Phường/Xã cũ": "Xã Ô Chợ Dừa"},
    {"Tên tỉnh/TP mới": "Hà Nội", "Tên Quận huyện TMS (cũ)": "Quận Đống Đa", "Tên Phường/Xã mới": "Phường Láng"},
    {"Tên tỉnh/TP mới": "Huế", "Tên Phường/Xã mới": "Phường Phú Xuân"}
]"#;

// One module instance per test binary, so everything runs in one test.
#[wasm_bindgen_test]
fn loads_and_searches() {
    assert_eq!(load_dataset(SAMPLE).unwrap(), 2);
    assert_eq!(record_count(), 2);
    assert!(load_dataset(SAMPLE).is_err());

    set_text("o cho dua").unwrap();
    set_province(Some("Hà Nội".to_string())).unwrap();
    assert_eq!(query_string().unwrap(), "search=o%20cho%20dua&tinh=H%C3%A0%20N%E1%BB%99i");

    let starred = toggle_favorite("Hà Nội", "Quận Đống Đa", "Phường Láng").unwrap();
    let unstarred = toggle_favorite("Hà Nội", "Quận Đống Đa", "Phường Láng").unwrap();
    assert_ne!(starred, unstarred);
    assert!(toggle_favorite("Huế", "-", "Phường Phú Xuân").is_err());

    let csv = export_csv().unwrap();
    assert_eq!(csv.lines().count(), 3);
}

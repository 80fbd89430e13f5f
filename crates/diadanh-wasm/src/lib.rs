//! diadanh-wasm: WebAssembly bindings for diadanh-core
//!
//! Exposes the lookup engine to JavaScript. The host fetches the dataset
//! JSON and hands its text to [`load_dataset`]; everything after that runs
//! in the module, including history and favorites in `localStorage`.
//!
//! What it provides
//! ----------------
//! - Stateless queries: `search`, `suggest`, `provinces`, `tree`,
//!   `find_record`, `get_stats`, `export_csv`
//! - A lookup session mirroring the page state: `set_text`,
//!   `set_province`, `go_to_page`, `current_view`, `apply_query_string`,
//!   `query_string`, `history`, `toggle_favorite`, `favorites`
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { load_dataset, set_text, apply_query_string } from 'diadanh-wasm';
//!
//! async function main() {
//!   await init();
//!   const json = await (await fetch('/danh-muc-phuong-xa_moi.json')).text();
//!   load_dataset(json);
//!
//!   let view = apply_query_string(location.search);
//!   view = set_text('o cho dua');
//!   console.log(view.total_pages, view.items, view.suggestions);
//!   history.replaceState(null, '', '?' + view.query_string);
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - Every exported function returns plain types or a `JsValue` holding
//!   JSON-serializable arrays/objects. Calls before `load_dataset` fail
//!   with an error.
mod storage;

use std::cell::RefCell;
use std::sync::OnceLock;
use wasm_bindgen::prelude::*;

// Core Imports
use diadanh_core::prelude::{
    favorite_key, parse_query_string, DefaultBackend, DefaultGazetteer, GazetteerSearch,
    LookupSession, PlaceRecord, SearchQuery,
};
use serde::Serialize;
use serde_wasm_bindgen::to_value;

pub use storage::BrowserStore;

// 1. Static Instance
static DB: OnceLock<DefaultGazetteer> = OnceLock::new();

thread_local! {
    static SESSION: RefCell<Option<LookupSession<'static, DefaultBackend, BrowserStore>>> =
        const { RefCell::new(None) };
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing diadanh WASM module...".into());
}

fn db() -> Result<&'static DefaultGazetteer, JsValue> {
    DB.get()
        .ok_or_else(|| JsValue::from_str("dataset not loaded; call load_dataset first"))
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(Into::into)
}

/// Parses and validates the dataset JSON. Returns the number of valid
/// records. Can only be called once per module instance.
#[wasm_bindgen]
pub fn load_dataset(json: &str) -> Result<usize, JsValue> {
    if DB.get().is_some() {
        return Err(JsValue::from_str("dataset already loaded"));
    }
    let parsed = DefaultGazetteer::from_json_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let db = DB.get_or_init(|| parsed);

    let stats = db.stats();
    web_sys::console::log_1(
        &format!("✓ Loaded {} records in {} provinces", stats.records, stats.provinces).into(),
    );

    SESSION.with(|s| *s.borrow_mut() = Some(LookupSession::new(db, BrowserStore::detect())));
    Ok(db.len())
}

/* --------------------------------------------------------------------------
   JS views
-------------------------------------------------------------------------- */

/// One record as the page shows it.
#[derive(Serialize)]
struct RecordView<'a> {
    ward_new: Option<&'a str>,
    district: Option<&'a str>,
    province_new: Option<&'a str>,
    ward_code_new: Option<&'a str>,
    ward_old: Option<&'a str>,
    district_old: Option<&'a str>,
    province_old: Option<&'a str>,
    ward_code_old: Option<&'a str>,
    district_code_old: Option<&'a str>,
    has_old_info: bool,
    favorite_key: String,
}

impl<'a> RecordView<'a> {
    fn new(r: &'a PlaceRecord<DefaultBackend>) -> Self {
        Self {
            ward_new: r.ward_new(),
            district: r.district(),
            province_new: r.province_new(),
            ward_code_new: r.ward_code_new(),
            ward_old: r.ward_old(),
            district_old: r.district_old(),
            province_old: r.province_old(),
            ward_code_old: r.ward_code_old(),
            district_code_old: r.district_code_old(),
            has_old_info: r.has_old_info(),
            favorite_key: favorite_key(r),
        }
    }
}

#[derive(Serialize)]
struct SessionView<'a> {
    text: &'a str,
    province: Option<&'a str>,
    page: usize,
    total_pages: usize,
    page_offset: usize,
    result_count: usize,
    browsing: bool,
    items: Vec<RecordView<'a>>,
    suggestions: &'a [&'a str],
    query_string: String,
}

fn records_js<'a>(records: impl IntoIterator<Item = &'a PlaceRecord<DefaultBackend>>) -> Result<JsValue, JsValue> {
    let out: Vec<RecordView> = records.into_iter().map(RecordView::new).collect();
    to_js(&out)
}

/* --------------------------------------------------------------------------
   Stateless queries
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn record_count() -> usize {
    DB.get().map_or(0, |db| db.len())
}

#[wasm_bindgen]
pub fn get_stats() -> Result<JsValue, JsValue> {
    to_js(&db()?.stats())
}

#[wasm_bindgen]
pub fn provinces() -> Result<JsValue, JsValue> {
    to_js(db()?.provinces())
}

/// All records matching `text` (and `province`, when given), in dataset order.
#[wasm_bindgen]
pub fn search(text: &str, province: Option<String>) -> Result<JsValue, JsValue> {
    let query = SearchQuery {
        text: text.to_string(),
        province,
    };
    records_js(db()?.search(&query))
}

#[wasm_bindgen]
pub fn suggest(text: &str) -> Result<js_sys::Array, JsValue> {
    let array = js_sys::Array::new();
    for name in db()?.suggest(text) {
        array.push(&JsValue::from_str(name));
    }
    Ok(array)
}

/// `{ province: { district: [ward, ...] } }`
#[wasm_bindgen]
pub fn tree() -> Result<JsValue, JsValue> {
    to_js(&db()?.tree())
}

#[wasm_bindgen]
pub fn find_record(province: &str, district: &str, ward: &str) -> Result<JsValue, JsValue> {
    match db()?.find_record(province, district, ward) {
        Some(r) => to_js(&RecordView::new(r)),
        None => Ok(JsValue::NULL),
    }
}

/// The whole dataset as CSV text, for a download link.
#[wasm_bindgen]
pub fn export_csv() -> Result<String, JsValue> {
    let mut out = Vec::new();
    diadanh_core::export::export_csv(db()?.records(), &mut out)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    String::from_utf8(out).map_err(|e| JsValue::from_str(&e.to_string()))
}

/* --------------------------------------------------------------------------
   Lookup session
-------------------------------------------------------------------------- */

fn with_session<T>(
    f: impl FnOnce(&mut LookupSession<'static, DefaultBackend, BrowserStore>) -> Result<T, JsValue>,
) -> Result<T, JsValue> {
    SESSION.with(|cell| match cell.borrow_mut().as_mut() {
        Some(session) => f(session),
        None => Err(JsValue::from_str("dataset not loaded; call load_dataset first")),
    })
}

fn view_js(s: &LookupSession<'static, DefaultBackend, BrowserStore>) -> Result<JsValue, JsValue> {
    let view = s.view();
    to_js(&SessionView {
        text: &s.query().text,
        province: s.query().province_filter(),
        page: view.page,
        total_pages: view.total_pages,
        page_offset: s.page_offset(),
        result_count: view.results.len(),
        browsing: view.browsing,
        items: view.page_items.iter().map(|r| RecordView::new(r)).collect(),
        suggestions: view.suggestions,
        query_string: s.to_query_string(),
    })
}

#[wasm_bindgen]
pub fn current_view() -> Result<JsValue, JsValue> {
    with_session(|s| view_js(s))
}

#[wasm_bindgen]
pub fn set_text(text: &str) -> Result<JsValue, JsValue> {
    with_session(|s| {
        s.set_text(text);
        view_js(s)
    })
}

/// `None` or `""` shows all provinces.
#[wasm_bindgen]
pub fn set_province(province: Option<String>) -> Result<JsValue, JsValue> {
    with_session(|s| {
        s.set_province(province.as_deref());
        view_js(s)
    })
}

#[wasm_bindgen]
pub fn go_to_page(page: usize) -> Result<JsValue, JsValue> {
    with_session(|s| {
        s.go_to_page(page);
        view_js(s)
    })
}

/// Restores `search`/`tinh` from `location.search`.
#[wasm_bindgen]
pub fn apply_query_string(qs: &str) -> Result<JsValue, JsValue> {
    with_session(|s| {
        s.set_query(parse_query_string(qs));
        view_js(s)
    })
}

#[wasm_bindgen]
pub fn query_string() -> Result<String, JsValue> {
    with_session(|s| Ok(s.to_query_string()))
}

#[wasm_bindgen]
pub fn history() -> Result<JsValue, JsValue> {
    with_session(|s| to_js(s.history().entries()))
}

#[wasm_bindgen]
pub fn clear_history() -> Result<(), JsValue> {
    with_session(|s| s.clear_history().map_err(|e| JsValue::from_str(&e.to_string())))
}

/// Stars or un-stars the ward at a tree position. Returns `true` when it is
/// now a favorite.
#[wasm_bindgen]
pub fn toggle_favorite(province: &str, district: &str, ward: &str) -> Result<bool, JsValue> {
    let record = db()?
        .find_record(province, district, ward)
        .ok_or_else(|| JsValue::from_str("no such ward"))?;
    with_session(|s| {
        s.toggle_favorite(record)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    })
}

#[wasm_bindgen]
pub fn favorites() -> Result<JsValue, JsValue> {
    with_session(|s| records_js(s.favorites().entries().iter().map(|f| &f.record)))
}

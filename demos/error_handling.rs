//! Error handling example for diadanh-rs
//!
//! This example demonstrates how load errors surface and which inputs
//! degrade gracefully instead of failing.

use diadanh_core::prelude::*;

fn main() -> Result<()> {
    println!("=== diadanh-rs Error Handling Example ===\n");

    // Example 1: Missing dataset file
    println!("--- Example 1: Loading a file that does not exist ---");
    match DefaultGazetteer::load_from_path("does/not/exist.json") {
        Ok(_) => println!("  unexpectedly loaded"),
        Err(GazetteerError::NotFound(msg)) => println!("  NotFound: {msg}"),
        Err(e) => println!("  other error: {e}"),
    }
    println!();

    // Example 2: Not a JSON array
    println!("--- Example 2: Malformed JSON ---");
    match DefaultGazetteer::from_json_str(r#"{"rows": []}"#) {
        Ok(_) => println!("  unexpectedly parsed"),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    // Example 3: Incomplete rows are dropped, not reported
    println!("--- Example 3: Incomplete rows ---");
    let db = DefaultGazetteer::from_json_str(
        r#"[
            {"Tên tỉnh/TP mới": "Hà Nội", "Tên Quận huyện TMS (cũ)": "Quận Đống Đa", "Tên Phường/Xã mới": "Phường Láng"},
            {"Tên tỉnh/TP mới": "Hà Nội", "Tên Phường/Xã mới": "Phường Hai Bà Trưng"},
            {}
        ]"#,
    )?;
    println!("  3 rows in, {} record kept", db.len());
    println!();

    // Example 4: Pager contract
    println!("--- Example 4: Page numbers start at 1 ---");
    let hits = db.search(&SearchQuery::new("lang"));
    match page(&hits, 0, 10) {
        Ok(items) => println!("  {} items", items.len()),
        Err(e) => println!("  ✗ {e}"),
    }
    println!("  page 9 of a 1-page result: {} items", page(&hits, 9, 10)?.len());
    println!();

    // Example 5: Unknown province or too-short text is not an error
    println!("--- Example 5: Queries that simply find nothing ---");
    let none = db.search(&SearchQuery::new("lang").with_province("Hà nội"));
    println!("  \"Hà nội\" (wrong case): {} results", none.len());
    let all = db.search(&SearchQuery::new("l"));
    println!("  one character: {} results (no narrowing)", all.len());
    println!("  lookup of a missing tree leaf: {:?}", db.find_record("Hà Nội", "-", "-").is_some());
    println!();

    // Example 6: Corrupt stored state falls back to empty
    println!("--- Example 6: Corrupt history ---");
    let mut store = MemoryStore::new();
    store.set(diadanh_core::persistence::HISTORY_KEY, "{oops")?;
    let history = History::load(&store);
    println!("  history entries after corruption: {}", history.len());

    println!("\n=== Example completed successfully ===");
    Ok(())
}

//! Lookup session example for diadanh-rs
//!
//! Drives the same state machine a front-end would: typing, picking a
//! province, paging, sharing a link, history and favorites. State is kept
//! in memory here; the CLI uses `FileStore` and the WASM bindings use
//! `localStorage`.

use diadanh_core::prelude::*;

fn show(session: &LookupSession<'_, DefaultBackend, MemoryStore>) {
    let view = session.view();
    if view.browsing {
        println!("  (browsing: {} records, tree view)", view.results.len());
    }
    for (i, r) in view.page_items.iter().enumerate() {
        println!(
            "  {}. {}, {}",
            session.page_offset() + i,
            r.ward().unwrap_or("-"),
            r.province().unwrap_or("-")
        );
    }
    println!("  page {}/{}", view.page, view.total_pages);
    if !view.suggestions.is_empty() {
        println!("  suggestions: {}", view.suggestions.join(" | "));
    }
}

fn main() -> Result<()> {
    println!("=== diadanh-rs Lookup Session Example ===\n");

    let db = DefaultGazetteer::load()?;
    let mut session = LookupSession::new(&db, MemoryStore::new()).with_page_size(5);

    println!("--- Empty query ---");
    show(&session);

    println!("\n--- Typing \"phuong\" ---");
    session.set_text("phuong");
    show(&session);

    println!("\n--- Next page ---");
    session.next_page();
    show(&session);

    println!("\n--- Province filter resets to page 1 ---");
    session.set_province(Some("Hà Nội"));
    show(&session);

    println!("\n--- Shareable link ---");
    let link = session.to_query_string();
    println!("  ?{link}");
    let restored = LookupSession::from_query_string(&db, MemoryStore::new(), &link);
    println!("  restored {} results", restored.results().len());

    println!("\n--- Favorites ---");
    if let Some(first) = session.results().first().copied() {
        session.toggle_favorite(first)?;
    }
    for f in session.favorites().entries() {
        println!("  ★ {}", f.key);
    }

    println!("\n--- History ---");
    session.set_text("o cho dua");
    session.set_text("x");
    for q in session.history().entries() {
        println!("  {q}");
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}

//! Basic usage example for diadanh-rs
//!
//! This example demonstrates how to:
//! - Load the bundled gazetteer
//! - Search with and without diacritics
//! - Filter by province
//! - Autocomplete ward names
//! - Walk the province -> district -> ward tree

use diadanh_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== diadanh-rs Basic Usage Example ===\n");

    // Load the dataset
    println!("Loading gazetteer...");
    let db = DefaultGazetteer::load()?;
    let stats = db.stats();
    println!(
        "✓ {} records, {} provinces, {} districts, {} wards\n",
        stats.records, stats.provinces, stats.districts, stats.wards
    );

    // Example 1: Provinces
    println!("--- Example 1: Provinces ---");
    for p in db.provinces() {
        println!("- {p}");
    }
    println!();

    // Example 2: Accent-insensitive search
    println!("--- Example 2: Search \"o cho dua\" ---");
    for r in db.search(&SearchQuery::new("o cho dua")) {
        println!(
            "{} ({}), formerly {}",
            r.ward_new().unwrap_or("-"),
            r.province_new().unwrap_or("-"),
            r.ward_old().unwrap_or("-")
        );
    }
    println!();

    // Example 3: Pre-reform names still find the new ward
    println!("--- Example 3: Search by an old ward name ---");
    for r in db.search(&SearchQuery::new("ben nghe")) {
        println!("Phường Bến Nghé is now {}", r.ward_new().unwrap_or("-"));
    }
    println!();

    // Example 4: Province filter (exact name)
    println!("--- Example 4: Everything in Huế ---");
    let hue = db.search(&SearchQuery::new("").with_province("Huế"));
    println!("{} records", hue.len());
    for (i, r) in page(&hue, 1, 3)?.iter().enumerate() {
        println!("{}. {}", i + 1, r.ward().unwrap_or("-"));
    }
    println!("({} pages of 3)\n", total_pages(hue.len(), 3));

    // Example 5: Autocomplete
    println!("--- Example 5: Suggestions for \"phu\" ---");
    for s in db.suggest("phu") {
        println!("- {s}");
    }
    println!();

    // Example 6: The tree
    println!("--- Example 6: Districts of Hà Nội ---");
    let tree = db.tree();
    for d in tree.districts("Hà Nội") {
        println!("{d}: {}", tree.sorted_wards("Hà Nội", d).join(", "));
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}

//! diadanh: command-line interface for diadanh-core
//!
//! Look up Vietnamese administrative units from the terminal, by their
//! pre-reform or post-reform names, with or without diacritics.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ diadanh stats
//!
//! - Search (accents optional), optionally within one province
//!   $ diadanh search "o cho dua"
//!   $ diadanh search lang --province "Hà Nội" --page 2
//!
//! - Reopen a shared link
//!   $ diadanh search --link "?search=lang&tinh=H%C3%A0%20N%E1%BB%99i"
//!
//! - Autocomplete ward names
//!   $ diadanh suggest phu
//!
//! - Browse the hierarchy and open one ward
//!   $ diadanh tree "Hà Nội"
//!   $ diadanh show "Hà Nội" "Quận Đống Đa" "Phường Láng"
//!
//! - History, favorites and export
//!   $ diadanh history
//!   $ diadanh favorite toggle "Hà Nội" "Quận Đống Đa" "Phường Láng"
//!   $ diadanh export -o diadanh.csv
//!
//! Data source
//! -----------
//!
//! By default the CLI loads the dataset bundled with `diadanh-core` and
//! keeps a binary snapshot next to it for fast subsequent runs. Use
//! `--input <path>` for another dataset. History and favorites are stored
//! as JSON files under `--state-dir` (default `.diadanh`).
mod args;

use crate::args::{CliArgs, Commands, FavoriteAction};
use anyhow::{bail, Context};
use clap::Parser;
use diadanh_core::persistence::FileStore;
use diadanh_core::query_string::parse_query_string;
use diadanh_core::{
    DefaultBackend, DefaultGazetteer, GazetteerSearch, LookupSession, PlaceRecord, SearchQuery,
};
use std::fs::File;
use std::io::{self, BufWriter};

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .init();
}

fn record_line(n: usize, r: &PlaceRecord<DefaultBackend>) -> String {
    let dash = "-";
    let mut line = format!(
        "{n:>4}. {} - {}, {}",
        r.ward_new().unwrap_or(dash),
        r.district().unwrap_or(dash),
        r.province_new().unwrap_or(dash)
    );
    if r.has_old_info() {
        line.push_str(&format!(
            "\n      trước sáp nhập: {} - {}, {}",
            r.ward_old().unwrap_or(dash),
            r.district_old().unwrap_or(dash),
            r.province_old().unwrap_or(dash)
        ));
    }
    line
}

fn print_record(n: usize, r: &PlaceRecord<DefaultBackend>) {
    println!("{}", record_line(n, r));
}

/// Resolves a ward from the tree path given on the command line.
fn lookup<'a>(
    db: &'a DefaultGazetteer,
    province: &str,
    district: &str,
    ward: &str,
) -> anyhow::Result<&'a PlaceRecord<DefaultBackend>> {
    match db.find_record(province, district, ward) {
        Some(r) => Ok(r),
        None => bail!("no record for {ward}, {district}, {province}"),
    }
}

fn print_details(r: &PlaceRecord<DefaultBackend>) {
    let dash = "-";
    println!("Tỉnh/TP mới:       {}", r.province_new().unwrap_or(dash));
    println!("Quận/huyện:        {}", r.district().unwrap_or(dash));
    println!("Phường/xã mới:     {}", r.ward_new().unwrap_or(dash));
    println!("Mã phường/xã mới:  {}", r.ward_code_new().unwrap_or(dash));
    if r.has_old_info() {
        println!("Tỉnh/TP cũ:        {}", r.province_old().unwrap_or(dash));
        println!("Quận/huyện cũ:     {}", r.district_old().unwrap_or(dash));
        println!("Mã quận/huyện cũ:  {}", r.district_code_old().unwrap_or(dash));
        println!("Phường/xã cũ:      {}", r.ward_old().unwrap_or(dash));
        println!("Mã phường/xã cũ:   {}", r.ward_code_old().unwrap_or(dash));
    }
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logger(args.verbose);

    // Load DB: explicit input, or the bundled dataset through its snapshot cache
    let db = match &args.input {
        Some(path) => DefaultGazetteer::load_from_path(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => DefaultGazetteer::load().context("loading the bundled dataset")?,
    };
    let store = FileStore::new(&args.state_dir);

    match args.command {
        Commands::Stats => {
            let stats = db.stats();
            println!("Dataset statistics:");
            println!("  Records:   {}", stats.records);
            println!("  Provinces: {}", stats.provinces);
            println!("  Districts: {}", stats.districts);
            println!("  Wards:     {}", stats.wards);
        }

        Commands::Provinces => {
            for p in db.provinces() {
                println!("{p}");
            }
        }

        Commands::Search {
            text,
            province,
            page,
            page_size,
            link,
        } => {
            if page == 0 || page_size == 0 {
                bail!("--page and --page-size start at 1");
            }
            let query = match link {
                Some(qs) => parse_query_string(&qs),
                None => match province {
                    Some(p) => SearchQuery::new(text).with_province(p),
                    None => SearchQuery::new(text),
                },
            };

            let mut session = LookupSession::new(&db, store).with_page_size(page_size);
            session.set_query(query);
            if let Some(p) = session.query().province_filter() {
                if !db.provinces().iter().any(|known| known == p) {
                    log::warn!("unknown province {p:?}; the filter is an exact match");
                }
            }
            let shown = session.go_to_page(page);

            let view = session.view();
            if view.results.is_empty() {
                println!("No records found.");
            } else {
                let offset = session.page_offset();
                for (i, r) in view.page_items.iter().enumerate() {
                    print_record(offset + i, r);
                }
                println!(
                    "\nPage {shown}/{} ({} results)",
                    view.total_pages,
                    view.results.len()
                );
            }
            let qs = session.to_query_string();
            if !qs.is_empty() {
                println!("Link: ?{qs}");
            }
        }

        Commands::Suggest { text } => {
            for s in db.suggest(&text) {
                println!("{s}");
            }
        }

        Commands::Tree { province, district } => {
            let tree = db.tree();
            match (province.as_deref(), district.as_deref()) {
                (None, _) => {
                    for (p, districts) in tree.iter() {
                        println!("{p} ({} quận/huyện)", districts.len());
                    }
                }
                (Some(p), None) => {
                    let districts = tree.districts(p);
                    if districts.is_empty() {
                        bail!("province {p:?} is not in the tree");
                    }
                    for d in districts {
                        println!("{d} ({} phường/xã)", tree.wards(p, d).len());
                    }
                }
                (Some(p), Some(d)) => {
                    let wards = tree.sorted_wards(p, d);
                    if wards.is_empty() {
                        bail!("{d:?} in {p:?} is not in the tree");
                    }
                    for w in wards {
                        println!("{w}");
                    }
                }
            }
        }

        Commands::Show {
            province,
            district,
            ward,
        } => print_details(lookup(&db, &province, &district, &ward)?),

        Commands::History { clear } => {
            let mut session = LookupSession::new(&db, store);
            if clear {
                session.clear_history()?;
                println!("History cleared.");
            } else if session.history().is_empty() {
                println!("No recent searches.");
            } else {
                for q in session.history().entries() {
                    println!("{q}");
                }
            }
        }

        Commands::Favorite { action } => {
            let mut session = LookupSession::new(&db, store);
            match action {
                FavoriteAction::List => {
                    if session.favorites().is_empty() {
                        println!("No favorites yet.");
                    }
                    for (i, f) in session.favorites().entries().iter().enumerate() {
                        print_record(i + 1, &f.record);
                    }
                }
                FavoriteAction::Toggle {
                    province,
                    district,
                    ward,
                } => {
                    let r = lookup(&db, &province, &district, &ward)?;
                    if session.toggle_favorite(r)? {
                        println!("Added {ward} to favorites.");
                    } else {
                        println!("Removed {ward} from favorites.");
                    }
                }
            }
        }

        Commands::Export { output } => {
            let rows = match output {
                Some(path) => {
                    let file = File::create(&path)
                        .with_context(|| format!("creating {}", path.display()))?;
                    let rows = diadanh_core::export::export_csv(db.records(), BufWriter::new(file))?;
                    eprintln!("Wrote {rows} records to {}", path.display());
                    rows
                }
                None => diadanh_core::export::export_csv(db.records(), io::stdout().lock())?,
            };
            log::info!("exported {rows} records");
        }
    }

    Ok(())
}

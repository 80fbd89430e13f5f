use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for diadanh
#[derive(Debug, Parser)]
#[command(
    name = "diadanh",
    version,
    about = "Look up Vietnamese wards, districts and provinces by their old or new names"
)]
pub struct CliArgs {
    /// Dataset to load: JSON array, .json.gz, or a .bin snapshot (default: bundled dataset)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<PathBuf>,

    /// Directory holding search history and favorites
    #[arg(long = "state-dir", global = true, default_value = ".diadanh")]
    pub state_dir: PathBuf,

    /// More log output (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset
    Stats,

    /// List post-reform provinces
    Provinces,

    /// Search all six name fields, with or without diacritics
    Search {
        /// Free text (e.g. "o cho dua")
        #[arg(default_value = "")]
        text: String,

        /// Exact post-reform province name (e.g. "Hà Nội")
        #[arg(short = 'p', long = "province")]
        province: Option<String>,

        /// Page to show, starting at 1
        #[arg(long = "page", default_value_t = 1)]
        page: usize,

        /// Results per page
        #[arg(long = "page-size", default_value_t = diadanh_core::pager::DEFAULT_PAGE_SIZE)]
        page_size: usize,

        /// Start from a shared link's query string instead (e.g. "?search=lang&tinh=H%C3%A0%20N%E1%BB%99i")
        #[arg(long = "link", conflicts_with_all = ["text", "province"])]
        link: Option<String>,
    },

    /// Autocomplete ward names
    Suggest {
        text: String,
    },

    /// Browse province -> district -> ward
    Tree {
        province: Option<String>,
        district: Option<String>,
    },

    /// Show one ward by its tree position
    Show {
        province: String,
        district: String,
        ward: String,
    },

    /// Recent searches
    History {
        /// Forget all recorded searches
        #[arg(long)]
        clear: bool,
    },

    /// Starred wards
    Favorite {
        #[command(subcommand)]
        action: FavoriteAction,
    },

    /// Write the full dataset as CSV
    Export {
        /// Output file (default: stdout)
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Subcommand)]
pub enum FavoriteAction {
    /// List favorites, most recent first
    List,

    /// Star or un-star a ward by its tree position
    Toggle {
        province: String,
        district: String,
        ward: String,
    },
}

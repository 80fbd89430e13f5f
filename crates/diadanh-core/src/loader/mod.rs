// crates/diadanh-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (I/O, decompression) and delegates to the
//! JSON parser or the bincode snapshot reader. Validation happens in
//! [`crate::model::convert::from_raw`], so every entry point below yields
//! only valid records.

use crate::error::{GazetteerError, Result};
use crate::model::{convert, DefaultBackend, Gazetteer};
use crate::raw::PlaceRaw;
use crate::traits::GazetteerBackend;
use once_cell::sync::OnceCell;
use std::io::Read;
use std::path::{Path, PathBuf};

mod cache;
pub(crate) mod common_io;

pub use cache::CompressionMode;

static GAZETTEER_CACHE: OnceCell<Gazetteer<DefaultBackend>> = OnceCell::new();

pub const DATASET_FILENAME: &str = "danh-muc-phuong-xa_moi.json";

impl<B: GazetteerBackend> Gazetteer<B> {
    /// Parses a JSON array of raw records.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: Vec<PlaceRaw> = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw))
    }

    /// Parses a JSON array of raw records from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: Vec<PlaceRaw> = serde_json::from_reader(reader)?;
        Ok(Self::from_raw(raw))
    }

    /// Validates raw rows and derives the province list.
    pub fn from_raw(raw: Vec<PlaceRaw>) -> Self {
        let db = convert::from_raw(raw);
        log::info!(
            "loaded {} records across {} provinces",
            db.records.len(),
            db.provinces.len()
        );
        db
    }
}

impl Gazetteer<DefaultBackend> {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        DATASET_FILENAME
    }

    pub fn default_dataset_path() -> PathBuf {
        Self::default_data_dir().join(Self::default_dataset_filename())
    }

    /// Loads the bundled dataset once per process.
    ///
    /// The first call goes through [`Self::load_cached`], so a bincode
    /// snapshot is kept next to the JSON for later runs.
    pub fn load() -> Result<Self> {
        GAZETTEER_CACHE
            .get_or_try_init(|| Self::load_cached(Self::default_dataset_path()))
            .cloned()
    }

    /// Loads a dataset file.
    ///
    /// - `*.bin` is read as a snapshot written by [`Self::save_as`]
    /// - `*.gz` is decompressed first (needs the `compact` feature)
    /// - anything else is parsed as a JSON array
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if common_io::is_snapshot(path) {
            return Self::load_snapshot(path);
        }
        let reader = common_io::open_stream(path)?;
        Self::from_reader(reader).map_err(|e| match e {
            GazetteerError::Json(err) => GazetteerError::InvalidData(format!(
                "{} is not a valid dataset: {}",
                path.display(),
                err
            )),
            other => other,
        })
    }
}

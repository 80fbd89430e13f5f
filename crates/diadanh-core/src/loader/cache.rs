// crates/diadanh-core/src/loader/cache.rs
use super::common_io;
use crate::error::{GazetteerError, Result};
use crate::model::{DefaultBackend, Gazetteer, CACHE_SUFFIX};

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

// -----------------------------------------------------------------------------
// CONFIGURATION
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    Gzip,
    None,
}

impl CompressionMode {
    /// What snapshots use in this build.
    pub fn for_build() -> Self {
        #[cfg(feature = "compact")]
        {
            CompressionMode::Gzip
        }
        #[cfg(not(feature = "compact"))]
        {
            CompressionMode::None
        }
    }
}

// -----------------------------------------------------------------------------
// RUNTIME HELPERS
// -----------------------------------------------------------------------------

impl Gazetteer<DefaultBackend> {
    /// **Smart Load:** reads the snapshot next to `path` when it is fresh,
    /// otherwise parses the JSON source and refreshes the snapshot.
    ///
    /// Snapshot write failures are logged and ignored.
    pub fn load_cached(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let cache_path = common_io::get_cache_path(path, CACHE_SUFFIX);

        // 1. Check Cache
        if is_cache_fresh(path, &cache_path) {
            match Self::load_snapshot(&cache_path) {
                Ok(db) => {
                    log::debug!("using snapshot {}", cache_path.display());
                    return Ok(db);
                }
                Err(e) => log::debug!("ignoring unreadable snapshot {}: {e}", cache_path.display()),
            }
        }

        // 2. Build
        let db = Self::load_from_path(path)?;

        // 3. Cache
        if let Err(e) = write_snapshot(&cache_path, &db, CompressionMode::for_build()) {
            log::debug!("could not write snapshot {}: {e}", cache_path.display());
        }

        Ok(db)
    }

    /// Writes a snapshot readable by [`Self::load_from_path`] (use a `.bin`
    /// extension).
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        write_snapshot(path.as_ref(), self, CompressionMode::for_build())
    }

    pub(crate) fn load_snapshot(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            GazetteerError::NotFound(format!("Snapshot not found at {}: {}", path.display(), e))
        })?;
        let reader = BufReader::new(file);

        #[cfg(feature = "compact")]
        let mut stream: Box<dyn Read> = Box::new(GzDecoder::new(reader));
        #[cfg(not(feature = "compact"))]
        let mut stream: Box<dyn Read> = Box::new(reader);

        let mut data = Vec::new();
        stream.read_to_end(&mut data)?;
        Ok(Self::from_bytes(&data)?)
    }
}

fn is_cache_fresh(source_path: &Path, cache_path: &Path) -> bool {
    let cache_time = match fs::metadata(cache_path).and_then(|m| m.modified()) {
        Ok(m) => m,
        Err(_) => return false,
    };
    match fs::metadata(source_path).and_then(|m| m.modified()) {
        Ok(source_time) => source_time <= cache_time,
        // Source gone but snapshot present: the snapshot is all we have.
        Err(_) => true,
    }
}

// -----------------------------------------------------------------------------
// WRITER
// -----------------------------------------------------------------------------

fn write_snapshot(
    path: &Path,
    db: &Gazetteer<DefaultBackend>,
    compression: CompressionMode,
) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    let mut encoder: Box<dyn Write> = match compression {
        CompressionMode::Gzip => {
            #[cfg(feature = "compact")]
            {
                Box::new(GzEncoder::new(writer, Compression::default()))
            }
            #[cfg(not(feature = "compact"))]
            {
                return Err(GazetteerError::InvalidData(
                    "Gzip requested but 'compact' disabled".into(),
                ));
            }
        }
        CompressionMode::None => Box::new(writer),
    };

    let bytes = db.to_bytes()?;
    encoder.write_all(&bytes)?;
    encoder.flush()?;
    Ok(())
}

// crates/diadanh-core/src/error.rs
use thiserror::Error;

/// Errors surfaced by the gazetteer core.
///
/// Malformed records never produce an error: they are dropped at load time.
/// Everything here is either an I/O problem at the collaborator boundary or a
/// contract violation by the caller.
#[derive(Debug, Error)]
pub enum GazetteerError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary cache error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Short alias kept for callers that prefer the crate-prefixed name.
pub type DiaDanhError = GazetteerError;

pub type Result<T> = std::result::Result<T, GazetteerError>;

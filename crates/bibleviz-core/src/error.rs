// crates/bibleviz-core/src/error.rs
use thiserror::Error;

/// Errors raised at the I/O edges of the crate.
///
/// The computational core (graph building, opacity patching, search) never
/// fails; it degrades to a safe default instead. Only loading and fetching
/// documents can produce a `VizError`.
#[derive(Debug, Error)]
pub enum VizError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("fetch failed: {0}")]
    Fetch(String),
}

pub type Result<T> = std::result::Result<T, VizError>;

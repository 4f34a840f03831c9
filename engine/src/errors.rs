use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the engine.
///
/// Directory scans never fail: unreadable roots degrade to empty results and
/// a matcher miss is an empty string. Only lookups of a single named asset
/// report errors back to the caller.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A named asset (e.g. a terminal scheme) is not present on disk.
    #[error("{kind} '{name}' not found")]
    NotFound { kind: &'static str, name: String },

    /// A file that was located could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl EngineError {
    pub fn not_found(kind: &'static str, name: impl Into<String>) -> Self {
        EngineError::NotFound {
            kind,
            name: name.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, EngineError::NotFound { .. })
    }
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

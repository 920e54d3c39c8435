//! Scan error types.

use thiserror::Error;

/// Errors that can occur while reading and scanning log files.
///
/// Unparseable timestamps and malformed keyword lines are deliberately not
/// errors: the former resolve to "no timestamp" (see `timestamp`), the latter
/// are skipped and surfaced as data by the rule parser (see `rules`).
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("file not found: {0}")]
    NotFound(String),
}

/// Convenience alias for scan results.
pub type ScanResult<T> = Result<T, ScanError>;

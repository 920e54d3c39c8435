//! Log source abstraction — read log lines from files or test doubles.

use crate::error::{ScanError, ScanResult};

/// Abstraction for reading log file contents.
///
/// The scanner only ever needs whole files as line vectors (inputs are read
/// fully into memory), so one method is enough. Implemented by
/// `FileLogSource` for the real filesystem and `MockLogSource` for tests.
pub trait LogSource {
    /// Read all lines from the given path/identifier.
    fn read_lines(&self, path: &str) -> ScanResult<Vec<String>>;
}

/// Reads logs from the local filesystem.
pub struct FileLogSource;

impl LogSource for FileLogSource {
    fn read_lines(&self, path: &str) -> ScanResult<Vec<String>> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ScanError::NotFound(path.to_string())
            } else {
                ScanError::Io(format!("{path}: {e}"))
            }
        })?;
        Ok(content.lines().map(String::from).collect())
    }
}

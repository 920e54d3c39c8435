//! Mock log source for tests — serves pre-loaded lines by path.

use std::collections::{HashMap, HashSet};

use crate::error::{ScanError, ScanResult};
use crate::source::LogSource;

/// In-memory log source for exercising scan behavior without a filesystem.
///
/// Paths registered with `fail_file` return an I/O error instead, so
/// partial-failure handling can be tested without touching real files.
pub struct MockLogSource {
    files: HashMap<String, Vec<String>>,
    failing: HashSet<String>,
}

impl MockLogSource {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
            failing: HashSet::new(),
        }
    }

    /// Add a file with the given lines.
    pub fn add_file(&mut self, path: impl Into<String>, lines: Vec<String>) {
        self.files.insert(path.into(), lines);
    }

    /// Register a path whose reads fail with an I/O error.
    pub fn fail_file(&mut self, path: impl Into<String>) {
        self.failing.insert(path.into());
    }

    /// Create a mock with a sample auth log (syslog-style timestamps, no year).
    pub fn with_auth_sample() -> Self {
        let mut m = Self::new();
        m.add_file(
            "/var/log/auth.log",
            vec![
                "Jan 15 23:39:10 server1 sshd[812]: Accepted publickey for deploy from 10.0.0.5 port 51022".into(),
                "Jan 15 23:39:16 server1 sshd[815]: Failed password for root from 203.0.113.7 port 40312".into(),
                "Jan 15 23:39:21 server1 sshd[815]: Connection closed by 203.0.113.7 port 40312".into(),
                "Jan 15 23:40:02 server1 sudo: deploy : TTY=pts/0 ; COMMAND=/usr/bin/systemctl restart app".into(),
                "Jan 15 23:40:09 server1 sshd[831]: Failed password for invalid user admin from 203.0.113.7".into(),
            ],
        );
        m
    }

    /// Create a mock with a sample application log (detailed timestamps with
    /// milliseconds and a zone offset token).
    pub fn with_app_sample() -> Self {
        let mut m = Self::new();
        m.add_file(
            "/var/log/app.log",
            vec![
                "2025-01-15 23:39:05,104 GMT+0000 INFO Starting worker pool".into(),
                "2025-01-15 23:39:16,366 GMT+0000 ERROR Failed to open state file: permission denied".into(),
                "2025-01-15 23:39:18,002 GMT+0000 WARN Retrying in 5 seconds".into(),
                "2025-01-15 23:39:23,771 GMT+0000 ERROR Failed to open state file: permission denied".into(),
                "2025-01-15 23:39:30,009 GMT+0000 INFO State file recovered".into(),
            ],
        );
        m
    }

    /// Create a mock with a sample web-server access log (mid-line bracketed
    /// timestamps with an explicit offset).
    pub fn with_access_sample() -> Self {
        let mut m = Self::new();
        m.add_file(
            "/var/log/access.log",
            vec![
                r#"203.0.113.7 - - [15/Jan/2025:23:38:59 +0000] "GET /login HTTP/1.1" 200 1042"#.into(),
                r#"203.0.113.7 - - [15/Jan/2025:23:39:16 +0000] "POST /login HTTP/1.1" 401 219"#.into(),
                r#"10.0.0.5 - - [15/Jan/2025:23:39:40 +0000] "GET /health HTTP/1.1" 200 13"#.into(),
                r#"203.0.113.7 - - [15/Jan/2025:23:39:55 +0000] "POST /login HTTP/1.1" 500 87"#.into(),
            ],
        );
        m
    }
}

impl Default for MockLogSource {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSource for MockLogSource {
    fn read_lines(&self, path: &str) -> ScanResult<Vec<String>> {
        if self.failing.contains(path) {
            return Err(ScanError::Io(format!("{path}: injected read failure")));
        }
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| ScanError::NotFound(path.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_read_lines() {
        let source = MockLogSource::with_auth_sample();
        let lines = source.read_lines("/var/log/auth.log").unwrap();
        assert_eq!(lines.len(), 5);
        assert!(lines[1].contains("Failed password"));
    }

    #[test]
    fn mock_not_found() {
        let source = MockLogSource::new();
        assert!(source.read_lines("/nonexistent").is_err());
    }

    #[test]
    fn mock_injected_failure() {
        let mut source = MockLogSource::new();
        source.add_file("/var/log/ok.log", vec!["line".into()]);
        source.fail_file("/var/log/bad.log");
        assert!(source.read_lines("/var/log/ok.log").is_ok());
        let err = source.read_lines("/var/log/bad.log").unwrap_err();
        assert!(matches!(err, ScanError::Io(_)));
    }
}

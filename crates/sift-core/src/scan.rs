//! Scan orchestration — walk input files through a `LogSource` and collect
//! annotated matches in arrival order.

use std::sync::Arc;
use tracing::{error, trace};

use crate::annotate::annotate;
use crate::source::LogSource;
use crate::timestamp::TimestampExtractor;
use crate::types::{KeywordRule, Match};

/// Everything one scan produced, including the counts callers need to decide
/// an exit status.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Matches in arrival order: file input order, line order within a file.
    pub matches: Vec<Match>,
    /// Files read to completion.
    pub files_scanned: usize,
    /// Files that could not be read, with the reason.
    pub skipped: Vec<SkippedFile>,
}

/// A file the scan had to give up on. Skipping one file never aborts the
/// rest of the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: String,
    pub reason: String,
}

/// Scan `paths` in the given order against `rules`.
///
/// Lines are trimmed of surrounding whitespace before keyword matching. Read
/// failures are reported, recorded on the outcome, and processing continues
/// with the next file.
pub fn scan_files(
    source: &dyn LogSource,
    paths: &[String],
    rules: &[Arc<KeywordRule>],
    extractor: &TimestampExtractor,
) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();
    for path in paths {
        let lines = match source.read_lines(path) {
            Ok(lines) => lines,
            Err(err) => {
                error!(path = path.as_str(), %err, "skipping unreadable log file");
                outcome.skipped.push(SkippedFile {
                    path: path.clone(),
                    reason: err.to_string(),
                });
                continue;
            }
        };
        outcome.files_scanned += 1;
        for (idx, raw) in lines.iter().enumerate() {
            let text = raw.trim();
            let found = annotate(path, text, rules, extractor);
            if !found.is_empty() {
                trace!(
                    path = path.as_str(),
                    line = idx + 1,
                    hits = found.len(),
                    "line matched"
                );
                outcome.matches.extend(found);
            }
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockLogSource;
    use chrono::NaiveDate;

    fn rules() -> Vec<Arc<KeywordRule>> {
        vec![
            Arc::new(KeywordRule::new("Login Failure", ["Failed password"])),
            Arc::new(KeywordRule::new("Server Errors", ["500", "ERROR"])),
        ]
    }

    #[test]
    fn collects_matches_in_arrival_order() {
        let mut source = MockLogSource::with_auth_sample();
        source.add_file(
            "/var/log/access.log",
            vec![r#"203.0.113.7 - - [15/Jan/2025:23:39:55 +0000] "POST /login HTTP/1.1" 500 87"#.into()],
        );

        let paths = vec!["/var/log/auth.log".to_string(), "/var/log/access.log".to_string()];
        let outcome = scan_files(&source, &paths, &rules(), &TimestampExtractor::new(2025));

        assert_eq!(outcome.files_scanned, 2);
        assert!(outcome.skipped.is_empty());
        let sources: Vec<_> = outcome.matches.iter().map(|m| m.source.as_str()).collect();
        // Both auth matches arrive before the access-log match.
        assert_eq!(
            sources,
            vec!["/var/log/auth.log", "/var/log/auth.log", "/var/log/access.log"]
        );
    }

    #[test]
    fn unreadable_file_skipped_others_still_scanned() {
        let mut source = MockLogSource::with_auth_sample();
        source.add_file("/var/log/other.log", vec!["ERROR disk full".into()]);
        source.fail_file("/var/log/broken.log");

        let paths = vec![
            "/var/log/auth.log".to_string(),
            "/var/log/broken.log".to_string(),
            "/var/log/other.log".to_string(),
        ];
        let outcome = scan_files(&source, &paths, &rules(), &TimestampExtractor::new(2025));

        assert_eq!(outcome.files_scanned, 2);
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped[0].path, "/var/log/broken.log");
        assert!(outcome.matches.iter().any(|m| m.source == "/var/log/auth.log"));
        assert!(outcome.matches.iter().any(|m| m.source == "/var/log/other.log"));
    }

    #[test]
    fn missing_file_recorded_as_skip() {
        let source = MockLogSource::new();
        let paths = vec!["/var/log/ghost.log".to_string()];
        let outcome = scan_files(&source, &paths, &rules(), &TimestampExtractor::new(2025));
        assert_eq!(outcome.files_scanned, 0);
        assert_eq!(outcome.skipped.len(), 1);
        assert!(outcome.skipped[0].reason.contains("not found"));
    }

    #[test]
    fn lines_trimmed_before_matching() {
        let mut source = MockLogSource::new();
        source.add_file("/var/log/pad.log", vec!["   ERROR at edge\t".into()]);
        let paths = vec!["/var/log/pad.log".to_string()];
        let outcome = scan_files(&source, &paths, &rules(), &TimestampExtractor::new(2025));
        assert_eq!(outcome.matches.len(), 1);
        assert_eq!(outcome.matches[0].line, "ERROR at edge");
    }

    #[test]
    fn app_log_matches_carry_millisecond_timestamps() {
        let source = MockLogSource::with_app_sample();
        let rules = vec![Arc::new(KeywordRule::new(
            "State File",
            ["Failed to open state file"],
        ))];
        let paths = vec!["/var/log/app.log".to_string()];
        let outcome = scan_files(&source, &paths, &rules, &TimestampExtractor::new(2025));

        assert_eq!(outcome.matches.len(), 2);
        let expected = NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_milli_opt(23, 39, 16, 366)
            .unwrap()
            .and_utc();
        assert_eq!(outcome.matches[0].timestamp, Some(expected));
    }

    #[test]
    fn access_log_matches_carry_bracketed_timestamps() {
        let source = MockLogSource::with_access_sample();
        let paths = vec!["/var/log/access.log".to_string()];
        let outcome = scan_files(&source, &paths, &rules(), &TimestampExtractor::new(2025));

        assert_eq!(outcome.matches.len(), 1);
        assert!(outcome.matches[0].line.contains("500"));
        let expected = NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(23, 39, 55)
            .unwrap()
            .and_utc();
        assert_eq!(outcome.matches[0].timestamp, Some(expected));
    }

    #[test]
    fn no_rules_means_no_matches() {
        let source = MockLogSource::with_auth_sample();
        let paths = vec!["/var/log/auth.log".to_string()];
        let outcome = scan_files(&source, &paths, &[], &TimestampExtractor::new(2025));
        assert_eq!(outcome.files_scanned, 1);
        assert!(outcome.matches.is_empty());
    }
}

//! Wildcard expansion of log path patterns.

use tracing::warn;

/// Expand `--log` patterns into concrete file paths.
///
/// Pattern order is preserved; within one pattern, `glob` yields paths
/// alphabetically, so the arrival order fed to the scanner is deterministic.
/// An invalid pattern contributes zero files and the run continues, as does a
/// pattern that matches nothing.
pub fn expand_patterns(patterns: &[String]) -> Vec<String> {
    let mut files = Vec::new();
    for pattern in patterns {
        let paths = match glob::glob(pattern) {
            Ok(paths) => paths,
            Err(err) => {
                warn!(pattern = pattern.as_str(), %err, "skipping unusable pattern");
                continue;
            }
        };
        let mut matched = Vec::new();
        for entry in paths {
            match entry {
                Ok(path) => matched.push(path.to_string_lossy().into_owned()),
                Err(err) => {
                    warn!(pattern = pattern.as_str(), %err, "skipping unreadable glob entry");
                }
            }
        }
        if matched.is_empty() {
            warn!(pattern = pattern.as_str(), "no files found matching pattern");
        }
        files.extend(matched);
    }
    files
}

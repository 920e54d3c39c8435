//! Core data types for keyword scanning.

use chrono::{DateTime, Utc};
use std::sync::Arc;

/// One keyword rule: a human-readable description plus the literal substrings
/// that trigger it.
///
/// Loaded once at startup from a definition file and never mutated. Both the
/// description and the keyword set are non-empty after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule {
    pub description: String,
    pub keywords: Vec<String>,
}

impl KeywordRule {
    pub fn new(
        description: impl Into<String>,
        keywords: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            description: description.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    /// True if any keyword of this rule occurs in the line.
    ///
    /// Exact, case-sensitive substring match — the configured keyword is
    /// matched literally, with no normalization.
    pub fn matches(&self, line: &str) -> bool {
        self.keywords.iter().any(|k| line.contains(k.as_str()))
    }
}

/// One (line, rule) pairing produced by the annotator.
///
/// A line that triggers several rules yields several `Match` records, all
/// sharing the same `timestamp` value: the timestamp is extracted once per
/// line, so a line cannot sort differently depending on which rule hit it.
#[derive(Debug, Clone)]
pub struct Match {
    /// The rule that matched. Shared, not copied, so rule identity survives
    /// into per-rule output routing.
    pub rule: Arc<KeywordRule>,
    /// Identifier of the file the line came from.
    pub source: String,
    /// The matched line, trimmed of surrounding whitespace.
    pub line: String,
    /// Point in time extracted from the line, or `None` when no recognizer
    /// matched.
    pub timestamp: Option<DateTime<Utc>>,
}

//! Keyword rule loading from definition text.

use std::sync::Arc;
use tracing::warn;

use crate::types::KeywordRule;

/// Result of parsing a keyword definition source: the loaded rules in file
/// order plus the lines that failed validation.
#[derive(Debug, Default)]
pub struct RuleSet {
    pub rules: Vec<Arc<KeywordRule>>,
    pub skipped: Vec<SkippedLine>,
}

/// A definition line that was rejected, kept for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line_number: usize,
    pub text: String,
}

/// Parse keyword definitions, one rule per line:
/// `description:keyword1 keyword2 ...`.
///
/// A line is well-formed when it has exactly one `:`, a non-empty description
/// on the left, and at least one whitespace-separated keyword on the right.
/// Malformed lines are reported and skipped; blank lines are skipped
/// silently. Loading never fails outright.
pub fn parse_rules(content: &str) -> RuleSet {
    let mut set = RuleSet::default();
    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        match parse_definition(line) {
            Some(rule) => set.rules.push(Arc::new(rule)),
            None => {
                warn!(line = idx + 1, text = line, "invalid line in keywords file");
                set.skipped.push(SkippedLine {
                    line_number: idx + 1,
                    text: line.to_string(),
                });
            }
        }
    }
    set
}

fn parse_definition(line: &str) -> Option<KeywordRule> {
    let mut parts = line.split(':');
    let description = parts.next()?.trim();
    let keywords = parts.next()?;
    if parts.next().is_some() {
        // more than one ':'
        return None;
    }
    let keywords: Vec<String> = keywords.split_whitespace().map(String::from).collect();
    if description.is_empty() || keywords.is_empty() {
        return None;
    }
    Some(KeywordRule {
        description: description.to_string(),
        keywords,
    })
}

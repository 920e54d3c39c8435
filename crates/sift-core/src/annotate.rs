//! Match annotation — which rules hit a line, stamped with its timestamp.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::timestamp::TimestampExtractor;
use crate::types::{KeywordRule, Match};

/// Test every rule against one line and package the hits.
///
/// Rules are tested in loaded order; a rule with several matching keywords
/// still yields a single `Match`. The timestamp is extracted at most once per
/// line (on the first hit) and shared by every `Match` for that line, so a
/// line cannot sort differently depending on which rule matched it.
pub fn annotate(
    source: &str,
    text: &str,
    rules: &[Arc<KeywordRule>],
    extractor: &TimestampExtractor,
) -> Vec<Match> {
    let mut matches = Vec::new();
    let mut timestamp: Option<Option<DateTime<Utc>>> = None;
    for rule in rules {
        if rule.matches(text) {
            let ts = *timestamp.get_or_insert_with(|| extractor.extract(text));
            matches.push(Match {
                rule: Arc::clone(rule),
                source: source.to_string(),
                line: text.to_string(),
                timestamp: ts,
            });
        }
    }
    matches
}

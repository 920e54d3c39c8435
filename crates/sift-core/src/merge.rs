//! Chronological merge of matches across all scanned files.

use chrono::{DateTime, Utc};

use crate::types::Match;

/// Merge matches from every file into one time-ordered sequence.
///
/// Matches without a timestamp sort on the sentinel
/// `DateTime::<Utc>::MIN_UTC`, the earliest representable instant, so they
/// come first. The sort is stable, which makes arrival order (file input
/// order, then line order within a file, then rule order within a line) the
/// tie-break for equal keys. The result is a total order over all matches
/// combined, deterministic for identical inputs; it is not a per-file sort
/// followed by concatenation.
pub fn merge_chronological(mut matches: Vec<Match>) -> Vec<Match> {
    matches.sort_by_key(sort_key);
    matches
}

fn sort_key(m: &Match) -> DateTime<Utc> {
    m.timestamp.unwrap_or(DateTime::<Utc>::MIN_UTC)
}

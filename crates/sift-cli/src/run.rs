//! End-to-end scan pipeline behind the CLI surface.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use sift_core::{merge, rules, scan, FileLogSource, TimestampExtractor};
use tracing::{info, warn};

use crate::cli::Cli;
use crate::expand;
use crate::output;

/// Counters reported by a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub match_count: usize,
}

/// Scan the configured files and render matches to `out`.
///
/// Errors only before scanning starts: nothing to scan, or an unreadable
/// keywords file. Past that point failures degrade per file or per line and
/// the run completes.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<RunSummary> {
    let files = expand::expand_patterns(&cli.log);
    if files.is_empty() {
        bail!("no log files found matching the provided patterns");
    }

    let content = std::fs::read_to_string(&cli.keywords)
        .with_context(|| format!("reading keywords file {}", cli.keywords.display()))?;
    let rule_set = rules::parse_rules(&content);
    for rule in &rule_set.rules {
        info!(
            description = rule.description.as_str(),
            keywords = ?rule.keywords,
            "loaded keyword rule"
        );
    }
    if rule_set.rules.is_empty() {
        warn!("no valid keyword rules loaded");
    }

    let extractor = TimestampExtractor::from_system_time();
    let outcome = scan::scan_files(&FileLogSource, &files, &rule_set.rules, &extractor);
    if outcome.files_scanned == 0 {
        bail!("all {} input files were unreadable", files.len());
    }

    let summary = RunSummary {
        files_scanned: outcome.files_scanned,
        files_skipped: outcome.skipped.len(),
        match_count: outcome.matches.len(),
    };

    // Per-rule files always route merged matches; stdout merges only when
    // chronological mode asked for it.
    let matches = if cli.keyword_files || cli.chrono {
        merge::merge_chronological(outcome.matches)
    } else {
        outcome.matches
    };

    let rendered = if cli.keyword_files {
        output::write_rule_files(Path::new("."), &rule_set.rules, &matches).map(|_| ())
    } else if cli.match_only {
        output::render_match_only(out, &matches)
    } else if cli.chrono {
        output::render_chronological(out, &matches)
    } else {
        output::render_default(out, &matches)
    };
    if let Err(err) = rendered {
        // A closed pipe downstream is routine; no write error fails a
        // completed scan.
        if err.kind() != io::ErrorKind::BrokenPipe {
            warn!(%err, "output truncated");
        }
    }

    info!(
        files_scanned = summary.files_scanned,
        files_skipped = summary.files_skipped,
        matches = summary.match_count,
        "scan complete"
    );
    Ok(summary)
}

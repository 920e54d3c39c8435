//! Output rendering — combined stdout streams and per-rule match files.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use sift_core::{KeywordRule, Match};
use tracing::info;

const SEPARATOR: &str =
    "--------------------------------------------------------------------------------";

/// Default mode: the file name once per file (arrival order keeps each
/// file's matches contiguous), then description + line + separator per
/// match. The header prints even when nothing matched.
pub fn render_default(out: &mut impl Write, matches: &[Match]) -> io::Result<()> {
    writeln!(out, "Occurrences of keywords in log files:")?;
    let mut current_file: Option<&str> = None;
    for m in matches {
        if current_file != Some(m.source.as_str()) {
            writeln!(out, "\nFrom file: {}", m.source)?;
            current_file = Some(m.source.as_str());
        }
        writeln!(out, "\nDescription: {}", m.rule.description)?;
        writeln!(out, "Log entry: {}", m.line)?;
        writeln!(out, "{SEPARATOR}")?;
    }
    Ok(())
}

/// Chronological mode: header only when something matched; the source file
/// repeats on every match because interleaving can change it at every line.
pub fn render_chronological(out: &mut impl Write, matches: &[Match]) -> io::Result<()> {
    if matches.is_empty() {
        return Ok(());
    }
    writeln!(out, "\nMatches in chronological order:")?;
    for m in matches {
        writeln!(out, "\nFrom file: {}", m.source)?;
        writeln!(out, "\nDescription: {}", m.rule.description)?;
        writeln!(out, "Log entry: {}", m.line)?;
        writeln!(out, "{SEPARATOR}")?;
    }
    Ok(())
}

/// Match-only mode: raw matched lines, nothing else.
pub fn render_match_only(out: &mut impl Write, matches: &[Match]) -> io::Result<()> {
    for m in matches {
        writeln!(out, "{}", m.line)?;
    }
    Ok(())
}

/// Write each rule's matches to `<description>_matches.csv` under `dir`, one
/// raw matched line per record. Rules without matches produce no file.
/// Matches are routed by rule identity, so a line that hit two rules lands in
/// both files. Rules whose descriptions sanitize to the same file name share
/// that file, keeping every rule's records.
pub fn write_rule_files(
    dir: &Path,
    rules: &[Arc<KeywordRule>],
    matches: &[Match],
) -> io::Result<Vec<PathBuf>> {
    // Descriptions are not unique; each target file is created exactly once.
    let mut groups: Vec<(PathBuf, Vec<&Arc<KeywordRule>>)> = Vec::new();
    for rule in rules {
        let path = dir.join(format!("{}_matches.csv", sanitize(&rule.description)));
        match groups.iter_mut().find(|(existing, _)| *existing == path) {
            Some((_, members)) => members.push(rule),
            None => groups.push((path, vec![rule])),
        }
    }

    let mut written = Vec::new();
    for (path, members) in groups {
        let lines: Vec<&str> = matches
            .iter()
            .filter(|m| members.iter().any(|rule| Arc::ptr_eq(&m.rule, rule)))
            .map(|m| m.line.as_str())
            .collect();
        if lines.is_empty() {
            continue;
        }
        info!(
            rules = members.len(),
            count = lines.len(),
            path = %path.display(),
            "writing rule matches"
        );
        let mut file = std::fs::File::create(&path)?;
        for line in &lines {
            writeln!(file, "{line}")?;
        }
        written.push(path);
    }
    Ok(written)
}

fn sanitize(description: &str) -> String {
    description
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

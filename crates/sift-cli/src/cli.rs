//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Scan log files for configured keywords.
///
/// Each match prints the keyword's description alongside the matching line.
/// With `--chrono`, matches from all files merge into a single stream ordered
/// by timestamps parsed from the lines themselves.
#[derive(Debug, Parser)]
#[command(name = "logsift", version, about, long_about = None)]
pub struct Cli {
    /// Log file path or glob pattern. May be given multiple times.
    #[arg(long = "log", value_name = "PATH", required = true)]
    pub log: Vec<String>,

    /// Keyword definition file, one `description:keyword1 keyword2 ...` rule
    /// per line.
    #[arg(long, value_name = "FILE")]
    pub keywords: PathBuf,

    /// Sort matches from all files chronologically.
    #[arg(long)]
    pub chrono: bool,

    /// Print raw matched lines without formatting.
    #[arg(long)]
    pub match_only: bool,

    /// Write each rule's matches to its own file instead of stdout.
    #[arg(long)]
    pub keyword_files: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

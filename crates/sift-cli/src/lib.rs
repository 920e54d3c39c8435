//! logsift CLI — library crate behind the `logsift` binary.
//!
//! Exposes the argument surface and the run pipeline so integration tests
//! can drive a full scan without spawning the binary.

pub mod cli;
pub mod expand;
pub mod output;
pub mod run;

// Re-export key types for convenience
pub use cli::Cli;
pub use run::{run, RunSummary};

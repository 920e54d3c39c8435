//! Keyword scanning and chronological merge engine for logsift.
//!
//! Lines are annotated against keyword rules and stamped with a comparable
//! timestamp parsed from the line itself (eight recognized dialects).
//! Matches from many files merge into one stable, time-ordered stream. File
//! reading goes through a `LogSource` abstraction so everything above it can
//! be tested on in-memory data.

pub mod annotate;
pub mod error;
pub mod merge;
pub mod mock;
pub mod rules;
pub mod scan;
pub mod source;
pub mod timestamp;
pub mod types;

// Re-export key types for convenience
pub use error::{ScanError, ScanResult};
pub use mock::MockLogSource;
pub use rules::RuleSet;
pub use scan::{ScanOutcome, SkippedFile};
pub use source::{FileLogSource, LogSource};
pub use timestamp::TimestampExtractor;
pub use types::{KeywordRule, Match};

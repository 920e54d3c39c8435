//! Timestamp extraction from heterogeneous log lines.
//!
//! A fixed-priority chain of format recognizers turns a raw line into a
//! comparable `DateTime<Utc>`, or `None` when nothing date-like is found.
//! Values with an explicit offset are normalized to UTC; zone-less values
//! are taken as UTC wall-clock, so sources that log local time in different
//! zones can interleave out of order (inherited ambiguity, kept as-is).

use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;

// 2025-01-15 23:39:16,366 GMT+0000 (offset token optional)
static RE_DETAILED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2},\d{3})(?: ?(?:GMT|UTC)?([+-])(\d{2})(\d{2}))?")
        .unwrap()
});

// 2025-01-15T23:39:16.366Z / +02:00 / +0200, also found mid-line
static RE_ISO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(?:\.\d{1,9})?(?:Z|[+-]\d{2}:?\d{2}))")
        .unwrap()
});

// Jan 15 23:39:16 (no year in the line)
static RE_SYSLOG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z][a-z]{2}\s+\d{1,2}\s+\d{2}:\d{2}:\d{2})").unwrap());

// 15/Jan/2025:23:39:16 +0000, sits mid-line in access logs
static RE_ACCESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{2}/[A-Z][a-z]{2}/\d{4}:\d{2}:\d{2}:\d{2} [+-]\d{4})").unwrap()
});

// Wed Jan 15 23:39:16 2025 (weekday matched but not validated)
static RE_DATE_CMD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][a-z]{2} ([A-Z][a-z]{2}\s+\d{1,2}\s+\d{2}:\d{2}:\d{2}\s+\d{4})").unwrap()
});

// 2025/01/15 23:39:16
static RE_SLASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4}/\d{2}/\d{2}\s+\d{2}:\d{2}:\d{2})").unwrap());

// 15-Jan-2025 23:39:16
static RE_DASH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2}-[A-Z][a-z]{2}-\d{4}\s+\d{2}:\d{2}:\d{2})").unwrap()
});

type Recognizer = fn(&str, i32) -> Option<DateTime<Utc>>;

// Tried in order; the first successful parse wins. Line-leading dialects are
// anchored to the start of the (trimmed) line, mid-line dialects float.
const RECOGNIZERS: [Recognizer; 8] = [
    detailed_local,
    iso_8601,
    syslog_short,
    access_log,
    date_command,
    slash_delimited,
    dash_delimited,
    epoch_seconds,
];

/// Extracts timestamps from raw log lines.
///
/// The year used to complete short, year-less dialects (`Jan 15 23:39:16`)
/// is captured once at construction so results stay deterministic under an
/// injected clock.
pub struct TimestampExtractor {
    year: i32,
}

impl TimestampExtractor {
    pub fn new(year: i32) -> Self {
        Self { year }
    }

    /// Extractor inferring short-format years from the system clock.
    pub fn from_system_time() -> Self {
        Self::new(Utc::now().year())
    }

    /// Try every recognizer in priority order. Never panics; lines without a
    /// recognizable timestamp yield `None`.
    pub fn extract(&self, line: &str) -> Option<DateTime<Utc>> {
        RECOGNIZERS
            .iter()
            .find_map(|recognize| recognize(line, self.year))
    }
}

/// `2025-01-15 23:39:16,366 GMT+0000` with the offset token optional;
/// milliseconds carry into the comparison key.
fn detailed_local(line: &str, _year: i32) -> Option<DateTime<Utc>> {
    let caps = RE_DETAILED.captures(line)?;
    let naive = NaiveDateTime::parse_from_str(&caps[1], "%Y-%m-%d %H:%M:%S,%3f").ok()?;
    match caps.get(2) {
        Some(sign) => {
            let offset = fixed_offset(sign.as_str(), &caps[3], &caps[4])?;
            naive
                .and_local_timezone(offset)
                .single()
                .map(|dt| dt.with_timezone(&Utc))
        }
        None => Some(naive.and_utc()),
    }
}

/// Full ISO-8601 / RFC 3339 with a `Z` or numeric offset suffix.
fn iso_8601(line: &str, _year: i32) -> Option<DateTime<Utc>> {
    let caps = RE_ISO.captures(line)?;
    let token = &caps[1];
    DateTime::parse_from_rfc3339(token)
        .ok()
        // RFC 3339 wants a colon in the offset; `%z` also takes `+0000`.
        .or_else(|| DateTime::parse_from_str(token, "%Y-%m-%dT%H:%M:%S%.f%z").ok())
        .map(|dt| dt.with_timezone(&Utc))
}

/// `Jan 15 23:39:16` with the year injected. Anchored, so the
/// weekday-prefixed form falls through to `date_command` instead of being
/// read here with the wrong year.
fn syslog_short(line: &str, year: i32) -> Option<DateTime<Utc>> {
    let caps = RE_SYSLOG.captures(line)?;
    let with_year = format!("{year} {}", &caps[1]);
    NaiveDateTime::parse_from_str(&with_year, "%Y %b %e %H:%M:%S")
        .ok()
        .map(|ndt| ndt.and_utc())
}

/// `15/Jan/2025:23:39:16 +0000`, bracketed mid-line in access logs.
fn access_log(line: &str, _year: i32) -> Option<DateTime<Utc>> {
    let caps = RE_ACCESS.captures(line)?;
    DateTime::parse_from_str(&caps[1], "%d/%b/%Y:%H:%M:%S %z")
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// `Wed Jan 15 23:39:16 2025`, unix `date` output. The weekday token is
/// required by the shape but not checked against the calendar.
fn date_command(line: &str, _year: i32) -> Option<DateTime<Utc>> {
    let caps = RE_DATE_CMD.captures(line)?;
    NaiveDateTime::parse_from_str(&caps[1], "%b %e %H:%M:%S %Y")
        .ok()
        .map(|ndt| ndt.and_utc())
}

/// `2025/01/15 23:39:16`.
fn slash_delimited(line: &str, _year: i32) -> Option<DateTime<Utc>> {
    let caps = RE_SLASH.captures(line)?;
    NaiveDateTime::parse_from_str(&caps[1], "%Y/%m/%d %H:%M:%S")
        .ok()
        .map(|ndt| ndt.and_utc())
}

/// `15-Jan-2025 23:39:16`.
fn dash_delimited(line: &str, _year: i32) -> Option<DateTime<Utc>> {
    let caps = RE_DASH.captures(line)?;
    NaiveDateTime::parse_from_str(&caps[1], "%d-%b-%Y %H:%M:%S")
        .ok()
        .map(|ndt| ndt.and_utc())
}

/// A 9-10 digit Unix epoch standing alone as a whitespace-delimited token.
/// Last in the chain so it never shadows a structured dialect.
fn epoch_seconds(line: &str, _year: i32) -> Option<DateTime<Utc>> {
    line.split_whitespace()
        .find(|token| {
            (9..=10).contains(&token.len()) && token.bytes().all(|b| b.is_ascii_digit())
        })
        .and_then(|token| token.parse::<i64>().ok())
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
}

fn fixed_offset(sign: &str, hours: &str, minutes: &str) -> Option<FixedOffset> {
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    let mut secs = hours * 3600 + minutes * 60;
    if sign == "-" {
        secs = -secs;
    }
    FixedOffset::east_opt(secs)
}

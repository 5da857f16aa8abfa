use std::fmt::{Display, Formatter};
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One entry of the author-id-augmented `subject.txt` index:
/// `{key}.dat<>{title} [{author_id}★] ({response_count})`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadSummary {
    pub key: i64,
    pub title: String,
    pub response_count: i32,
    pub author_id: String,
}

fn subject_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{9,10})\.dat<>(.*) \[(.{4,13})★\] \((\d{1,5})\)$").unwrap())
}

impl ThreadSummary {
    /// Parses a single index line. Lines that do not match the fixed
    /// pattern yield `None`; so does a matching line whose digits fail
    /// integer parsing. Never an error: index files interleave comment
    /// and metadata lines that are expected noise.
    pub fn from_line(line: &str) -> Option<ThreadSummary> {
        let caps = subject_line_re().captures(line)?;
        Some(ThreadSummary {
            key: caps[1].parse().ok()?,
            title: caps[2].to_string(),
            author_id: caps[3].to_string(),
            response_count: caps[4].parse().ok()?,
        })
    }

    /// Thread keys double as creation times in Unix seconds.
    pub fn created_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.key, 0).unwrap_or_default()
    }
}

impl Display for ThreadSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.dat<>{} [{}★] ({})",
            self.key, self.title, self.author_id, self.response_count
        )
    }
}

/// Parses a full `subject.txt` payload, one thread per line, in file
/// order. Trailing `\r`s are stripped per line, so a CRLF payload
/// parses like an LF one; malformed lines are dropped, not surfaced.
pub fn parse_subject(text: &str) -> Vec<ThreadSummary> {
    let threads: Vec<ThreadSummary> = text
        .split('\n')
        .map(|line| line.trim_end_matches('\r'))
        .filter_map(ThreadSummary::from_line)
        .collect();
    debug!(
        "parsed subject.txt: {} threads from {} lines",
        threads.len(),
        text.split('\n').count()
    );
    threads
}

//! Query path validation and parsing.

use crate::error::{Error, Result};
use std::fmt;

/// A segment in a query path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Named map-key access (e.g., "hello", "under_score").
    Key(String),
    /// Numeric access: a sequence index or an integer map key (e.g., "0").
    Index(u64),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(s) => write!(f, "{s}"),
            PathSegment::Index(n) => write!(f, "{n}"),
        }
    }
}

/// A parsed query path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPath {
    /// The segments that make up this path.
    pub segments: Vec<PathSegment>,
}

/// Check whether a query string matches the dot-query language.
///
/// Valid queries are non-empty, contain only ASCII alphanumerics,
/// underscores, and `.` separators, do not begin or end with a separator,
/// and contain no empty segments (`..`).
pub fn is_valid_query(query: &str) -> bool {
    !query.is_empty()
        && query
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'.')
        && !query.starts_with('.')
        && !query.ends_with('.')
        && !query.contains("..")
}

impl QueryPath {
    /// Parse a dot-notation query path.
    ///
    /// Fully numeric segments become [`PathSegment::Index`]. The coercion is
    /// irreversible: a numeric segment addresses sequence positions and
    /// integer map keys, so a map entry keyed by the *string* `"1"` can never
    /// be reached. Callers must know their schema.
    ///
    /// # Examples
    ///
    /// - `"hello.salute"` → `[Key("hello"), Key("salute")]`
    /// - `"3.four.success"` → `[Index(3), Key("four"), Key("success")]`
    pub fn parse(input: &str) -> Result<Self> {
        if !is_valid_query(input) {
            return Err(Error::InvalidQueryString(input.to_string()));
        }

        let segments = input.split('.').map(Self::parse_segment).collect();

        Ok(QueryPath { segments })
    }

    /// Parse a single path segment.
    fn parse_segment(s: &str) -> PathSegment {
        // Digits-only means numeric access. A digit run too long for u64
        // falls back to a named key rather than truncating.
        if s.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(idx) = s.parse::<u64>() {
                return PathSegment::Index(idx);
            }
        }

        PathSegment::Key(s.to_string())
    }
}

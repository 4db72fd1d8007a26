//! Error types for dotq.

use crate::query::PathSegment;
use crate::value::Value;
use thiserror::Error;

/// Result type alias for dotq operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A single query segment that failed to resolve.
///
/// This is the traversal loop's miss signal: each lookup step either descends
/// or reports the segment and the sub-structure it missed in. It reaches
/// callers only as the source of [`Error::DoesNotExist`].
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Key not found in data: key='{key}', data={at:?}")]
pub struct KeyNotFound {
    /// The segment that failed to resolve.
    pub key: PathSegment,
    /// The sub-structure the segment was resolved against.
    pub at: Value,
}

/// Errors that can occur in dotq.
#[derive(Error, Debug)]
pub enum Error {
    /// The query does not match the dot-query language.
    #[error("Query must match the dot-query language: query='{0}'")]
    InvalidQueryString(String),

    /// The root value is not a mapping or a sequence.
    #[error("Value is not searchable: type={0}")]
    InvalidDataType(&'static str),

    /// The query is valid but nothing matches it, and no default was given.
    #[error("No value matches query: query='{query}', key='{}', data={searchable:?}", .source.key)]
    DoesNotExist {
        /// The valid query that had no matching value.
        query: String,
        /// The data that was queried. Carried for diagnostics; costly for
        /// large structures.
        searchable: Value,
        /// The per-segment failure that ended traversal.
        #[source]
        source: KeyNotFound,
    },
}

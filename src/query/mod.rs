//! Query engine module for dot-notation queries.

mod engine;
mod path;

pub use engine::{exists, get, get_or};
pub use path::{PathSegment, QueryPath, is_valid_query};

//! Query execution engine.

use crate::error::{Error, KeyNotFound, Result};
use crate::query::path::{PathSegment, QueryPath};
use crate::value::{Key, Value};

/// Outcome of walking a full path: the borrowed value, or the first miss.
type Walk<'a> = std::result::Result<&'a Value, KeyNotFound>;

/// Get the value at `query` inside `searchable`.
///
/// Fails with [`Error::InvalidDataType`] if the root is not a mapping or a
/// sequence, [`Error::InvalidQueryString`] if the query is malformed, and
/// [`Error::DoesNotExist`] if traversal misses. The returned borrow is the
/// stored value itself, uncopied.
pub fn get<'a>(searchable: &'a Value, query: &str) -> Result<&'a Value> {
    match walk(searchable, query)? {
        Ok(found) => Ok(found),
        Err(missing) => Err(Error::DoesNotExist {
            query: query.to_string(),
            searchable: searchable.clone(),
            source: missing,
        }),
    }
}

/// Get the value at `query`, or `default` on a miss.
///
/// The default is returned for any miss, including defaults that are
/// themselves zero, empty, or `false`; traversal stops at the first failing
/// segment. The two validation errors still fail and are never defaulted.
pub fn get_or<'a>(searchable: &'a Value, query: &str, default: &'a Value) -> Result<&'a Value> {
    Ok(walk(searchable, query)?.unwrap_or(default))
}

/// Whether [`get`] would find a value for `query`.
///
/// A present entry reports `true` regardless of its value, so entries holding
/// `Null`, `false`, or an empty string count. Validation errors propagate.
pub fn exists(searchable: &Value, query: &str) -> Result<bool> {
    Ok(walk(searchable, query)?.is_ok())
}

/// Validate the inputs, then walk the path one segment at a time.
fn walk<'a>(searchable: &'a Value, query: &str) -> Result<Walk<'a>> {
    if !searchable.is_searchable() {
        return Err(Error::InvalidDataType(searchable.kind_name()));
    }

    let path = QueryPath::parse(query)?;

    let mut current = searchable;
    for segment in &path.segments {
        match lookup(current, segment) {
            Ok(next) => current = next,
            Err(missing) => return Ok(Err(missing)),
        }
    }

    Ok(Ok(current))
}

/// Resolve one segment against the current sub-structure.
///
/// Mappings are an existence check on the key (an entry holding `Null` still
/// resolves), with numeric segments addressing integer keys. Sequences accept
/// only in-bounds numeric segments. Scalars resolve nothing.
fn lookup<'a>(current: &'a Value, segment: &PathSegment) -> Walk<'a> {
    let found = match (current, segment) {
        (Value::Map(entries), PathSegment::Key(name)) => entries.get(&Key::Str(name.clone())),
        (Value::Map(entries), PathSegment::Index(idx)) => entries.get(&Key::Int(*idx)),
        (Value::Array(items), PathSegment::Index(idx)) => {
            usize::try_from(*idx).ok().and_then(|i| items.get(i))
        }
        // Named segments cannot index a sequence, and scalars end traversal.
        _ => None,
    };

    found.ok_or_else(|| KeyNotFound {
        key: segment.clone(),
        at: current.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn fixture() -> Value {
        Value::from(json!({
            "hello": { "salute": 1 },
            "list": [1, 2, "three"]
        }))
    }

    #[test]
    fn test_get_nested_map_value() {
        let data = fixture();
        assert_eq!(get(&data, "hello.salute").unwrap(), &Value::Int(1));
    }

    #[test]
    fn test_get_sequence_element() {
        let data = fixture();
        assert_eq!(get(&data, "list.2").unwrap(), &Value::String("three".into()));
    }

    #[test]
    fn test_get_integer_map_key() {
        let data = Value::Map(BTreeMap::from([(
            Key::Str("doints".into()),
            Value::Map(BTreeMap::from([(Key::Int(1), Value::Bool(true))])),
        )]));
        assert_eq!(get(&data, "doints.1").unwrap(), &Value::Bool(true));
    }

    #[test]
    fn test_numeric_segment_skips_string_keys() {
        // "1" coerces to integer access and must not match the string key "1".
        let data = Value::from(json!({"outer": {"1": "stringly"}}));
        assert!(matches!(
            get(&data, "outer.1"),
            Err(Error::DoesNotExist { .. })
        ));
    }

    #[test]
    fn test_get_missing_key() {
        let data = fixture();
        match get(&data, "hello.missing") {
            Err(Error::DoesNotExist { query, source, .. }) => {
                assert_eq!(query, "hello.missing");
                assert_eq!(source.key, PathSegment::Key("missing".into()));
                assert_eq!(source.at, Value::from(json!({"salute": 1})));
            }
            other => panic!("expected DoesNotExist, got {other:?}"),
        }
    }

    #[test]
    fn test_get_index_out_of_bounds() {
        let data = fixture();
        assert!(matches!(get(&data, "list.10"), Err(Error::DoesNotExist { .. })));
    }

    #[test]
    fn test_get_descends_into_scalar() {
        let data = fixture();
        assert!(matches!(
            get(&data, "hello.salute.deeper"),
            Err(Error::DoesNotExist { .. })
        ));
    }

    #[test]
    fn test_get_rejects_invalid_query() {
        let data = fixture();
        assert!(matches!(
            get(&data, "hello..salute"),
            Err(Error::InvalidQueryString(_))
        ));
    }

    #[test]
    fn test_get_rejects_scalar_root() {
        assert!(matches!(
            get(&Value::Int(3), "anything"),
            Err(Error::InvalidDataType("int"))
        ));
    }

    #[test]
    fn test_scalar_root_reported_before_query_syntax() {
        assert!(matches!(
            get(&Value::Int(3), "bad..query"),
            Err(Error::InvalidDataType("int"))
        ));
    }

    #[test]
    fn test_get_or_returns_default_on_miss() {
        let data = fixture();
        let default = Value::String("d".into());
        assert_eq!(get_or(&data, "hello.saluted", &default).unwrap(), &default);
        assert_eq!(get_or(&data, "i.dont.exist", &default).unwrap(), &default);
    }

    #[test]
    fn test_get_or_ignores_default_on_hit() {
        let data = fixture();
        let default = Value::String("d".into());
        assert_eq!(get_or(&data, "hello.salute", &default).unwrap(), &Value::Int(1));
    }

    #[test]
    fn test_get_or_returns_falsy_defaults() {
        let data = fixture();
        let zero = Value::Int(0);
        assert_eq!(get_or(&data, "hello.saluted", &zero).unwrap(), &Value::Int(0));
    }

    #[test]
    fn test_get_or_still_rejects_invalid_query() {
        let data = fixture();
        assert!(matches!(
            get_or(&data, "hello..salute", &Value::Null),
            Err(Error::InvalidQueryString(_))
        ));
    }

    #[test]
    fn test_exists_sees_null_entries() {
        let data = Value::from(json!({"present": null}));
        assert!(exists(&data, "present").unwrap());
        assert!(!exists(&data, "absent").unwrap());
    }
}

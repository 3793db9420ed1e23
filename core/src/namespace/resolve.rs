//! Value resolver — the inverse of the namespace builder.
//!
//! Walks a value along namespace segments and returns the leaf they
//! address. Unresolvable input yields `None`, never an error or a panic.

use tracing::trace;

use super::fields;
use crate::types::{StructValue, Value};


/// Resolve `namespace` (without the prefix it was derived under) against
/// `object`.
///
/// Struct fields are matched by tag-derived name first, then by declared
/// name, each also in sanitized form. Slice and array segments are
/// numeric indexes, map segments are keys (raw or sanitized). Pointers and
/// interfaces are followed transparently, including at the leaf; a nil one
/// on the way resolves to `None`.
pub fn get_value_by_namespace<'a, S: AsRef<str>>(
    object: &'a Value,
    namespace: &[S],
) -> Option<&'a Value> {
    let current = object.deref()?;
    let Some((segment, rest)) = namespace.split_first() else {
        return Some(current);
    };
    let segment = segment.as_ref();
    let next = match current {
        Value::Struct(s) => field_by_segment(s, segment),
        Value::Slice { items, .. } | Value::Array { items, .. } => {
            segment.parse::<usize>().ok().and_then(|i| items.get(i))
        }
        Value::Map { entries, .. } => fields::find_key(entries, segment),
        _ => None,
    };
    match next {
        Some(next) => get_value_by_namespace(next, rest),
        None => {
            trace!(segment, "namespace segment not resolved");
            None
        }
    }
}


fn field_by_segment<'a>(s: &'a StructValue, segment: &str) -> Option<&'a Value> {
    s.iter()
        .find(|(field, _)| fields::field_matches(field, segment))
        .or_else(|| {
            s.iter().find(|(field, _)| {
                field.name == segment || fields::segment(&field.name, true) == segment
            })
        })
        .map(|(_, value)| value)
}

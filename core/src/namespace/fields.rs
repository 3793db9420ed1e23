//! Field and key name resolution.
//!
//! Decides which segment a struct field or map key contributes to a
//! namespace, and the reverse lookup used when resolving a namespace back
//! to a value.

use std::borrow::Cow;
use std::collections::BTreeMap;

use super::sanitize::sanitize_namespace_part;
use crate::types::{FieldShape, Value};


/// Segment name of a struct field.
///
/// With `json_names`, the tag's name part is used (modifiers dropped); an
/// empty tag name falls back to the declared name and a `-` tag excludes
/// the field (`None`). Without `json_names`, the declared name is always
/// used and nothing is excluded.
pub fn field_name(field: &FieldShape, json_names: bool) -> Option<&str> {
    if !json_names {
        return Some(&field.name);
    }
    match &field.tag {
        Some(tag) if tag.is_excluded() => None,
        Some(tag) if !tag.name.is_empty() => Some(&tag.name),
        _ => Some(&field.name),
    }
}

/// Tag-derived name of a field, `None` if the tag excludes it.
pub fn json_name(field: &FieldShape) -> Option<&str> {
    field_name(field, true)
}

/// Apply the sanitizer to `raw` when `sanitize` is set.
pub fn segment(raw: &str, sanitize: bool) -> Cow<'_, str> {
    if sanitize {
        Cow::Owned(sanitize_namespace_part(raw))
    } else {
        Cow::Borrowed(raw)
    }
}

/// True if `segment` names `field`: its tag-derived name, raw or
/// sanitized.
pub fn field_matches(field: &FieldShape, segment: &str) -> bool {
    match json_name(field) {
        Some(name) => name == segment || sanitize_namespace_part(name) == segment,
        None => false,
    }
}

/// Look up a map entry by key segment, accepting the sanitized form of a
/// key as well as the key itself.
pub fn find_key<'a>(entries: &'a BTreeMap<String, Value>, segment: &str) -> Option<&'a Value> {
    entries.get(segment).or_else(|| {
        entries
            .iter()
            .find(|(k, _)| sanitize_namespace_part(k) == segment)
            .map(|(_, v)| v)
    })
}

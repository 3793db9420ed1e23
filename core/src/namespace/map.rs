//! Restricted entry points: decoded JSON maps, raw JSON documents, and
//! fixed-policy composition.
//!
//! Unlike [`from_composite_object`](super::builder::from_composite_object),
//! these treat an empty result as an error.

use std::collections::BTreeSet;

use serde_json::{Map, Value as Json};
use tracing::{debug, trace};

use super::builder::from_composite_object;
use super::path::join;
use super::policy::TraversalPolicy;
use crate::error::{NamespaceError, Result};
use crate::types::Composite;


/// Namespaces of an already-decoded JSON object.
///
/// Nested objects recurse; array elements become numeric segments, and an
/// object element recurses under its index. Scalars and `null` end a
/// namespace. Empty objects and arrays contribute nothing.
pub fn from_map(map: &Map<String, Json>, prefix: &str) -> Result<BTreeSet<String>> {
    let mut out = BTreeSet::new();
    walk_map(map, prefix, &mut out);
    non_empty(out)
}

/// Decode `data` as a JSON object and derive its namespaces with
/// [`from_map`]. Decode errors are returned unchanged.
pub fn from_json(data: &[u8], prefix: &str) -> Result<BTreeSet<String>> {
    let map: Map<String, Json> = serde_json::from_slice(data)?;
    from_map(&map, prefix)
}

/// Namespaces of `object` under the default policy, with struct fields
/// named by their declared names.
pub fn from_composition<T: Composite + ?Sized>(object: &T, prefix: &str) -> Result<BTreeSet<String>> {
    let policy = TraversalPolicy::default().export_json_field_names(false);
    non_empty(from_composite_object(&object.to_value(), prefix, &policy))
}

/// Namespaces of `object` under the default policy, with struct fields
/// named by their JSON tags.
pub fn from_composition_tags<T: Composite + ?Sized>(
    object: &T,
    prefix: &str,
) -> Result<BTreeSet<String>> {
    non_empty(from_composite_object(&object.to_value(), prefix, &TraversalPolicy::default()))
}


fn walk_map(map: &Map<String, Json>, current: &str, out: &mut BTreeSet<String>) {
    for (key, value) in map {
        if key.is_empty() {
            debug!(path = current, "empty map key skipped");
            continue;
        }
        let cur = join(current, key);
        match value {
            Json::Object(inner) => walk_map(inner, &cur, out),
            Json::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    let indexed = join(&cur, &i.to_string());
                    match item {
                        Json::Object(inner) => walk_map(inner, &indexed, out),
                        _ => {
                            trace!(namespace = %indexed, "emit");
                            out.insert(indexed);
                        }
                    }
                }
            }
            _ => {
                trace!(namespace = %cur, "emit");
                out.insert(cur);
            }
        }
    }
}

fn non_empty(out: BTreeSet<String>) -> Result<BTreeSet<String>> {
    if out.is_empty() {
        Err(NamespaceError::Empty)
    } else {
        Ok(out)
    }
}

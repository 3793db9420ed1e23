//! Namespace builder — derives every namespace a composite value can
//! produce.
//!
//! The walk is driven by the value itself where data is present and by the
//! declared shape where it is not: a nil pointer is expanded through its
//! pointee's zero value, an empty container through one zero element under
//! the wildcard segment. Which of those expansions happen, and how
//! segments are named, is decided node by node by a [`TraversalPolicy`].

use std::collections::BTreeSet;

use tracing::{debug, trace};

use super::fields;
use super::path::{join, WILDCARD};
use super::policy::TraversalPolicy;
use crate::types::{Composite, Shape, StructValue, Value};


/// Derive the namespaces of `object`, each starting with `prefix`.
///
/// Never fails: a policy may legitimately suppress every entry, in which
/// case the set is empty.
pub fn from_composite_object(
    object: &Value,
    prefix: &str,
    policy: &TraversalPolicy,
) -> BTreeSet<String> {
    let mut walker = Walker {
        policy,
        out: BTreeSet::new(),
        synthesized: Vec::new(),
    };
    walker.visit(object, prefix, 0, false);
    debug!(prefix, count = walker.out.len(), "namespaces derived");
    walker.out
}

/// [`from_composite_object`] over any [`Composite`] Rust value.
pub fn derive<T: Composite + ?Sized>(
    object: &T,
    prefix: &str,
    policy: &TraversalPolicy,
) -> BTreeSet<String> {
    from_composite_object(&object.to_value(), prefix, policy)
}


// ---------------------------------------------------------------------------
// Walker
// ---------------------------------------------------------------------------

struct Walker<'p> {
    policy: &'p TraversalPolicy,
    out: BTreeSet<String>,
    /// Struct types being expanded on the current synthesized branch.
    synthesized: Vec<String>,
}

impl Walker<'_> {
    /// `level` counts every field, element, entry and pointer hop below the
    /// root. `synth` is set once the walk has left live data for zero
    /// values.
    fn visit(&mut self, value: &Value, path: &str, level: usize, synth: bool) {
        if level > self.policy.max_depth {
            debug!(path, max_depth = self.policy.max_depth, "branch cut at max depth");
            return;
        }
        match value {
            Value::Scalar(_) => self.emit(path),
            Value::Pointer { target: Some(target), .. } => self.visit(target, path, level + 1, synth),
            Value::Pointer { pointee, target: None } => self.nil_pointer(pointee, path, level),
            Value::Interface(Some(inner)) => self.visit(inner, path, level + 1, synth),
            // A nil interface still names a slot that will hold something.
            Value::Interface(None) => self.emit(path),
            Value::Struct(s) => self.visit_struct(s, path, level, synth),
            Value::Slice { elem, items } | Value::Array { elem, items } => {
                self.container_root(value, path);
                if items.is_empty() {
                    self.empty_container(elem, path, level);
                    return;
                }
                for (i, item) in items.iter().enumerate() {
                    self.visit(item, &join(path, &i.to_string()), level + 1, synth);
                }
                self.wildcard(elem, items.first(), path, level);
            }
            Value::Map { value: elem, entries } => {
                self.container_root(value, path);
                if entries.is_empty() {
                    self.empty_container(elem, path, level);
                    return;
                }
                let sanitize = self.policy.sanitize_namespace_parts.decide(path, &value.shape());
                let mut seen = BTreeSet::new();
                for (key, item) in entries {
                    let segment = fields::segment(key, sanitize);
                    if segment.is_empty() {
                        debug!(path, "empty map key skipped");
                        continue;
                    }
                    if !seen.insert(segment.to_string()) {
                        debug!(path, key = key.as_str(), segment = %segment, "map keys collide after sanitizing");
                    }
                    let child = join(path, &segment);
                    if elem.is_numeric() {
                        self.emit(&child);
                    } else {
                        self.visit(item, &child, level + 1, synth);
                    }
                }
                self.wildcard(elem, entries.values().next(), path, level);
            }
        }
    }

    fn visit_struct(&mut self, s: &StructValue, path: &str, level: usize, synth: bool) {
        if synth {
            if self.synthesized.iter().any(|name| name == s.type_name()) {
                debug!(path, ty = s.type_name(), "recursive type, synthesized branch cut");
                return;
            }
            self.synthesized.push(s.type_name().to_string());
        }

        let shape = Shape::Struct(s.shape().clone());
        let json_names = self.policy.export_json_field_names.decide(path, &shape);
        let sanitize = self.policy.sanitize_namespace_parts.decide(path, &shape);
        for (field, value) in s.iter() {
            let Some(name) = fields::field_name(field, json_names) else {
                trace!(path, field = %field.name, "field excluded by tag");
                continue;
            };
            let segment = fields::segment(name, sanitize);
            if segment.is_empty() {
                debug!(path, field = %field.name, "empty field segment skipped");
                continue;
            }
            self.visit(value, &join(path, &segment), level + 1, synth);
        }

        if synth {
            self.synthesized.pop();
        }
    }

    fn nil_pointer(&mut self, pointee: &Shape, path: &str, level: usize) {
        if !self.policy.inspect_nil_pointers.decide(path, pointee) {
            trace!(path, pointee = %pointee, "nil pointer not inspected");
            return;
        }
        self.visit(&Value::zero(pointee), path, level + 1, true);
    }

    fn empty_container(&mut self, elem: &Shape, path: &str, level: usize) {
        if !self.policy.inspect_empty_containers.decide(path, elem) {
            trace!(path, elem = %elem, "empty container not inspected");
            return;
        }
        self.visit(&Value::zero(elem), &join(path, WILDCARD), level + 1, true);
    }

    /// Wildcard entries for a non-empty container. An interface element
    /// type says nothing about structure, so the first element stands in
    /// for it; otherwise the declared element type's zero value does.
    fn wildcard(&mut self, elem: &Shape, first: Option<&Value>, path: &str, level: usize) {
        if !self.policy.wildcard_entry_in_container.decide(path, elem) {
            return;
        }
        let star = join(path, WILDCARD);
        match (elem, first) {
            (Shape::Interface, Some(first)) => self.visit(first, &star, level + 1, false),
            (Shape::Interface, None) => self.emit(&star),
            _ => self.visit(&Value::zero(elem), &star, level + 1, true),
        }
    }

    fn container_root(&mut self, container: &Value, path: &str) {
        if self.policy.entry_for_containers_root.decide(path, &container.shape()) {
            self.emit(path);
        }
    }

    fn emit(&mut self, path: &str) {
        if path.is_empty() {
            debug!("empty namespace not emitted");
            return;
        }
        trace!(namespace = path, "emit");
        self.out.insert(path.to_string());
    }
}

//! Traversal policy — six independent per-node decisions for the namespace
//! builder.
//!
//! Every decision is asked at the node it governs, with the path built so
//! far and the declared shape under consideration (not an instance, so it
//! also works for nil pointers and empty containers).

use std::fmt;
use std::sync::Arc;

use super::path::depth;
use crate::types::Shape;


/// Default cap on traversal depth.
pub const DEFAULT_MAX_DEPTH: usize = 64;


/// Signature of a custom decision: `(current path, declared shape) -> bool`.
pub type Predicate = dyn Fn(&str, &Shape) -> bool + Send + Sync;


/// One policy decision.
#[derive(Clone)]
pub enum Decision {
    /// Same answer everywhere.
    Always(bool),
    /// True while the current path has at most this many segments.
    UpToDepth(usize),
    Custom(Arc<Predicate>),
}

impl Decision {
    pub const TRUE: Decision = Decision::Always(true);
    pub const FALSE: Decision = Decision::Always(false);

    /// Decide with a closure over the current path and declared shape.
    pub fn when<F>(f: F) -> Decision
    where
        F: Fn(&str, &Shape) -> bool + Send + Sync + 'static,
    {
        Decision::Custom(Arc::new(f))
    }

    pub fn decide(&self, path: &str, shape: &Shape) -> bool {
        match self {
            Decision::Always(answer) => *answer,
            Decision::UpToDepth(max) => depth(path) <= *max,
            Decision::Custom(f) => f(path, shape),
        }
    }
}

impl From<bool> for Decision {
    fn from(answer: bool) -> Decision {
        Decision::Always(answer)
    }
}

impl fmt::Debug for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Always(answer) => write!(f, "Always({})", answer),
            Decision::UpToDepth(max) => write!(f, "UpToDepth({})", max),
            Decision::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}


/// The full set of traversal decisions.
///
/// `TraversalPolicy::default()` expands nil pointers and empty containers,
/// exports JSON field names and sanitizes parts; it emits neither container
/// root entries nor wildcard entries for non-empty containers.
#[derive(Debug, Clone)]
pub struct TraversalPolicy {
    /// Descend into a nil pointer's zero-valued pointee. Asked with the
    /// pointer's path and pointee shape.
    pub inspect_nil_pointers: Decision,
    /// Synthesize one `*` element for an empty slice, array or map. Asked
    /// with the container's path and element shape.
    pub inspect_empty_containers: Decision,
    /// Also emit the container's own path. Asked with the container's path
    /// and container shape.
    pub entry_for_containers_root: Decision,
    /// Also emit `*` entries for a non-empty container. Asked with the
    /// container's path and element shape.
    pub wildcard_entry_in_container: Decision,
    /// Name struct fields by JSON tag rather than declared name. Asked with
    /// the struct's path and struct shape.
    pub export_json_field_names: Decision,
    /// Sanitize segments produced at a node. Asked with the node's path and
    /// the shape contributing the segment.
    pub sanitize_namespace_parts: Decision,
    /// Branches deeper than this many levels are cut. Every field, element,
    /// map entry, pointer hop and interface hop is one level, so this is not
    /// a segment count.
    pub max_depth: usize,
}

impl Default for TraversalPolicy {
    fn default() -> Self {
        TraversalPolicy {
            inspect_nil_pointers: Decision::TRUE,
            inspect_empty_containers: Decision::TRUE,
            entry_for_containers_root: Decision::FALSE,
            wildcard_entry_in_container: Decision::FALSE,
            export_json_field_names: Decision::TRUE,
            sanitize_namespace_parts: Decision::TRUE,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl TraversalPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inspect_nil_pointers(mut self, decision: impl Into<Decision>) -> Self {
        self.inspect_nil_pointers = decision.into();
        self
    }

    pub fn inspect_empty_containers(mut self, decision: impl Into<Decision>) -> Self {
        self.inspect_empty_containers = decision.into();
        self
    }

    pub fn entry_for_containers_root(mut self, decision: impl Into<Decision>) -> Self {
        self.entry_for_containers_root = decision.into();
        self
    }

    pub fn wildcard_entry_in_container(mut self, decision: impl Into<Decision>) -> Self {
        self.wildcard_entry_in_container = decision.into();
        self
    }

    pub fn export_json_field_names(mut self, decision: impl Into<Decision>) -> Self {
        self.export_json_field_names = decision.into();
        self
    }

    pub fn sanitize_namespace_parts(mut self, decision: impl Into<Decision>) -> Self {
        self.sanitize_namespace_parts = decision.into();
        self
    }

    /// Cap on traversal levels, counted as for [`TraversalPolicy::max_depth`].
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let p = TraversalPolicy::default();
        let s = Shape::I64;
        assert!(p.inspect_nil_pointers.decide("root", &s));
        assert!(p.inspect_empty_containers.decide("root", &s));
        assert!(!p.entry_for_containers_root.decide("root", &s));
        assert!(!p.wildcard_entry_in_container.decide("root", &s));
        assert!(p.export_json_field_names.decide("root", &s));
        assert!(p.sanitize_namespace_parts.decide("root", &s));
        assert_eq!(p.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn overrides_are_independent() {
        let p = TraversalPolicy::new().inspect_nil_pointers(false).wildcard_entry_in_container(true);
        let s = Shape::BOOL;
        assert!(!p.inspect_nil_pointers.decide("root", &s));
        assert!(p.wildcard_entry_in_container.decide("root", &s));
        assert!(p.inspect_empty_containers.decide("root", &s));
    }

    #[test]
    fn up_to_depth() {
        let d = Decision::UpToDepth(2);
        assert!(d.decide("root/First", &Shape::I64));
        assert!(!d.decide("root/First/Delta", &Shape::I64));
    }

    #[test]
    fn custom_sees_path_and_shape() {
        let d = Decision::when(|path, shape| path.starts_with("root") && shape.is_numeric());
        assert!(d.decide("root/a", &Shape::U64));
        assert!(!d.decide("root/a", &Shape::STR));
        assert!(!d.decide("other", &Shape::U64));
        assert_eq!(format!("{:?}", d), "Custom(..)");
    }
}

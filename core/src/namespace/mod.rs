//! Namespaces — derivation from composite values, resolution back to
//! values, and part sanitizing.
//!
//! A namespace is a slash-joined sequence of segments such as
//! `intel/mock/First/0/Uno`. [`from_composite_object`] derives every
//! namespace a value can produce under a [`TraversalPolicy`];
//! [`get_value_by_namespace`] resolves one of them back to its value.

pub mod path;
pub mod sanitize;
pub mod fields;
pub mod policy;
pub mod builder;
pub mod map;
pub mod resolve;

pub use path::{Namespace, SEPARATOR, WILDCARD};
pub use sanitize::{sanitize_namespace_part, validate_namespace_part};
pub use policy::{Decision, TraversalPolicy, DEFAULT_MAX_DEPTH};
pub use builder::{derive, from_composite_object};
pub use map::{from_composition, from_composition_tags, from_json, from_map};
pub use resolve::get_value_by_namespace;

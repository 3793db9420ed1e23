//! Plugin namespace utilities.
//!
//! Derives the flat, slash-joined namespaces a telemetry plugin can publish
//! from composite values (structs, maps, slices, pointers), resolves a
//! namespace back to the value it addresses, and sanitizes namespace parts.
//!
//! # Modules
//!
//! - [`types`] — declared shapes, live values, the `Composite` bridge
//! - [`namespace`] — builder, resolver, sanitizer, traversal policy
//! - [`metric`] — dynamic namespace elements and their conversion to tags
//! - [`config`] — traversal policy files
//! - [`error`] — error types
//! - [`command`], [`cli`], [`sys`] — the `plugin-ns` command surface

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod help;
pub mod metric;
pub mod namespace;
pub mod sys;
pub mod types;

pub use error::{NamespaceError, Result};

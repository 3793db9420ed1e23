//! Metric namespaces with dynamic elements, and their conversion to tags.
//!
//! A collector may publish `/intel/mock/host1/foo`, `/intel/mock/host2/foo`,
//! ... where `hostN` is a dynamic element. [`convert_dynamic_elements`]
//! folds such elements into tags so every metric is published under the
//! static namespace `/intel/mock/foo` with a `host` tag instead.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::namespace::path::{SEPARATOR, WILDCARD};
use crate::namespace::sanitize::validate_namespace_part;


// ---------------------------------------------------------------------------
// NamespaceElement
// ---------------------------------------------------------------------------

/// One element of a metric namespace. An element with a name is dynamic;
/// its value is filled in by the collector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceElement {
    pub value: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl NamespaceElement {
    pub fn fixed(value: impl Into<String>) -> Self {
        NamespaceElement {
            value: value.into(),
            name: String::new(),
            description: String::new(),
        }
    }

    /// A dynamic element; its value starts as the wildcard.
    pub fn dynamic(name: impl Into<String>, description: impl Into<String>) -> Self {
        NamespaceElement {
            value: WILDCARD.to_string(),
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn is_dynamic(&self) -> bool {
        !self.name.is_empty()
    }
}


// ---------------------------------------------------------------------------
// MetricNamespace
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricNamespace {
    elements: Vec<NamespaceElement>,
}

impl MetricNamespace {
    /// A namespace of static elements.
    pub fn new<S: Into<String>>(parts: impl IntoIterator<Item = S>) -> Self {
        MetricNamespace {
            elements: parts.into_iter().map(NamespaceElement::fixed).collect(),
        }
    }

    pub fn add_static_element(mut self, value: impl Into<String>) -> Self {
        self.elements.push(NamespaceElement::fixed(value));
        self
    }

    pub fn add_static_elements<S: Into<String>>(mut self, values: impl IntoIterator<Item = S>) -> Self {
        self.elements.extend(values.into_iter().map(NamespaceElement::fixed));
        self
    }

    pub fn add_dynamic_element(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.elements.push(NamespaceElement::dynamic(name, description));
        self
    }

    /// Whether any element is dynamic, with the indexes of those that are.
    pub fn is_dynamic(&self) -> (bool, Vec<usize>) {
        let indexes: Vec<usize> = self
            .elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_dynamic())
            .map(|(i, _)| i)
            .collect();
        (!indexes.is_empty(), indexes)
    }

    pub fn elements(&self) -> &[NamespaceElement] {
        &self.elements
    }

    pub fn elements_mut(&mut self) -> &mut [NamespaceElement] {
        &mut self.elements
    }

    pub fn strings(&self) -> Vec<&str> {
        self.elements.iter().map(|e| e.value.as_str()).collect()
    }

    /// Check every static element against the namespace part rules.
    pub fn validate(&self) -> Result<()> {
        self.elements
            .iter()
            .filter(|e| !e.is_dynamic())
            .try_for_each(|e| validate_namespace_part(&e.value))
    }
}

impl fmt::Display for MetricNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for e in &self.elements {
            write!(f, "{}{}", SEPARATOR, e.value)?;
        }
        Ok(())
    }
}


// ---------------------------------------------------------------------------
// Metric
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub namespace: MetricNamespace,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

impl Metric {
    pub fn new(namespace: MetricNamespace) -> Self {
        Metric {
            namespace,
            tags: BTreeMap::new(),
        }
    }
}


/// Move every dynamic element of each metric's namespace into its tags
/// (`name → value`). Existing tags are kept; static metrics are untouched.
pub fn convert_dynamic_elements(metrics: &mut [Metric]) {
    for metric in metrics.iter_mut() {
        let (dynamic, _) = metric.namespace.is_dynamic();
        if !dynamic {
            continue;
        }
        let elements = std::mem::take(&mut metric.namespace.elements);
        for element in elements {
            if element.is_dynamic() {
                metric.tags.insert(element.name, element.value);
            } else {
                metric.namespace.elements.push(element);
            }
        }
        debug!(namespace = %metric.namespace, tags = metric.tags.len(), "dynamic elements converted");
    }
}

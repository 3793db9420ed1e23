//! Declarative traversal policy files.
//!
//! A policy file sets any of the six traversal options, each to a constant
//! or a depth rule, plus the recursion cap:
//!
//! ```yaml
//! inspect_nil_pointers: true
//! inspect_empty_containers: { max_depth: 2 }
//! wildcard_entry_in_container: { below: 4 }
//! max_depth: 64
//! ```
//!
//! Options left out keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NamespaceError, Result};
use crate::namespace::policy::{Decision, TraversalPolicy};


/// One option's setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rule {
    Always(bool),
    Depth(DepthRule),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthRule {
    /// True while the current path has at most this many segments.
    MaxDepth(usize),
    /// True while the current path has fewer than this many segments.
    Below(usize),
}

impl Rule {
    pub fn to_decision(self) -> Decision {
        match self {
            Rule::Always(answer) => Decision::Always(answer),
            Rule::Depth(DepthRule::MaxDepth(n)) => Decision::UpToDepth(n),
            Rule::Depth(DepthRule::Below(0)) => Decision::FALSE,
            Rule::Depth(DepthRule::Below(n)) => Decision::UpToDepth(n - 1),
        }
    }
}


/// Policy file contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inspect_nil_pointers: Option<Rule>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inspect_empty_containers: Option<Rule>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_for_containers_root: Option<Rule>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wildcard_entry_in_container: Option<Rule>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_json_field_names: Option<Rule>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sanitize_namespace_parts: Option<Rule>,

    /// Recursion cap; see [`TraversalPolicy::max_depth`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

impl PolicyConfig {
    /// Apply the configured options over the default policy.
    pub fn to_policy(&self) -> TraversalPolicy {
        let mut policy = TraversalPolicy::default();
        let slots = [
            (self.inspect_nil_pointers, &mut policy.inspect_nil_pointers),
            (self.inspect_empty_containers, &mut policy.inspect_empty_containers),
            (self.entry_for_containers_root, &mut policy.entry_for_containers_root),
            (self.wildcard_entry_in_container, &mut policy.wildcard_entry_in_container),
            (self.export_json_field_names, &mut policy.export_json_field_names),
            (self.sanitize_namespace_parts, &mut policy.sanitize_namespace_parts),
        ];
        for (rule, slot) in slots {
            if let Some(rule) = rule {
                *slot = rule.to_decision();
            }
        }
        if let Some(max_depth) = self.max_depth {
            policy.max_depth = max_depth;
        }
        policy
    }
}


/// Load a policy file. `.json` files are read as JSON, anything else as
/// YAML.
pub fn load(path: &Path) -> Result<PolicyConfig> {
    let content = std::fs::read_to_string(path).map_err(|source| NamespaceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let parsed = if is_json {
        serde_json::from_str(&content).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str(&content).map_err(|e| e.to_string())
    };
    parsed.map_err(|reason| NamespaceError::Config {
        path: path.to_path_buf(),
        reason,
    })
}


/// Parse a policy from YAML text.
pub fn parse(content: &str) -> Result<PolicyConfig> {
    serde_yaml::from_str(content).map_err(|e| NamespaceError::Config {
        path: "<inline>".into(),
        reason: e.to_string(),
    })
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Shape;

    #[test]
    fn parse_full_config() {
        let yaml = r#"
inspect_nil_pointers: false
inspect_empty_containers: { max_depth: 2 }
entry_for_containers_root: true
wildcard_entry_in_container: { below: 4 }
export_json_field_names: true
sanitize_namespace_parts: false
max_depth: 10
"#;
        let config = parse(yaml).unwrap();
        assert_eq!(config.inspect_nil_pointers, Some(Rule::Always(false)));
        assert_eq!(config.inspect_empty_containers, Some(Rule::Depth(DepthRule::MaxDepth(2))));
        assert_eq!(config.wildcard_entry_in_container, Some(Rule::Depth(DepthRule::Below(4))));

        let policy = config.to_policy();
        let s = Shape::I64;
        assert!(!policy.inspect_nil_pointers.decide("root", &s));
        assert!(policy.inspect_empty_containers.decide("root/First", &s));
        assert!(!policy.inspect_empty_containers.decide("root/First/*/Dos", &s));
        assert!(policy.entry_for_containers_root.decide("root", &s));
        assert!(policy.wildcard_entry_in_container.decide("root/First/1", &s));
        assert!(!policy.wildcard_entry_in_container.decide("root/First/1/Dos", &s));
        assert!(!policy.sanitize_namespace_parts.decide("root", &s));
        assert_eq!(policy.max_depth, 10);
    }

    #[test]
    fn omitted_options_keep_defaults() {
        let policy = parse("wildcard_entry_in_container: true").unwrap().to_policy();
        let s = Shape::STR;
        assert!(policy.wildcard_entry_in_container.decide("root", &s));
        assert!(policy.inspect_nil_pointers.decide("root", &s));
        assert!(!policy.entry_for_containers_root.decide("root", &s));
        assert_eq!(policy.max_depth, crate::namespace::policy::DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(parse("{}").unwrap(), PolicyConfig::default());
    }

    #[test]
    fn below_zero_is_never() {
        let d = Rule::Depth(DepthRule::Below(0)).to_decision();
        assert!(!d.decide("", &Shape::BOOL));
    }

    #[test]
    fn unknown_option_rejected() {
        let err = parse("inspect_everything: true").unwrap_err();
        assert!(matches!(err, NamespaceError::Config { .. }));
        assert!(err.to_string().contains("inspect_everything"));
    }

    #[test]
    fn load_json_and_yaml_files() {
        let dir = std::env::temp_dir().join(format!("plugin-ns-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let json = dir.join("policy.json");
        std::fs::write(&json, r#"{"entry_for_containers_root": {"below": 3}}"#).unwrap();
        let config = load(&json).unwrap();
        assert_eq!(config.entry_for_containers_root, Some(Rule::Depth(DepthRule::Below(3))));

        let yaml = dir.join("policy.yaml");
        std::fs::write(&yaml, "export_json_field_names: false\n").unwrap();
        assert_eq!(load(&yaml).unwrap().export_json_field_names, Some(Rule::Always(false)));

        let missing = dir.join("missing.yaml");
        assert!(matches!(load(&missing), Err(NamespaceError::Io { .. })));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}

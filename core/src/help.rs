//! Help system — usage text for every `plugin-ns` command.
//!
//! `plugin-ns help` prints the overview, `plugin-ns help <command>` the
//! detailed usage of one command.


/// Generate help text for a given topic.
///
/// - `None` → overview of all commands
/// - `Some("derive")` → detailed help for derive
pub fn help_text(topic: Option<&str>) -> String {
    match topic {
        None => overview(),
        Some(t) => command_help(t).unwrap_or_else(|| {
            format!("Unknown help topic: '{}'. Run 'plugin-ns help' for a list of commands.", t)
        }),
    }
}


fn overview() -> String {
    "\
plugin-ns — derive and resolve telemetry plugin namespaces

Usage: plugin-ns <command> [args...]

Commands:
  json <file|->        List the namespaces of a JSON object
  derive <file|->      List namespaces under a traversal policy
  get <file|-> <ns>    Print the value a namespace addresses
  sanitize <part>...   Replace not allowed characters in namespace parts
  validate <part>...   Check namespace parts for not allowed characters
  help [command]       Show this overview or one command's usage

Logging goes to stderr; set RUST_LOG (e.g. RUST_LOG=plugin_ns_core=trace)."
        .into()
}


fn command_help(command: &str) -> Option<String> {
    let text = match command {
        "json" => "\
plugin-ns json <file|-> [--prefix <p>]

Decode a JSON object and list one namespace per leaf. Array elements
become numeric segments. Fails with 'namespace empty' if nothing is found.",
        "derive" => "\
plugin-ns derive <file|-> [--prefix <p>] [--policy <file>]

Walk a JSON document as a composite value under a traversal policy.
The policy file (YAML, or JSON with a .json extension) may set:

  inspect_nil_pointers, inspect_empty_containers,
  entry_for_containers_root, wildcard_entry_in_container,
  export_json_field_names, sanitize_namespace_parts

each to true, false, { max_depth: N } or { below: N }, plus max_depth.",
        "get" => "\
plugin-ns get <file|-> <namespace>

Resolve a slash-joined namespace against a JSON document and print the
value it addresses as JSON. Unresolvable namespaces are reported as absent.",
        "sanitize" => "\
plugin-ns sanitize <part>...

Replace every run of characters outside [a-zA-Z0-9_] with '_'.",
        "validate" => "\
plugin-ns validate <part>...

Fail on the first part holding a character outside [a-zA-Z0-9_].",
        "help" => "plugin-ns help [command]",
        _ => return None,
    };
    Some(text.to_string())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overview_lists_commands() {
        let text = help_text(None);
        for cmd in ["json", "derive", "get", "sanitize", "validate", "help"] {
            assert!(text.contains(cmd), "overview missing {}", cmd);
        }
    }

    #[test]
    fn command_topics() {
        assert!(help_text(Some("derive")).contains("--policy"));
        assert!(help_text(Some("get")).contains("absent"));
    }

    #[test]
    fn unknown_topic() {
        assert!(help_text(Some("bogus")).starts_with("Unknown help topic"));
    }
}

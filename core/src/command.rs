//! Command — the typed interface for every `plugin-ns` operation.
//!
//! Every operation that can be dispatched through `Sys::execute()` is a
//! variant of the `Command` enum. Commands serialize as JSON objects with a
//! `"command"` discriminant:
//!
//! ```json
//! {"command": "json", "input": "metrics.json", "prefix": "intel/mock"}
//! {"command": "get", "input": "-", "namespace": "data/data_one"}
//! {"command": "sanitize", "parts": ["cpu.0"]}
//! ```
//!
//! | Command | Operation |
//! |---------|-----------|
//! | `json` | namespaces of a JSON object (`from_json`) |
//! | `derive` | namespaces under a traversal policy (`from_composite_object`) |
//! | `get` | resolve one namespace to its value |
//! | `sanitize` | sanitize namespace parts |
//! | `validate` | validate namespace parts |
//! | `help` | usage |

use serde::{Deserialize, Serialize};


/// Input path meaning standard input.
pub const STDIN: &str = "-";


#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "command")]
pub enum Command {
    /// List the namespaces of a JSON object document.
    #[serde(rename = "json")]
    Json {
        /// File path, or `-` for standard input.
        input: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        prefix: Option<String>,
    },

    /// List the namespaces of a JSON document walked as a composite value,
    /// with an optional policy file.
    #[serde(rename = "derive")]
    Derive {
        input: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        prefix: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        policy: Option<String>,
    },

    /// Print the value a namespace addresses in a JSON document.
    #[serde(rename = "get")]
    Get {
        input: String,
        /// Slash-joined namespace, relative to the document root.
        namespace: String,
    },

    #[serde(rename = "sanitize")]
    Sanitize { parts: Vec<String> },

    #[serde(rename = "validate")]
    Validate { parts: Vec<String> },

    #[serde(rename = "help")]
    Help {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        topic: Option<String>,
    },
}


/// Outcome of one command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Response {
    Ok { output: String },
    Error { message: String },
}

impl Response {
    pub fn ok(output: impl Into<String>) -> Self {
        Response::Ok { output: output.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Response::Error { message: message.into() }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format() {
        let cmd = Command::Json { input: "-".into(), prefix: Some("root".into()) };
        let json = serde_json::to_value(&cmd).unwrap();
        assert_eq!(json, serde_json::json!({"command": "json", "input": "-", "prefix": "root"}));
    }

    #[test]
    fn optional_fields_default() {
        let cmd: Command = serde_json::from_str(r#"{"command": "derive", "input": "x.json"}"#).unwrap();
        assert_eq!(cmd, Command::Derive { input: "x.json".into(), prefix: None, policy: None });
    }

    #[test]
    fn response_tagging() {
        let json = serde_json::to_value(Response::error("bad")).unwrap();
        assert_eq!(json, serde_json::json!({"status": "error", "message": "bad"}));
    }
}

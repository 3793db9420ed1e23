use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::command::{Command, Response, STDIN};
use crate::config;
use crate::help::help_text;
use crate::namespace::{
    from_composite_object, from_json, get_value_by_namespace, sanitize_namespace_part,
    validate_namespace_part, Namespace, TraversalPolicy,
};
use crate::types::Value;


/// Command dispatcher. Reads inputs, runs one operation, renders the
/// result as text.
pub struct Sys {
    /// Standard input contents, read once on first use.
    stdin: Option<Vec<u8>>,
}


impl Sys {
    pub fn new() -> Sys {
        Sys { stdin: None }
    }

    /// A dispatcher whose standard input is `data`.
    pub fn with_stdin(data: impl Into<Vec<u8>>) -> Sys {
        Sys {
            stdin: Some(data.into()),
        }
    }

    /// Execute a command and return its response.
    pub fn execute(&mut self, cmd: Command) -> Response {
        debug!(command = ?cmd, "execute");
        let result = match cmd {
            Command::Json { input, prefix } => self.cmd_json(&input, prefix),
            Command::Derive { input, prefix, policy } => self.cmd_derive(&input, prefix, policy),
            Command::Get { input, namespace } => self.cmd_get(&input, &namespace),
            Command::Sanitize { parts } => Ok(cmd_sanitize(&parts)),
            Command::Validate { parts } => cmd_validate(&parts),
            Command::Help { topic } => Ok(help_text(topic.as_deref())),
        };
        match result {
            Ok(output) => Response::ok(output),
            Err(message) => Response::error(message),
        }
    }


    // -----------------------------------------------------------------
    // Commands
    // -----------------------------------------------------------------

    fn cmd_json(&mut self, input: &str, prefix: Option<String>) -> Result<String, String> {
        let data = self.read_input(input)?;
        let namespaces = from_json(&data, prefix.as_deref().unwrap_or(""))
            .map_err(|e| e.to_string())?;
        Ok(lines(namespaces))
    }

    fn cmd_derive(
        &mut self,
        input: &str,
        prefix: Option<String>,
        policy: Option<String>,
    ) -> Result<String, String> {
        let policy = match policy {
            Some(path) => config::load(Path::new(&path)).map_err(|e| e.to_string())?.to_policy(),
            None => TraversalPolicy::default(),
        };
        let value = self.read_value(input)?;
        let namespaces = from_composite_object(&value, prefix.as_deref().unwrap_or(""), &policy);
        Ok(lines(namespaces))
    }

    fn cmd_get(&mut self, input: &str, namespace: &str) -> Result<String, String> {
        let ns = Namespace::parse(namespace)?;
        let value = self.read_value(input)?;
        match get_value_by_namespace(&value, ns.segments()) {
            Some(found) => serde_json::to_string_pretty(&found.to_json()).map_err(|e| e.to_string()),
            None => Err(format!("namespace '{}' is absent", ns)),
        }
    }


    // -----------------------------------------------------------------
    // Input
    // -----------------------------------------------------------------

    fn read_input(&mut self, input: &str) -> Result<Vec<u8>, String> {
        if input != STDIN {
            return std::fs::read(input).map_err(|e| format!("cannot read '{}': {}", input, e));
        }
        if let Some(data) = &self.stdin {
            return Ok(data.clone());
        }
        let mut data = Vec::new();
        std::io::stdin()
            .read_to_end(&mut data)
            .map_err(|e| format!("cannot read stdin: {}", e))?;
        self.stdin = Some(data.clone());
        Ok(data)
    }

    fn read_value(&mut self, input: &str) -> Result<Value, String> {
        let data = self.read_input(input)?;
        let json: serde_json::Value = serde_json::from_slice(&data).map_err(|e| e.to_string())?;
        Ok(Value::from_json(&json))
    }
}

impl Default for Sys {
    fn default() -> Self {
        Sys::new()
    }
}


fn cmd_sanitize(parts: &[String]) -> String {
    parts
        .iter()
        .map(|p| sanitize_namespace_part(p))
        .collect::<Vec<_>>()
        .join("\n")
}

fn cmd_validate(parts: &[String]) -> Result<String, String> {
    for part in parts {
        validate_namespace_part(part).map_err(|e| e.to_string())?;
    }
    Ok(String::new())
}

fn lines(namespaces: impl IntoIterator<Item = String>) -> String {
    namespaces.into_iter().collect::<Vec<_>>().join("\n")
}

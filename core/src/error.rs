//! Error types for namespace derivation and configuration loading.

use std::path::PathBuf;


#[derive(Debug, thiserror::Error)]
pub enum NamespaceError {
    /// A restricted entry point produced no namespaces at all.
    #[error("namespace empty")]
    Empty,

    /// JSON input could not be decoded; the decoder's message is kept as-is.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("namespace part '{part}' contains not allowed character '{ch}'")]
    DisallowedCharacter { part: String, ch: char },

    #[error("invalid policy config '{}': {reason}", path.display())]
    Config { path: PathBuf, reason: String },

    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}


pub type Result<T> = std::result::Result<T, NamespaceError>;

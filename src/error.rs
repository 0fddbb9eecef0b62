//! Error types for side-export

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// side-export errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown command: {0}")]
    UnsupportedCommand(String),

    #[error("{0}")]
    UnsupportedVariant(String),

    #[error("Malformed argument for `{command}`: {message}")]
    MalformedArgument { command: String, message: String },

    #[error("Locator error: {0}")]
    Locator(String),

    #[error("Unbalanced control flow at `{command}` (level {level})")]
    UnbalancedControlFlow { command: String, level: i32 },

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_norway::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    pub(crate) fn malformed(command: &str, message: impl Into<String>) -> Self {
        Error::MalformedArgument {
            command: command.to_string(),
            message: message.into(),
        }
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}

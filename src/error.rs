use std::path::PathBuf;
use thiserror::Error;

/// Failure while constructing the configuration plugin
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// The base Vuetify options could not be rendered as JSON
    #[error("failed to serialize Vuetify options: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// No plugin in the chain produced source for a module id
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("module not found: {0}")]
    NotFound(String),
}

/// Failure while reading plugin options from disk or text
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Combined error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;

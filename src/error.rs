//! Error types for sink configuration aggregation and submission.

use std::path::PathBuf;
use thiserror::Error;

/// Admin service errors (catalog queries and submission)
#[derive(Debug, Error)]
pub enum AdminError {
    #[error("Admin request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Admin service returned status {code}: {body}")]
    Status { code: u16, body: String },

    #[error("Failed to encode sink config: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to read package {path}: {source}")]
    Package {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Admin client not configured: {0}")]
    NotConfigured(String),
}

/// Pipeline errors. Every variant names the invariant that failed.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Failed to parse sink config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to load sink config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON for {field}: {source}")]
    InvalidJson {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cannot specify both archive and sink-type")]
    ConflictingPackaging,

    #[error("Sink archive not specified")]
    EmptyArchive,

    #[error("Sink archive {0} does not exist")]
    MissingLocalArchive(String),

    #[error("{0}")]
    EmptyName(&'static str),

    #[error(transparent)]
    Admin(#[from] AdminError),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Failed to render output: {0}")]
    Render(String),
}

impl From<config::ConfigError> for SinkError {
    fn from(err: config::ConfigError) -> Self {
        SinkError::Settings(err.to_string())
    }
}

/// Messages carried by [`SinkError::EmptyName`].
pub const SINK_NAME_NOT_SPECIFIED: &str = "Sink name not specified";
pub const SINK_NAME_REQUIRED: &str = "You must specify a name for the sink";

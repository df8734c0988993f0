//! Sink config document loader.
//!
//! A missing file is not an error: the pipeline starts from an empty config.
//! A file that exists but does not parse is.

use crate::error::SinkError;
use crate::sink::model::SinkConfig;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Load the base configuration from an optional YAML document.
pub fn load_document(path: Option<&Path>) -> Result<SinkConfig, SinkError> {
    let path = match path {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => return Ok(SinkConfig::default()),
    };

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(config_path = %path.display(), "Sink config file not found, starting from empty config");
            return Ok(SinkConfig::default());
        }
        Err(source) => {
            return Err(SinkError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    // serde_yaml rejects an empty document for a struct target
    if contents.trim().is_empty() {
        return Ok(SinkConfig::default());
    }

    let config = serde_yaml::from_str(&contents).map_err(|source| SinkError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(config_path = %path.display(), "Loaded sink config file");
    Ok(config)
}

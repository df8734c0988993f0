//! Tool Settings
//!
//! Settings for the sinkconf tool itself (where the admin service lives, how to log),
//! as opposed to the sink configurations it builds. Layered with the `config` crate:
//! defaults, then the global settings file, then an explicit settings file, then
//! `SINKCONF__*` environment variables.

use crate::error::SinkError;
use crate::logging::LoggingConfig;
use config::Environment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod merge;
mod sources;

pub use sources::global_settings_path;

/// Root settings structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CtlSettings {
    #[serde(default)]
    pub admin: AdminSettings,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Admin service connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminSettings {
    /// Base URL of the admin REST service
    #[serde(default = "default_web_service_url")]
    pub web_service_url: String,

    /// Per-request timeout in milliseconds
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

fn default_web_service_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_request_timeout_ms() -> u64 {
    30_000
}

impl Default for AdminSettings {
    fn default() -> Self {
        Self {
            web_service_url: default_web_service_url(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl AdminSettings {
    pub fn validate(&self) -> Result<(), String> {
        let url = self.web_service_url.trim();
        if url.is_empty() {
            return Err("Admin web service URL cannot be empty".to_string());
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(format!(
                "Admin web service URL must start with http:// or https://: {}",
                url
            ));
        }
        Ok(())
    }
}

/// Settings loader
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings from defaults, the global file, an optional explicit file and the environment.
    pub fn load(explicit: Option<&Path>) -> Result<CtlSettings, SinkError> {
        let mut builder = merge::builder_with_defaults()?;
        builder = sources::global_file::add_to_builder(builder)?;
        if let Some(path) = explicit {
            builder = sources::explicit_file::add_to_builder(builder, path)?;
        }
        builder = builder.add_source(
            Environment::with_prefix("SINKCONF")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let settings: CtlSettings = builder.build()?.try_deserialize()?;
        settings.admin.validate().map_err(SinkError::Settings)?;
        Ok(settings)
    }

    /// Global settings file location, if a home directory is known.
    pub fn global_path() -> Option<PathBuf> {
        global_settings_path()
    }
}

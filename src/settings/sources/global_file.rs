//! Global settings file: $XDG_CONFIG_HOME/sinkconf/config.toml (or the platform equivalent).

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;

/// Path to the global settings file.
pub fn global_settings_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "sinkconf").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Add the global settings file to the builder if it exists.
pub fn add_to_builder(
    mut builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if let Some(path) = global_settings_path() {
        if path.exists() {
            builder = builder.add_source(File::from(path).required(false));
        } else {
            debug!(settings_path = %path.display(), "No global settings file");
        }
    }
    Ok(builder)
}

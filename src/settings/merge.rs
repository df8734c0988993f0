//! Merge rules: defaults applied underneath every other settings source.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with settings defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("admin.web_service_url", "http://localhost:8080")?
        .set_default("admin.request_timeout_ms", 30_000u64)?
        .set_default("logging.level", "warn")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "stderr")
}

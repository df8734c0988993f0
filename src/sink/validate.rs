//! Cross-field validation of a merged sink configuration.

use crate::error::{SinkError, SINK_NAME_NOT_SPECIFIED};
use crate::sink::model::{SinkConfig, DEFAULT_NAMESPACE, PUBLIC_TENANT};
use crate::sink::package::is_package_url_supported;
use std::path::Path;

const BUILTIN: &str = "builtin";

/// Fills in fields that can be derived from the rest of the configuration.
pub trait ArgumentInferrer: Send + Sync {
    fn infer_missing(&self, config: &mut SinkConfig);
}

/// Answers whether an archive locator names something present locally.
pub trait ArchiveLocator: Send + Sync {
    fn exists(&self, locator: &str) -> bool;
}

/// Default inference: independent tenant/namespace defaults and a parallelism floor.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardInference;

impl ArgumentInferrer for StandardInference {
    fn infer_missing(&self, config: &mut SinkConfig) {
        if config.tenant.is_empty() {
            config.tenant = PUBLIC_TENANT.to_string();
        }
        if config.namespace.is_empty() {
            config.namespace = DEFAULT_NAMESPACE.to_string();
        }
        if config.parallelism == 0 {
            config.parallelism = 1;
        }
    }
}

/// Locator backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl ArchiveLocator for LocalFileSystem {
    fn exists(&self, locator: &str) -> bool {
        Path::new(locator).exists()
    }
}

/// Validate a merged configuration, short-circuiting on the first failure.
///
/// Runs the inferrer once, after the archive check, so inferred fields are in
/// place for the remaining checks.
pub fn validate_sink_config(
    config: &mut SinkConfig,
    inferrer: &dyn ArgumentInferrer,
    locator: &dyn ArchiveLocator,
) -> Result<(), SinkError> {
    if config.archive.is_empty() {
        return Err(SinkError::EmptyArchive);
    }

    inferrer.infer_missing(config);

    // No supported package scheme starts with "builtin", so this only fires
    // if the scheme list grows to include one.
    if is_package_url_supported(&config.archive)
        && config.archive.starts_with(BUILTIN)
        && !locator.exists(&config.archive)
    {
        return Err(SinkError::MissingLocalArchive(config.archive.clone()));
    }

    if config.name.is_empty() {
        return Err(SinkError::EmptyName(SINK_NAME_NOT_SPECIFIED));
    }

    Ok(())
}

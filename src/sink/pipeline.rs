//! Aggregation pipeline: loader → merger → defaulting → validator → submission.
//!
//! Collaborators are handed in once at construction; nothing is looked up from
//! ambient state. Steps run strictly in sequence.

use crate::admin::{ConnectorCatalog, SinkAdmin};
use crate::error::{SinkError, SINK_NAME_NOT_SPECIFIED};
use crate::sink::document::load_document;
use crate::sink::merge::merge_overrides;
use crate::sink::model::SinkConfig;
use crate::sink::namespace::{apply_creation_defaults, apply_update_defaults, resolve_sink_ref};
use crate::sink::overrides::SinkOverrides;
use crate::sink::package::PackageSource;
use crate::sink::resolver::MembershipPolicy;
use crate::sink::validate::{
    validate_sink_config, ArchiveLocator, ArgumentInferrer, LocalFileSystem, StandardInference,
};
use std::sync::Arc;
use tracing::{debug, info};

pub struct SinkPipeline {
    catalog: Arc<dyn ConnectorCatalog>,
    admin: Arc<dyn SinkAdmin>,
    inferrer: Arc<dyn ArgumentInferrer>,
    locator: Arc<dyn ArchiveLocator>,
    policy: MembershipPolicy,
}

impl SinkPipeline {
    pub fn new(catalog: Arc<dyn ConnectorCatalog>, admin: Arc<dyn SinkAdmin>) -> Self {
        Self {
            catalog,
            admin,
            inferrer: Arc::new(StandardInference),
            locator: Arc::new(LocalFileSystem),
            policy: MembershipPolicy::default(),
        }
    }

    pub fn with_inferrer(mut self, inferrer: Arc<dyn ArgumentInferrer>) -> Self {
        self.inferrer = inferrer;
        self
    }

    pub fn with_locator(mut self, locator: Arc<dyn ArchiveLocator>) -> Self {
        self.locator = locator;
        self
    }

    pub fn with_membership_policy(mut self, policy: MembershipPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Load the document named by the overrides and merge the overrides onto it.
    pub async fn aggregate(&self, overrides: &SinkOverrides) -> Result<SinkConfig, SinkError> {
        let base = load_document(overrides.config_file.as_deref())?;
        merge_overrides(base, overrides, self.catalog.as_ref(), self.policy).await
    }

    /// Build a configuration for a new sink without submitting it.
    pub async fn prepare_create(&self, overrides: &SinkOverrides) -> Result<SinkConfig, SinkError> {
        let mut config = self.aggregate(overrides).await?;
        apply_creation_defaults(&mut config);
        validate_sink_config(&mut config, self.inferrer.as_ref(), self.locator.as_ref())?;
        debug!(sink = %config.fully_qualified_name(), "Sink config ready for creation");
        Ok(config)
    }

    /// Build a configuration for updating an existing sink without submitting it.
    ///
    /// Updates may leave the archive out; only the name is required.
    pub async fn prepare_update(&self, overrides: &SinkOverrides) -> Result<SinkConfig, SinkError> {
        let mut config = self.aggregate(overrides).await?;
        apply_update_defaults(&mut config);
        if config.name.is_empty() {
            return Err(SinkError::EmptyName(SINK_NAME_NOT_SPECIFIED));
        }
        debug!(sink = %config.fully_qualified_name(), "Sink config ready for update");
        Ok(config)
    }

    /// Validate and submit a new sink. Returns the configuration that was submitted.
    pub async fn create(&self, overrides: &SinkOverrides) -> Result<SinkConfig, SinkError> {
        let config = self.prepare_create(overrides).await?;
        let package = PackageSource::for_archive(&config.archive).ok_or(SinkError::EmptyArchive)?;
        self.admin.create_sink(&config, package).await?;
        info!(sink = %config.fully_qualified_name(), archive = %config.archive, "Created sink");
        Ok(config)
    }

    /// Submit an update. Only an archive given as an override is shipped with it.
    pub async fn update(&self, overrides: &SinkOverrides) -> Result<SinkConfig, SinkError> {
        let config = self.prepare_update(overrides).await?;
        let package = overrides
            .archive
            .as_deref()
            .and_then(PackageSource::for_archive);
        self.admin.update_sink(&config, package).await?;
        info!(sink = %config.fully_qualified_name(), "Updated sink");
        Ok(config)
    }

    /// Fetch the deployed configuration of the sink named by the overrides.
    pub async fn fetch(&self, overrides: &SinkOverrides) -> Result<SinkConfig, SinkError> {
        let sink = resolve_sink_ref(overrides)?;
        Ok(self.admin.get_sink(&sink).await?)
    }
}

//! Admin service collaborators
//!
//! The pipeline only sees these traits: a catalog of builtin connectors and a
//! submission endpoint. `RestAdminClient` implements both against the admin REST API.

use crate::error::AdminError;
use crate::sink::model::SinkConfig;
use crate::sink::namespace::SinkRef;
use crate::sink::package::PackageSource;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

mod rest;

pub use rest::RestAdminClient;

/// A connector installed in the serving cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sink_class: Option<String>,
}

impl ConnectorDefinition {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            source_class: None,
            sink_class: None,
        }
    }
}

/// Catalog of builtin connector kinds
#[async_trait]
pub trait ConnectorCatalog: Send + Sync {
    /// All currently installable builtin sinks
    async fn builtin_sinks(&self) -> Result<Vec<ConnectorDefinition>, AdminError>;
}

/// Submission endpoint for finished configurations
#[async_trait]
pub trait SinkAdmin: Send + Sync {
    async fn create_sink(
        &self,
        config: &SinkConfig,
        package: PackageSource,
    ) -> Result<(), AdminError>;

    /// `package` is `None` when the update leaves the deployed artifact alone.
    async fn update_sink(
        &self,
        config: &SinkConfig,
        package: Option<PackageSource>,
    ) -> Result<(), AdminError>;

    /// Deployed configuration of an existing sink
    async fn get_sink(&self, sink: &SinkRef) -> Result<SinkConfig, AdminError>;
}

/// Fixed catalog, for offline use and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    definitions: Vec<ConnectorDefinition>,
}

impl StaticCatalog {
    pub fn new(definitions: Vec<ConnectorDefinition>) -> Self {
        Self { definitions }
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names.into_iter().map(ConnectorDefinition::named).collect())
    }
}

#[async_trait]
impl ConnectorCatalog for StaticCatalog {
    async fn builtin_sinks(&self) -> Result<Vec<ConnectorDefinition>, AdminError> {
        Ok(self.definitions.clone())
    }
}

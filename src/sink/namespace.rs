//! Tenant/namespace defaulting.
//!
//! Creation and update deliberately differ. Creation treats tenant and namespace
//! as a pair: if either is missing both are reset. Update fills each one alone.

use crate::error::{SinkError, SINK_NAME_REQUIRED};
use crate::sink::model::{SinkConfig, DEFAULT_NAMESPACE, PUBLIC_TENANT};
use crate::sink::overrides::SinkOverrides;

/// Creation path: reset both to the defaults when either one is empty.
pub fn apply_creation_defaults(config: &mut SinkConfig) {
    if config.tenant.is_empty() || config.namespace.is_empty() {
        config.tenant = PUBLIC_TENANT.to_string();
        config.namespace = DEFAULT_NAMESPACE.to_string();
    }
}

/// Update path: default tenant and namespace independently.
pub fn apply_update_defaults(config: &mut SinkConfig) {
    if config.tenant.is_empty() {
        config.tenant = PUBLIC_TENANT.to_string();
    }
    if config.namespace.is_empty() {
        config.namespace = DEFAULT_NAMESPACE.to_string();
    }
}

/// Identity of an existing sink, for operations that address one by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkRef {
    pub tenant: String,
    pub namespace: String,
    pub name: String,
}

impl std::fmt::Display for SinkRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.tenant, self.namespace, self.name)
    }
}

/// Resolve the sink addressed by the override identity fields, with creation-style defaulting.
pub fn resolve_sink_ref(overrides: &SinkOverrides) -> Result<SinkRef, SinkError> {
    let mut tenant = overrides.tenant.clone().unwrap_or_default();
    let mut namespace = overrides.namespace.clone().unwrap_or_default();
    if tenant.is_empty() || namespace.is_empty() {
        tenant = PUBLIC_TENANT.to_string();
        namespace = DEFAULT_NAMESPACE.to_string();
    }

    let name = overrides.name.clone().unwrap_or_default();
    if name.is_empty() {
        return Err(SinkError::EmptyName(SINK_NAME_REQUIRED));
    }

    Ok(SinkRef {
        tenant,
        namespace,
        name,
    })
}

//! Field merger: applies override fields onto a base configuration.

use crate::admin::ConnectorCatalog;
use crate::error::SinkError;
use crate::sink::model::{Resources, SinkConfig};
use crate::sink::overrides::SinkOverrides;
use crate::sink::resolver::{resolve_builtin_archive, MembershipPolicy};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Parse a comma-separated topic list. Order is preserved.
pub fn split_inputs(inputs: &str) -> Vec<String> {
    inputs.split(',').map(str::to_string).collect()
}

fn parse_topic_map(
    field: &'static str,
    raw: &str,
) -> Result<BTreeMap<String, String>, SinkError> {
    serde_json::from_str(raw).map_err(|source| SinkError::InvalidJson { field, source })
}

/// Decode free-form connector configs. Malformed input produces no mapping rather
/// than an error; the problem is logged.
pub fn parse_configs(raw: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Map<String, Value>>(raw) {
        Ok(map) => Some(map),
        Err(e) => {
            warn!(error = %e, "Ignoring sink configs that are not a JSON object");
            None
        }
    }
}

/// Merge `overrides` onto `base`. A present override wins; an absent one keeps the base value.
///
/// The catalog is only consulted when a sink type is given, and never when
/// both an archive and a sink type are given.
pub async fn merge_overrides(
    mut base: SinkConfig,
    overrides: &SinkOverrides,
    catalog: &dyn ConnectorCatalog,
    policy: MembershipPolicy,
) -> Result<SinkConfig, SinkError> {
    if overrides.archive.is_some() && overrides.sink_type.is_some() {
        return Err(SinkError::ConflictingPackaging);
    }

    let config = &mut base;

    if let Some(tenant) = &overrides.tenant {
        config.tenant = tenant.clone();
    }
    if let Some(namespace) = &overrides.namespace {
        config.namespace = namespace.clone();
    }
    if let Some(name) = &overrides.name {
        config.name = name.clone();
    }
    if let Some(class_name) = &overrides.class_name {
        config.class_name = class_name.clone();
    }
    if let Some(guarantees) = overrides.processing_guarantees {
        config.processing_guarantees = Some(guarantees);
    }
    if let Some(retain_ordering) = overrides.retain_ordering {
        config.retain_ordering = retain_ordering;
    }
    if let Some(inputs) = &overrides.inputs {
        config.inputs = split_inputs(inputs);
    }
    if let Some(raw) = &overrides.custom_serde_inputs {
        config.topic_to_serde_class_name = parse_topic_map("custom serde inputs", raw)?;
    }
    if let Some(raw) = &overrides.custom_schema_inputs {
        config.topic_to_schema_type = parse_topic_map("custom schema inputs", raw)?;
    }
    if let Some(subscription_name) = &overrides.subscription_name {
        config.source_subscription_name = Some(subscription_name.clone());
    }
    if let Some(position) = overrides.subscription_position {
        config.source_subscription_position = Some(position);
    }
    if let Some(pattern) = &overrides.topics_pattern {
        config.topics_pattern = Some(pattern.clone());
    }

    // A missing or zero override resets parallelism to 1, even over a document value.
    config.parallelism = overrides.parallelism.filter(|p| *p > 0).unwrap_or(1);

    if let Some(archive) = &overrides.archive {
        config.archive = archive.clone();
    }
    if let Some(sink_type) = &overrides.sink_type {
        config.archive = resolve_builtin_archive(sink_type, catalog, policy).await;
    }

    if let Some(cpu) = overrides.cpu {
        config.resources.get_or_insert_with(Resources::default).cpu = cpu;
    }
    if let Some(disk) = overrides.disk {
        config.resources.get_or_insert_with(Resources::default).disk = disk;
    }
    if let Some(ram) = overrides.ram {
        config.resources.get_or_insert_with(Resources::default).ram = ram;
    }

    if let Some(raw) = &overrides.sink_config {
        config.configs = parse_configs(raw);
    }
    if let Some(auto_ack) = overrides.auto_ack {
        config.auto_ack = auto_ack;
    }
    if let Some(timeout_ms) = overrides.timeout_ms {
        config.timeout_ms = Some(timeout_ms);
    }

    debug!(
        sink = %base.fully_qualified_name(),
        archive = %base.archive,
        parallelism = base.parallelism,
        "Merged sink overrides"
    );
    Ok(base)
}

//! Sink connector configuration shape, as stored in YAML documents and sent to the admin service.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

pub const PUBLIC_TENANT: &str = "public";
pub const DEFAULT_NAMESPACE: &str = "default";
pub const BUILTIN_SCHEME: &str = "builtin://";

/// Message delivery guarantee for a sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessingGuarantees {
    AtleastOnce,
    AtmostOnce,
    EffectivelyOnce,
}

impl std::str::FromStr for ProcessingGuarantees {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ATLEAST_ONCE" => Ok(Self::AtleastOnce),
            "ATMOST_ONCE" => Ok(Self::AtmostOnce),
            "EFFECTIVELY_ONCE" => Ok(Self::EffectivelyOnce),
            other => Err(format!(
                "Invalid processing guarantees: {} (must be ATLEAST_ONCE, ATMOST_ONCE or EFFECTIVELY_ONCE)",
                other
            )),
        }
    }
}

/// Where a new subscription starts reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubscriptionPosition {
    Latest,
    Earliest,
}

impl std::str::FromStr for SubscriptionPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "latest" => Ok(Self::Latest),
            "earliest" => Ok(Self::Earliest),
            other => Err(format!(
                "Invalid subscription position: {} (must be Latest or Earliest)",
                other
            )),
        }
    }
}

/// Per-instance resource request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resources {
    #[serde(default = "default_cpu")]
    pub cpu: f64,
    /// Bytes
    #[serde(default = "default_disk")]
    pub disk: u64,
    /// Bytes
    #[serde(default = "default_ram")]
    pub ram: u64,
}

fn default_cpu() -> f64 {
    1.0
}

fn default_disk() -> u64 {
    10 * 1024 * 1024 * 1024 // 10 GiB
}

fn default_ram() -> u64 {
    1024 * 1024 * 1024 // 1 GiB
}

impl Default for Resources {
    fn default() -> Self {
        Self {
            cpu: default_cpu(),
            disk: default_disk(),
            ram: default_ram(),
        }
    }
}

/// Sink connector configuration.
///
/// Every field is optional in a YAML document; missing fields take their zero value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SinkConfig {
    pub tenant: String,
    pub namespace: String,
    pub name: String,
    pub class_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_guarantees: Option<ProcessingGuarantees>,
    pub retain_ordering: bool,
    pub auto_ack: bool,

    pub inputs: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub topic_to_serde_class_name: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub topic_to_schema_type: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topics_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_subscription_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_subscription_position: Option<SubscriptionPosition>,

    pub parallelism: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Resources>,
    /// `None` is "unset", which the admin service treats differently from zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,

    pub archive: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub configs: Option<Map<String, Value>>,
}

impl SinkConfig {
    /// `tenant/namespace/name`, for log lines and messages.
    pub fn fully_qualified_name(&self) -> String {
        format!("{}/{}/{}", self.tenant, self.namespace, self.name)
    }

    pub fn is_builtin(&self) -> bool {
        self.archive.starts_with(BUILTIN_SCHEME)
    }
}

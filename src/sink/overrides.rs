//! Individually supplied override fields for one aggregation call.
//!
//! Each field is an explicit `Option`: `None` means "not supplied" and leaves the
//! base value alone, `Some(_)` always wins. This is what lets a library caller
//! override a flag to `false` or a count to zero. The CLI normalises empty strings
//! and zero numbers to `None` when it builds one of these.

use crate::sink::model::{ProcessingGuarantees, SubscriptionPosition};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SinkOverrides {
    /// YAML document to use as the base configuration
    pub config_file: Option<PathBuf>,

    pub tenant: Option<String>,
    pub namespace: Option<String>,
    pub name: Option<String>,
    pub class_name: Option<String>,
    pub processing_guarantees: Option<ProcessingGuarantees>,
    pub retain_ordering: Option<bool>,
    pub auto_ack: Option<bool>,

    /// Comma-separated topic list
    pub inputs: Option<String>,
    /// JSON object: topic -> serde class name
    pub custom_serde_inputs: Option<String>,
    /// JSON object: topic -> schema type
    pub custom_schema_inputs: Option<String>,
    pub topics_pattern: Option<String>,
    pub subscription_name: Option<String>,
    pub subscription_position: Option<SubscriptionPosition>,

    pub parallelism: Option<u32>,
    pub cpu: Option<f64>,
    pub disk: Option<u64>,
    pub ram: Option<u64>,
    pub timeout_ms: Option<u64>,

    pub archive: Option<String>,
    /// Short builtin connector name, mutually exclusive with `archive`
    pub sink_type: Option<String>,

    /// JSON object of free-form connector configs
    pub sink_config: Option<String>,
}

impl SinkOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_archive(mut self, archive: impl Into<String>) -> Self {
        self.archive = Some(archive.into());
        self
    }

    pub fn with_sink_type(mut self, sink_type: impl Into<String>) -> Self {
        self.sink_type = Some(sink_type.into());
        self
    }

    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }
}

/// Treat an empty string as "not supplied".
pub fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

/// Treat zero as "not supplied".
pub fn non_zero<T: Default + PartialEq + Copy>(value: Option<T>) -> Option<T> {
    value.filter(|v| *v != T::default())
}

/// Treat `false` as "not supplied".
pub fn only_true(value: bool) -> Option<bool> {
    value.then_some(true)
}

//! Sinkconf: Sink Connector Configuration
//!
//! Builds the configuration for a streaming sink connector from an optional YAML
//! document and individually supplied overrides, resolves builtin connector types
//! against the admin service, validates the result and submits it.

pub mod admin;
pub mod cli;
pub mod error;
pub mod logging;
pub mod settings;
pub mod sink;

//! CLI parse: clap types for sinkconf. No behavior; definitions only.

use crate::sink::model::{ProcessingGuarantees, SubscriptionPosition};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// sinkconf - build, validate and submit sink connector configurations
#[derive(Parser)]
#[command(name = "sinkconf")]
#[command(about = "Build, validate and submit sink connector configurations")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Settings file (overrides the global settings file)
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Admin service URL (overrides settings)
    #[arg(long, global = true)]
    pub admin_url: Option<String>,

    /// Enable verbose logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sink connector operations
    Sinks {
        #[command(subcommand)]
        command: SinkCommands,
    },
}

#[derive(Subcommand)]
pub enum SinkCommands {
    /// Create a sink
    Create {
        #[command(flatten)]
        args: SinkArgs,
        /// Print the validated config instead of submitting it
        #[arg(long)]
        dry_run: bool,
    },
    /// Update an existing sink
    Update {
        #[command(flatten)]
        args: SinkArgs,
        /// Print the merged config instead of submitting it
        #[arg(long)]
        dry_run: bool,
    },
    /// Build and validate a creation config without submitting it
    Render {
        #[command(flatten)]
        args: SinkArgs,
        /// Output format (json or yaml)
        #[arg(long, default_value = "json")]
        format: String,
    },
    /// Show the deployed config of a sink
    Get {
        #[command(flatten)]
        id: SinkIdArgs,
        /// Output format (json or yaml)
        #[arg(long, default_value = "json")]
        format: String,
    },
    /// List builtin sink connectors
    Builtin {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

/// Identity of an existing sink
#[derive(Args, Debug, Clone, Default)]
pub struct SinkIdArgs {
    /// Tenant (defaults to "public")
    #[arg(long)]
    pub tenant: Option<String>,
    /// Namespace (defaults to "default")
    #[arg(long)]
    pub namespace: Option<String>,
    /// Sink name
    #[arg(long)]
    pub name: Option<String>,
}

/// Override fields for create/update. Empty strings and zeros count as "not given".
#[derive(Args, Debug, Clone, Default)]
pub struct SinkArgs {
    #[command(flatten)]
    pub id: SinkIdArgs,

    /// YAML sink config file used as the base configuration
    #[arg(long)]
    pub sink_config_file: Option<PathBuf>,

    /// Sink class name
    #[arg(long)]
    pub classname: Option<String>,

    /// ATLEAST_ONCE, ATMOST_ONCE or EFFECTIVELY_ONCE
    #[arg(long)]
    pub processing_guarantees: Option<ProcessingGuarantees>,

    /// Keep message order
    #[arg(long)]
    pub retain_ordering: bool,

    /// Comma-separated input topics
    #[arg(long)]
    pub inputs: Option<String>,

    /// JSON map of topic to serde class name
    #[arg(long)]
    pub custom_serde_inputs: Option<String>,

    /// JSON map of topic to schema type
    #[arg(long)]
    pub custom_schema_inputs: Option<String>,

    /// Subscription name
    #[arg(long)]
    pub subs_name: Option<String>,

    /// Subscription position (Latest or Earliest)
    #[arg(long)]
    pub subs_position: Option<SubscriptionPosition>,

    /// Regex of input topics
    #[arg(long)]
    pub topics_pattern: Option<String>,

    /// Number of instances
    #[arg(long)]
    pub parallelism: Option<u32>,

    /// Archive path, package URL or builtin:// locator
    #[arg(long)]
    pub archive: Option<String>,

    /// Builtin sink type, instead of --archive
    #[arg(long)]
    pub sink_type: Option<String>,

    /// Match --sink-type anywhere in the builtin list instead of exactly
    #[arg(long)]
    pub legacy_type_match: bool,

    /// CPU cores per instance
    #[arg(long)]
    pub cpu: Option<f64>,

    /// Disk bytes per instance
    #[arg(long)]
    pub disk: Option<u64>,

    /// RAM bytes per instance
    #[arg(long)]
    pub ram: Option<u64>,

    /// JSON object of connector configs
    #[arg(long)]
    pub sink_config: Option<String>,

    /// Let the framework acknowledge messages
    #[arg(long)]
    pub auto_ack: bool,

    /// Message timeout in milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,
}

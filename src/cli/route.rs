//! CLI route: run context and command dispatch to the sink pipeline and presentation.

use crate::admin::{ConnectorCatalog, RestAdminClient};
use crate::cli::parse::{Commands, SinkArgs, SinkCommands, SinkIdArgs};
use crate::cli::presentation::{format_builtin_json, format_builtin_text, format_sink_config};
use crate::error::SinkError;
use crate::settings::{CtlSettings, SettingsLoader};
use crate::sink::overrides::{non_empty, non_zero, only_true, SinkOverrides};
use crate::sink::pipeline::SinkPipeline;
use crate::sink::resolver::MembershipPolicy;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

impl From<&SinkIdArgs> for SinkOverrides {
    fn from(id: &SinkIdArgs) -> Self {
        SinkOverrides {
            tenant: non_empty(id.tenant.as_deref()),
            namespace: non_empty(id.namespace.as_deref()),
            name: non_empty(id.name.as_deref()),
            ..Default::default()
        }
    }
}

impl From<&SinkArgs> for SinkOverrides {
    fn from(args: &SinkArgs) -> Self {
        SinkOverrides {
            config_file: args
                .sink_config_file
                .clone()
                .filter(|p| !p.as_os_str().is_empty()),
            class_name: non_empty(args.classname.as_deref()),
            processing_guarantees: args.processing_guarantees,
            retain_ordering: only_true(args.retain_ordering),
            auto_ack: only_true(args.auto_ack),
            inputs: non_empty(args.inputs.as_deref()),
            custom_serde_inputs: non_empty(args.custom_serde_inputs.as_deref()),
            custom_schema_inputs: non_empty(args.custom_schema_inputs.as_deref()),
            topics_pattern: non_empty(args.topics_pattern.as_deref()),
            subscription_name: non_empty(args.subs_name.as_deref()),
            subscription_position: args.subs_position,
            parallelism: non_zero(args.parallelism),
            cpu: non_zero(args.cpu),
            disk: non_zero(args.disk),
            ram: non_zero(args.ram),
            timeout_ms: non_zero(args.timeout_ms),
            archive: non_empty(args.archive.as_deref()),
            sink_type: non_empty(args.sink_type.as_deref()),
            sink_config: non_empty(args.sink_config.as_deref()),
            ..SinkOverrides::from(&args.id)
        }
    }
}

fn membership_policy(args: &SinkArgs) -> MembershipPolicy {
    if args.legacy_type_match {
        MembershipPolicy::Substring
    } else {
        MembershipPolicy::Exact
    }
}

/// Runtime context for CLI execution: the admin client built from tool settings.
pub struct RunContext {
    admin: Arc<RestAdminClient>,
}

impl RunContext {
    /// Load settings (optionally from an explicit file) and build the admin client.
    pub fn new(settings_path: Option<PathBuf>, admin_url: Option<String>) -> Result<Self, SinkError> {
        let mut settings = SettingsLoader::load(settings_path.as_deref())?;
        if let Some(url) = admin_url {
            settings.admin.web_service_url = url;
        }
        Self::from_settings(settings)
    }

    pub fn from_settings(settings: CtlSettings) -> Result<Self, SinkError> {
        let admin = Arc::new(RestAdminClient::new(&settings.admin)?);
        debug!(
            admin_url = %admin.base_url(),
            timeout_ms = settings.admin.request_timeout_ms,
            "Admin client configured"
        );
        Ok(Self { admin })
    }

    fn pipeline(&self, policy: MembershipPolicy) -> SinkPipeline {
        SinkPipeline::new(self.admin.clone(), self.admin.clone()).with_membership_policy(policy)
    }

    /// Execute a command, returning the text to print on success.
    pub fn execute(&self, command: &Commands) -> Result<String, SinkError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| SinkError::Settings(format!("Failed to start async runtime: {}", e)))?;
        runtime.block_on(self.dispatch(command))
    }

    async fn dispatch(&self, command: &Commands) -> Result<String, SinkError> {
        match command {
            Commands::Sinks { command } => self.dispatch_sinks(command).await,
        }
    }

    async fn dispatch_sinks(&self, command: &SinkCommands) -> Result<String, SinkError> {
        match command {
            SinkCommands::Create { args, dry_run } => {
                let pipeline = self.pipeline(membership_policy(args));
                let overrides = SinkOverrides::from(args);
                if *dry_run {
                    let config = pipeline.prepare_create(&overrides).await?;
                    return format_sink_config(&config, "json");
                }
                let config = pipeline.create(&overrides).await?;
                Ok(format!(
                    "Created {} successfully",
                    config.fully_qualified_name()
                ))
            }
            SinkCommands::Update { args, dry_run } => {
                let pipeline = self.pipeline(membership_policy(args));
                let overrides = SinkOverrides::from(args);
                if *dry_run {
                    let config = pipeline.prepare_update(&overrides).await?;
                    return format_sink_config(&config, "json");
                }
                let config = pipeline.update(&overrides).await?;
                Ok(format!(
                    "Updated {} successfully",
                    config.fully_qualified_name()
                ))
            }
            SinkCommands::Render { args, format } => {
                let pipeline = self.pipeline(membership_policy(args));
                let config = pipeline.prepare_create(&SinkOverrides::from(args)).await?;
                format_sink_config(&config, format)
            }
            SinkCommands::Get { id, format } => {
                let pipeline = self.pipeline(MembershipPolicy::default());
                let config = pipeline.fetch(&SinkOverrides::from(id)).await?;
                format_sink_config(&config, format)
            }
            SinkCommands::Builtin { format } => {
                let definitions = self.admin.builtin_sinks().await?;
                match format.as_str() {
                    "json" => Ok(format_builtin_json(&definitions)),
                    _ => Ok(format_builtin_text(&definitions)),
                }
            }
        }
    }
}

//! REST client for the admin service's `/admin/v3/sinks` endpoints.

use super::{ConnectorCatalog, ConnectorDefinition, SinkAdmin};
use crate::error::AdminError;
use crate::settings::AdminSettings;
use crate::sink::model::SinkConfig;
use crate::sink::namespace::SinkRef;
use crate::sink::package::PackageSource;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::debug;

const SINKS_PATH: &str = "/admin/v3/sinks";

pub struct RestAdminClient {
    base_url: String,
    client: Client,
}

impl RestAdminClient {
    pub fn new(settings: &AdminSettings) -> Result<Self, AdminError> {
        settings.validate().map_err(AdminError::NotConfigured)?;
        let client = Client::builder()
            .timeout(Duration::from_millis(settings.request_timeout_ms))
            .build()?;
        Ok(Self {
            base_url: settings.web_service_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn sink_url(&self, tenant: &str, namespace: &str, name: &str) -> String {
        format!(
            "{}{}/{}/{}/{}",
            self.base_url, SINKS_PATH, tenant, namespace, name
        )
    }

    /// Multipart body: the config as JSON, plus the package as a URL or an uploaded file.
    async fn sink_form(
        config: &SinkConfig,
        package: Option<PackageSource>,
    ) -> Result<Form, AdminError> {
        let config_json = serde_json::to_string(config)?;
        let mut form = Form::new().part(
            "sinkConfig",
            Part::text(config_json).mime_str("application/json")?,
        );

        match package {
            Some(PackageSource::Url(url)) => {
                form = form.text("url", url);
            }
            Some(PackageSource::File(path)) => {
                let bytes = tokio::fs::read(&path)
                    .await
                    .map_err(|source| AdminError::Package {
                        path: path.clone(),
                        source,
                    })?;
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "package".to_string());
                form = form.part("data", Part::bytes(bytes).file_name(file_name));
            }
            None => {}
        }
        Ok(form)
    }
}

/// Turn a non-success response into `AdminError::Status` with the body text.
async fn check_status(response: Response) -> Result<Response, AdminError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(AdminError::Status {
        code: status.as_u16(),
        body,
    })
}

#[async_trait]
impl ConnectorCatalog for RestAdminClient {
    async fn builtin_sinks(&self) -> Result<Vec<ConnectorDefinition>, AdminError> {
        let url = format!("{}{}/builtinsinks", self.base_url, SINKS_PATH);
        debug!(%url, "Fetching builtin sinks");
        let response = self.client.get(&url).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl SinkAdmin for RestAdminClient {
    async fn create_sink(
        &self,
        config: &SinkConfig,
        package: PackageSource,
    ) -> Result<(), AdminError> {
        let url = self.sink_url(&config.tenant, &config.namespace, &config.name);
        let form = Self::sink_form(config, Some(package)).await?;
        debug!(%url, "Creating sink");
        let response = self.client.post(&url).multipart(form).send().await?;
        check_status(response).await?;
        Ok(())
    }

    async fn update_sink(
        &self,
        config: &SinkConfig,
        package: Option<PackageSource>,
    ) -> Result<(), AdminError> {
        let url = self.sink_url(&config.tenant, &config.namespace, &config.name);
        let form = Self::sink_form(config, package).await?;
        debug!(%url, "Updating sink");
        let response = self.client.put(&url).multipart(form).send().await?;
        check_status(response).await?;
        Ok(())
    }

    async fn get_sink(&self, sink: &SinkRef) -> Result<SinkConfig, AdminError> {
        let url = self.sink_url(&sink.tenant, &sink.namespace, &sink.name);
        debug!(%url, "Fetching sink");
        let response = self.client.get(&url).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }
}

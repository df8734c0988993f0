//! Shared test utilities for integration tests
//!
//! In-memory admin collaborators that record what the pipeline asked for, plus
//! the XDG environment isolation used by the settings tests.

use async_trait::async_trait;
use sinkconf::admin::{ConnectorCatalog, ConnectorDefinition, SinkAdmin};
use sinkconf::error::AdminError;
use sinkconf::sink::{PackageSource, SinkConfig, SinkPipeline, SinkRef};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Catalog that counts how often it is queried.
pub struct CountingCatalog {
    names: Vec<String>,
    calls: AtomicUsize,
}

impl CountingCatalog {
    pub fn new(names: &[&str]) -> Self {
        Self {
            names: names.iter().map(|n| n.to_string()).collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConnectorCatalog for CountingCatalog {
    async fn builtin_sinks(&self) -> Result<Vec<ConnectorDefinition>, AdminError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .names
            .iter()
            .cloned()
            .map(ConnectorDefinition::named)
            .collect())
    }
}

/// One call made against the admin service.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create(SinkConfig, PackageSource),
    Update(SinkConfig, Option<PackageSource>),
    Get(SinkRef),
}

/// Admin service that records submissions and serves a fixed deployed config.
#[derive(Default)]
pub struct RecordingAdmin {
    pub submissions: Mutex<Vec<Submission>>,
    pub deployed: Option<SinkConfig>,
}

impl RecordingAdmin {
    pub fn serving(deployed: SinkConfig) -> Self {
        Self {
            submissions: Mutex::new(Vec::new()),
            deployed: Some(deployed),
        }
    }

    pub fn recorded(&self) -> Vec<Submission> {
        self.submissions.lock().unwrap().clone()
    }
}

#[async_trait]
impl SinkAdmin for RecordingAdmin {
    async fn create_sink(
        &self,
        config: &SinkConfig,
        package: PackageSource,
    ) -> Result<(), AdminError> {
        self.submissions
            .lock()
            .unwrap()
            .push(Submission::Create(config.clone(), package));
        Ok(())
    }

    async fn update_sink(
        &self,
        config: &SinkConfig,
        package: Option<PackageSource>,
    ) -> Result<(), AdminError> {
        self.submissions
            .lock()
            .unwrap()
            .push(Submission::Update(config.clone(), package));
        Ok(())
    }

    async fn get_sink(&self, sink: &SinkRef) -> Result<SinkConfig, AdminError> {
        self.submissions
            .lock()
            .unwrap()
            .push(Submission::Get(sink.clone()));
        self.deployed.clone().ok_or(AdminError::Status {
            code: 404,
            body: format!("Sink {} doesn't exist", sink),
        })
    }
}

/// Pipeline wired to the given in-memory collaborators.
pub fn pipeline(catalog: &Arc<CountingCatalog>, admin: &Arc<RecordingAdmin>) -> SinkPipeline {
    SinkPipeline::new(catalog.clone(), admin.clone())
}

/// Write a YAML sink document into `dir` and return its path.
pub fn write_document(dir: &TempDir, file_name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(file_name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Global mutex to serialize XDG environment variable access across all tests
static XDG_ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Environment variable state to restore after test
struct EnvState {
    home: Option<String>,
    xdg_config_home: Option<String>,
}

impl EnvState {
    fn capture() -> Self {
        Self {
            home: std::env::var("HOME").ok(),
            xdg_config_home: std::env::var("XDG_CONFIG_HOME").ok(),
        }
    }

    fn restore(self) {
        match self.home {
            Some(orig) => std::env::set_var("HOME", orig),
            None => std::env::remove_var("HOME"),
        }
        match self.xdg_config_home {
            Some(orig) => std::env::set_var("XDG_CONFIG_HOME", orig),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
    }
}

/// Run `f` with HOME and XDG_CONFIG_HOME pointed into `test_dir`, restoring them afterwards.
pub fn with_xdg_env<F, R>(test_dir: &TempDir, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = XDG_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let env_state = EnvState::capture();

    let test_home = test_dir.path().join("home");
    std::fs::create_dir_all(&test_home).unwrap();
    std::env::set_var("HOME", &test_home);
    std::env::set_var("XDG_CONFIG_HOME", test_dir.path());

    let result = f();

    env_state.restore();
    result
}

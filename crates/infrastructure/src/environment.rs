//! Composition root wiring the concrete stores into a registry

use anyhow::{Context, Result};
use hapify_common::{init_structured_logging, LoggingConfig};
use hapify_domain::config::HapifyConfig;
use hapify_domain::{
    ChannelLike, Project, ProjectBackends, ProjectRegistry, ProjectResult, RemoteProjectStore,
    SharedProject,
};
use std::sync::Arc;
use tracing::info;

use crate::config::ConfigLoader;
use crate::schema::ProjectConfigSchema;
use crate::storage::FileProjectStore;

pub struct ProjectEnvironment {
    config: HapifyConfig,
    registry: Arc<ProjectRegistry>,
}

impl ProjectEnvironment {
    /// Build backends from `config`; the remote store is supplied by the caller
    pub fn new(config: HapifyConfig, remote: Arc<dyn RemoteProjectStore>) -> Self {
        let backends = ProjectBackends::new(
            Arc::new(FileProjectStore::new(config.storage.clone())),
            remote,
            Arc::new(ProjectConfigSchema::new()),
        );

        Self {
            config,
            registry: Arc::new(ProjectRegistry::new(backends)),
        }
    }

    /// Load configuration, install logging and build the environment
    pub async fn bootstrap(
        loader: &ConfigLoader,
        remote: Arc<dyn RemoteProjectStore>,
    ) -> Result<Self> {
        let config = loader.load().await.context("Failed to load configuration")?;
        init_structured_logging(LoggingConfig::from_settings(
            &config.logging.level,
            config.logging.json_output,
        ))
        .context("Failed to initialise logging")?;

        info!("Project environment ready");
        Ok(Self::new(config, remote))
    }

    pub fn config(&self) -> &HapifyConfig {
        &self.config
    }

    pub fn registry(&self) -> Arc<ProjectRegistry> {
        self.registry.clone()
    }

    /// Shared, loaded project for `identifier`
    pub async fn project(&self, identifier: &str) -> ProjectResult<SharedProject> {
        self.registry.get_instance(identifier).await
    }

    /// Create a local project file for a channel, using configured defaults
    pub async fn create_local_for_channel(
        &self,
        channel: &dyn ChannelLike,
        name: Option<String>,
        description: Option<String>,
    ) -> ProjectResult<()> {
        Project::create_local_for_channel_with(
            self.registry.backends().local.as_ref(),
            channel,
            &self.config.project,
            name,
            description,
        )
        .await
    }
}

use anyhow::{Context, Result};
use hapify_domain::config::HapifyConfig;
use std::env;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    File(PathBuf),
    Default,
}

pub struct ConfigLoader {
    config_paths: Vec<PathBuf>,
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            config_paths: Self::default_config_paths(),
            env_prefix: "HAPIFY_".to_string(),
        }
    }

    /// Loader that only looks at explicitly added paths
    pub fn empty() -> Self {
        Self {
            config_paths: Vec::new(),
            env_prefix: "HAPIFY_".to_string(),
        }
    }

    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.config_paths.insert(0, path);
        self
    }

    pub fn with_env_prefix(mut self, prefix: String) -> Self {
        self.env_prefix = prefix;
        self
    }

    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from("hapify.toml"),
            PathBuf::from(".hapifyrc.toml"),
            PathBuf::from(".hapifyrc.json"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("hapify").join("config.toml"));
            paths.push(config_dir.join("hapify").join("config.json"));
        }

        paths
    }

    pub async fn load(&self) -> Result<HapifyConfig> {
        let (config, source) = self.load_base_config().await?;
        debug!("Configuration source: {:?}", source);
        self.apply_env_overrides(config)
    }

    /// First readable config file wins; unreadable ones are skipped with a warning
    async fn load_base_config(&self) -> Result<(HapifyConfig, ConfigSource)> {
        for path in &self.config_paths {
            if !path.exists() {
                continue;
            }
            match self.load_file(path).await {
                Ok(config) => {
                    info!("Loaded configuration from: {}", path.display());
                    return Ok((config, ConfigSource::File(path.clone())));
                }
                Err(e) => {
                    warn!("Failed to load config from {}: {:#}", path.display(), e);
                }
            }
        }
        Ok((HapifyConfig::default(), ConfigSource::Default))
    }

    async fn load_file(&self, path: &Path) -> Result<HapifyConfig> {
        let content = fs::read_to_string(path)
            .await
            .context("Failed to read config file")?;

        let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");

        match extension {
            "toml" | "" => toml::from_str(&content).context("Failed to parse TOML config"),
            "json" => serde_json::from_str(&content).context("Failed to parse JSON config"),
            _ => toml::from_str(&content)
                .or_else(|_| serde_json::from_str(&content))
                .context("Failed to parse config file"),
        }
    }

    fn apply_env_overrides(&self, mut config: HapifyConfig) -> Result<HapifyConfig> {
        if let Ok(level) = env::var(format!("{}LOG_LEVEL", self.env_prefix)) {
            config.logging.level = level;
        }

        if let Ok(json) = env::var(format!("{}LOG_JSON", self.env_prefix)) {
            config.logging.json_output = json
                .parse()
                .with_context(|| format!("{}LOG_JSON must be true or false", self.env_prefix))?;
        }

        if let Ok(name) = env::var(format!("{}PROJECT_NAME", self.env_prefix)) {
            config.project.name = name;
        }

        if let Ok(description) = env::var(format!("{}PROJECT_DESCRIPTION", self.env_prefix)) {
            config.project.description = description;
        }

        Ok(config)
    }
}

use serde::Deserialize;
use std::{collections::HashMap, error::Error, path::PathBuf};

#[derive(Deserialize, Clone, Debug)]
pub struct ServiceConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: log::Level,
    /// YAML or JSON list of redirects, layered over `paths`.
    #[serde(default)]
    pub redirects_file: Option<PathBuf>,
    #[serde(default)]
    pub paths: HashMap<String, String>,
}

const fn default_port() -> u16 {
    8080
}

const fn default_log_level() -> log::Level {
    log::Level::Info
}

pub fn config_path() -> PathBuf {
    dotenvy::var("CONFIG_FILE")
        .ok()
        .unwrap_or_else(|| "config.toml".into())
        .into()
}

pub async fn get_config() -> Result<ServiceConfig, Box<dyn Error + Send + Sync>> {
    let config_str = tokio::fs::read_to_string(config_path()).await?;
    let config: ServiceConfig = toml::from_str(&config_str)?;
    Ok(config)
}

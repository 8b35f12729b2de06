mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, io::ErrorKind, path::Path};
use tracing::debug;

/// Loads configuration: defaults, then the optional YAML file at
/// `CONFIG_PATH`, then `.env`, then process environment variables.
pub async fn load() -> Result<Config> {
    if let Ok(path) = dotenvy::dotenv() {
        debug!("Loaded environment from: {}", path.display());
    }

    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    let mut config = load_file(&config_path).await?;
    config.apply_overrides(|key| env::var(key).ok())?;

    Ok(config)
}

/// Reads a YAML config file. A missing file yields the defaults.
pub async fn load_file(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    match tokio::fs::read_to_string(path).await {
        Ok(config_str) if config_str.trim().is_empty() => Ok(Config::default()),
        Ok(config_str) => Ok(serde_yaml::from_str(&config_str)?),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No config file at {}, using defaults", path.display());
            Ok(Config::default())
        }
        Err(e) => Err(e.into()),
    }
}

impl Config {
    /// Applies environment overrides through `lookup`, which maps a variable
    /// name to its value.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("PYTHON_AI_SERVICE_URL") {
            self.ai_service.base_url = url;
        }
        if let Some(key) = lookup("PYTHON_SERVICE_API_KEY") {
            self.ai_service.api_key = key;
        }
        if let Some(key) = lookup("SHOPIFY_API_KEY") {
            self.shopify.api_key = key;
        }
        if let Some(secret) = lookup("SHOPIFY_API_SECRET") {
            self.shopify.api_secret = secret;
        }
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| Error::config(format!("Invalid PORT value: '{}'", port)))?;
        }
        if let Some(url) = lookup("PUBLIC_URL") {
            self.server.public_url = Some(url);
        }
        if let Some(level) = lookup("LOG_LEVEL") {
            self.server.logs.level = level;
        }

        Ok(())
    }
}

mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use std::path::Path;
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the configuration from `CONFIG_PATH` (default `config.yaml`) and
/// applies environment overrides.
pub async fn load() -> Result<Config> {
    load_with(|key| env::var(key).ok(), Path::new(DEFAULT_CONFIG_PATH)).await
}

/// Same as [`load`], reading variables through `lookup`.
///
/// A missing `default_path` yields built-in defaults; a missing file named by
/// `CONFIG_PATH` is an error.
pub async fn load_with(
    lookup: impl Fn(&str) -> Option<String>,
    default_path: &Path,
) -> Result<Config> {
    let config = match lookup("CONFIG_PATH") {
        Some(path) => load_from_path(&path).await?,
        None if default_path.exists() => load_from_path(default_path).await?,
        None => {
            debug!("No {} found, using defaults", default_path.display());
            Config::default()
        }
    };

    apply_env_overrides(config, &lookup)
}

pub async fn load_from_path(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path).await?;
    parse(&config_str)
}

pub fn parse(config_str: &str) -> Result<Config> {
    // An empty document deserializes to `null`, which serde_yaml rejects for structs.
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(config_str)?)
}

fn apply_env_overrides(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<Config> {
    if let Some(port) = lookup("PORT") {
        config.server.port = port
            .parse()
            .map_err(|_| Error::config(format!("Invalid PORT value: '{}'", port)))?;
    }

    if let Some(model_id) = lookup("SENTIMENT_MODEL_ID") {
        config.models.sentiment.model_id = model_id;
    }

    Ok(config)
}

//! Configuration loading from TOML files

mod models;

pub use models::{default_models, load_models_config, parse_models_config, ChartConfig, ModelPreset, ModelsConfig};

use crate::curve::CurveError;
use crate::model::ModelError;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid model `{id}`: {source}")]
    ModelError {
        id: String,
        #[source]
        source: ModelError,
    },
    #[error("Invalid chart domain: {0}")]
    DomainError(#[from] CurveError),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

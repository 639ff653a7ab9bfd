//! Model preset configuration

use super::ConfigError;
use crate::curve::{CurveDomain, DEFAULT_DOMAIN_MAX, DEFAULT_DOMAIN_MIN};
use crate::model::{CalibratedSigmoid, DebuffModel, ScaledSigmoid};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Named model presets plus chart settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelsConfig {
    /// Id of the preset used at startup
    #[serde(default = "default_active")]
    pub active: String,
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(rename = "models", default)]
    pub models: Vec<ModelPreset>,
}

fn default_active() -> String {
    "calibrated".to_string()
}

impl Default for ModelsConfig {
    fn default() -> Self {
        ModelsConfig {
            active: default_active(),
            chart: ChartConfig::default(),
            models: vec![
                ModelPreset {
                    id: "calibrated".to_string(),
                    name: "Calibrated 3-97% cap".to_string(),
                    curve: DebuffModel::Calibrated(CalibratedSigmoid::default()),
                },
                ModelPreset {
                    id: "scaled".to_string(),
                    name: "Scaled (uncapped)".to_string(),
                    curve: DebuffModel::Scaled(ScaledSigmoid::default()),
                },
            ],
        }
    }
}

/// A named model variant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelPreset {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub curve: DebuffModel,
}

impl ModelPreset {
    /// Display name, falling back to the id
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_domain_min")]
    pub domain_min: i64,
    #[serde(default = "default_domain_max")]
    pub domain_max: i64,
}

fn default_domain_min() -> i64 {
    DEFAULT_DOMAIN_MIN
}
fn default_domain_max() -> i64 {
    DEFAULT_DOMAIN_MAX
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            domain_min: DEFAULT_DOMAIN_MIN,
            domain_max: DEFAULT_DOMAIN_MAX,
        }
    }
}

impl ModelsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.models.is_empty() {
            return Err(ConfigError::ValidationError(
                "at least one model preset is required".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for preset in &self.models {
            if preset.id.is_empty() {
                return Err(ConfigError::ValidationError(
                    "model preset with empty id".to_string(),
                ));
            }
            if !seen.insert(preset.id.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate model id `{}`",
                    preset.id
                )));
            }
            preset.curve.validate().map_err(|source| ConfigError::ModelError {
                id: preset.id.clone(),
                source,
            })?;
        }

        if self.preset(&self.active).is_none() {
            return Err(ConfigError::ValidationError(format!(
                "active model `{}` is not defined",
                self.active
            )));
        }

        self.domain()?;
        Ok(())
    }

    pub fn preset(&self, id: &str) -> Option<&ModelPreset> {
        self.models.iter().find(|p| p.id == id)
    }

    /// Index of the active preset
    pub fn active_index(&self) -> usize {
        self.models
            .iter()
            .position(|p| p.id == self.active)
            .unwrap_or(0)
    }

    pub fn active_model(&self) -> DebuffModel {
        self.preset(&self.active)
            .or_else(|| self.models.first())
            .map(|p| p.curve)
            .unwrap_or_default()
    }

    pub fn domain(&self) -> Result<CurveDomain, ConfigError> {
        Ok(CurveDomain::new(self.chart.domain_min, self.chart.domain_max)?)
    }
}

/// Load and validate presets from a TOML file
pub fn load_models_config(path: &Path) -> Result<ModelsConfig, ConfigError> {
    let config: ModelsConfig = super::load_toml(path)?;
    config.validate()?;
    tracing::debug!(path = %path.display(), presets = config.models.len(), "loaded model presets");
    Ok(config)
}

/// Parse and validate presets from a TOML string
pub fn parse_models_config(content: &str) -> Result<ModelsConfig, ConfigError> {
    let config: ModelsConfig = super::parse_toml(content)?;
    config.validate()?;
    Ok(config)
}

/// Built-in presets
pub fn default_models() -> ModelsConfig {
    let toml = include_str!("../../config/models.toml");
    parse_models_config(toml).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "built-in model presets invalid, using reference constants");
        ModelsConfig::default()
    })
}

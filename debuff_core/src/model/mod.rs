//! Debuff chance model - probability curves over the stat difference
//!
//! Every model maps `d = accuracy - resistance` to a chance in percent.
//! Models are pure: parameters are fixed at construction and `evaluate`
//! never touches any state.

mod calibrated;
mod logistic;
mod scaled;

pub use calibrated::CalibratedSigmoid;
pub use logistic::{logistic, logit};
pub use scaled::ScaledSigmoid;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Invalid model parameters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("parameter `{name}` must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
    #[error("caps must satisfy 0 <= min_cap < max_cap <= 1, got {min_cap}..{max_cap}")]
    InvalidCaps { min_cap: f64, max_cap: f64 },
    #[error("steepness {0} does not produce an increasing curve")]
    InvalidSteepness(f64),
    #[error("scale must be positive, got {0}")]
    InvalidScale(f64),
    #[error("amplitude must be positive, got {0}")]
    InvalidAmplitude(f64),
}

pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<(), ModelError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ModelError::NonFinite { name, value })
    }
}

/// A probability curve over the stat difference
pub trait ChanceModel {
    /// Chance (in percent) that the debuff lands at stat difference `d`
    fn evaluate(&self, d: f64) -> f64;

    /// Stat difference at which the curve reaches `chance` percent
    ///
    /// `None` when `chance` is outside the open range of the curve.
    fn difference_for(&self, chance: f64) -> Option<f64>;

    /// Lower asymptote in percent
    fn floor(&self) -> f64;

    /// Upper asymptote in percent
    fn ceiling(&self) -> f64;
}

/// A configured model variant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DebuffModel {
    /// Capped sigmoid: floor/ceiling caps around a 50% midpoint
    Calibrated(CalibratedSigmoid),
    /// Amplitude-scaled sigmoid without caps
    Scaled(ScaledSigmoid),
}

impl DebuffModel {
    /// Check parameters, e.g. after deserialization
    pub fn validate(&self) -> Result<(), ModelError> {
        match self {
            DebuffModel::Calibrated(m) => m.validate(),
            DebuffModel::Scaled(m) => m.validate(),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            DebuffModel::Calibrated(_) => "calibrated",
            DebuffModel::Scaled(_) => "scaled",
        }
    }

    /// Human readable formula with the configured constants
    pub fn formula(&self) -> String {
        match self {
            DebuffModel::Calibrated(m) => format!(
                "{:.0}% + {:.0}% × σ({} × (d - ({})))",
                m.min_cap * 100.0,
                (m.max_cap - m.min_cap) * 100.0,
                m.steepness,
                m.midpoint
            ),
            DebuffModel::Scaled(m) => format!(
                "{:.2}% / (1 + e^({} × (d / {} - {})))",
                m.amplitude * 100.0,
                m.steepness,
                m.scale,
                m.offset
            ),
        }
    }
}

impl Default for DebuffModel {
    fn default() -> Self {
        DebuffModel::Calibrated(CalibratedSigmoid::default())
    }
}

impl ChanceModel for DebuffModel {
    fn evaluate(&self, d: f64) -> f64 {
        match self {
            DebuffModel::Calibrated(m) => m.evaluate(d),
            DebuffModel::Scaled(m) => m.evaluate(d),
        }
    }

    fn difference_for(&self, chance: f64) -> Option<f64> {
        match self {
            DebuffModel::Calibrated(m) => m.difference_for(chance),
            DebuffModel::Scaled(m) => m.difference_for(chance),
        }
    }

    fn floor(&self) -> f64 {
        match self {
            DebuffModel::Calibrated(m) => m.floor(),
            DebuffModel::Scaled(m) => m.floor(),
        }
    }

    fn ceiling(&self) -> f64 {
        match self {
            DebuffModel::Calibrated(m) => m.ceiling(),
            DebuffModel::Scaled(m) => m.ceiling(),
        }
    }
}

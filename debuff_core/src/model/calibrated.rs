//! Calibrated-cap sigmoid
//!
//! Formula: chance = (min_cap + (max_cap - min_cap) × σ(k × (d - d0))) × 100
//!
//! Reference calibration:
//! - 3% floor, 97% ceiling
//! - 50% at d = -42
//! - ~92% at d = 0 (k = 0.0686)

use super::logistic::{logistic, logit};
use super::{ensure_finite, ChanceModel, ModelError};
use serde::{Deserialize, Serialize};

/// Reference constants
pub mod constants {
    pub const MIN_CAP: f64 = 0.03;
    pub const MAX_CAP: f64 = 0.97;
    pub const MIDPOINT: f64 = -42.0;
    pub const STEEPNESS: f64 = 0.0686;
}

/// Sigmoid squeezed between a floor and a ceiling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibratedSigmoid {
    /// Lowest reachable chance (as decimal, 0.03 = 3%)
    #[serde(default = "default_min_cap")]
    pub min_cap: f64,
    /// Highest reachable chance (as decimal)
    #[serde(default = "default_max_cap")]
    pub max_cap: f64,
    /// Difference at which the curve is halfway between the caps
    #[serde(default = "default_midpoint")]
    pub midpoint: f64,
    /// Steepness, must be positive
    #[serde(default = "default_steepness")]
    pub steepness: f64,
}

fn default_min_cap() -> f64 {
    constants::MIN_CAP
}
fn default_max_cap() -> f64 {
    constants::MAX_CAP
}
fn default_midpoint() -> f64 {
    constants::MIDPOINT
}
fn default_steepness() -> f64 {
    constants::STEEPNESS
}

impl Default for CalibratedSigmoid {
    fn default() -> Self {
        CalibratedSigmoid {
            min_cap: constants::MIN_CAP,
            max_cap: constants::MAX_CAP,
            midpoint: constants::MIDPOINT,
            steepness: constants::STEEPNESS,
        }
    }
}

impl CalibratedSigmoid {
    pub fn new(min_cap: f64, max_cap: f64, midpoint: f64, steepness: f64) -> Result<Self, ModelError> {
        let model = CalibratedSigmoid {
            min_cap,
            max_cap,
            midpoint,
            steepness,
        };
        model.validate()?;
        Ok(model)
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        ensure_finite("min_cap", self.min_cap)?;
        ensure_finite("max_cap", self.max_cap)?;
        ensure_finite("midpoint", self.midpoint)?;
        ensure_finite("steepness", self.steepness)?;

        if !(0.0 <= self.min_cap && self.min_cap < self.max_cap && self.max_cap <= 1.0) {
            return Err(ModelError::InvalidCaps {
                min_cap: self.min_cap,
                max_cap: self.max_cap,
            });
        }
        if self.steepness <= 0.0 {
            return Err(ModelError::InvalidSteepness(self.steepness));
        }
        Ok(())
    }
}

impl ChanceModel for CalibratedSigmoid {
    fn evaluate(&self, d: f64) -> f64 {
        let raw = logistic(self.steepness * (d - self.midpoint));
        (self.min_cap + (self.max_cap - self.min_cap) * raw) * 100.0
    }

    fn difference_for(&self, chance: f64) -> Option<f64> {
        let raw = (chance / 100.0 - self.min_cap) / (self.max_cap - self.min_cap);
        logit(raw).map(|x| self.midpoint + x / self.steepness)
    }

    fn floor(&self) -> f64 {
        self.min_cap * 100.0
    }

    fn ceiling(&self) -> f64 {
        self.max_cap * 100.0
    }
}

//! Amplitude-scaled sigmoid (earlier tuning, no caps)
//!
//! Formula: chance = L × 100 / (1 + e^(k × (d / scale - x0)))
//!
//! With k < 0 the curve rises with d, from 0% towards L × 100%.
//! The midpoint (L × 50%) sits at d = x0 × scale.

use super::logistic::{logistic, logit};
use super::{ensure_finite, ChanceModel, ModelError};
use serde::{Deserialize, Serialize};

/// Reference constants
pub mod constants {
    pub const AMPLITUDE: f64 = 0.7222;
    pub const OFFSET: f64 = 1.033;
    pub const STEEPNESS: f64 = -24.55;
    pub const SCALE: f64 = 40.66;
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaledSigmoid {
    /// Upper asymptote (as decimal, 0.7222 = 72.22%)
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,
    /// Horizontal offset in scaled units
    #[serde(default = "default_offset")]
    pub offset: f64,
    /// Steepness, negative for a rising curve
    #[serde(default = "default_steepness")]
    pub steepness: f64,
    /// Divisor applied to d before the offset
    #[serde(default = "default_scale")]
    pub scale: f64,
}

fn default_amplitude() -> f64 {
    constants::AMPLITUDE
}
fn default_offset() -> f64 {
    constants::OFFSET
}
fn default_steepness() -> f64 {
    constants::STEEPNESS
}
fn default_scale() -> f64 {
    constants::SCALE
}

impl Default for ScaledSigmoid {
    fn default() -> Self {
        ScaledSigmoid {
            amplitude: constants::AMPLITUDE,
            offset: constants::OFFSET,
            steepness: constants::STEEPNESS,
            scale: constants::SCALE,
        }
    }
}

impl ScaledSigmoid {
    pub fn new(amplitude: f64, offset: f64, steepness: f64, scale: f64) -> Result<Self, ModelError> {
        let model = ScaledSigmoid {
            amplitude,
            offset,
            steepness,
            scale,
        };
        model.validate()?;
        Ok(model)
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        ensure_finite("amplitude", self.amplitude)?;
        ensure_finite("offset", self.offset)?;
        ensure_finite("steepness", self.steepness)?;
        ensure_finite("scale", self.scale)?;

        if self.amplitude <= 0.0 {
            return Err(ModelError::InvalidAmplitude(self.amplitude));
        }
        if self.steepness >= 0.0 {
            return Err(ModelError::InvalidSteepness(self.steepness));
        }
        if self.scale <= 0.0 {
            return Err(ModelError::InvalidScale(self.scale));
        }
        Ok(())
    }

    /// Difference at which the curve reaches half its amplitude
    pub fn midpoint(&self) -> f64 {
        self.offset * self.scale
    }
}

impl ChanceModel for ScaledSigmoid {
    fn evaluate(&self, d: f64) -> f64 {
        // 1 / (1 + e^(k·u)) == σ(-k·u)
        let raw = logistic(-self.steepness * (d / self.scale - self.offset));
        self.amplitude * raw * 100.0
    }

    fn difference_for(&self, chance: f64) -> Option<f64> {
        let raw = chance / (self.amplitude * 100.0);
        logit(raw).map(|x| self.scale * (self.offset - x / self.steepness))
    }

    fn floor(&self) -> f64 {
        0.0
    }

    fn ceiling(&self) -> f64 {
        self.amplitude * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn reference() -> ScaledSigmoid {
        ScaledSigmoid::default()
    }

    #[test]
    fn test_half_amplitude_at_midpoint() {
        let model = reference();
        let chance = model.evaluate(model.midpoint());
        assert!((chance - 36.11).abs() < 1e-9, "got {chance}");
    }

    #[test]
    fn test_regression_values() {
        let model = reference();
        assert!((model.evaluate(42.0) - 36.090595539374014).abs() < 1e-9);
        assert!((model.evaluate(100.0) - 72.22).abs() < 1e-6);
        assert!(model.evaluate(0.0) < 1e-6);
    }

    #[test]
    fn test_asymptotes() {
        let model = reference();
        assert!((model.evaluate(10_000.0) - 72.22).abs() < 1e-9);
        assert!(model.evaluate(-10_000.0).abs() < 1e-9);
        assert!((model.ceiling() - 72.22).abs() < 1e-9);
        assert_eq!(model.floor(), 0.0);
    }

    #[test]
    fn test_extreme_inputs_saturate() {
        let model = reference();
        for d in [f64::MAX, f64::MIN, f64::INFINITY, f64::NEG_INFINITY] {
            let chance = model.evaluate(d);
            assert!(!chance.is_nan(), "NaN at {d}");
            assert!(chance >= 0.0 && chance <= model.ceiling());
        }
    }

    #[test]
    fn test_difference_for_inverts_evaluate() {
        let model = reference();
        for d in [20.0, 35.0, 42.0, 50.0, 60.0] {
            let chance = model.evaluate(d);
            let back = model.difference_for(chance).unwrap();
            assert!((back - d).abs() < 1e-6, "d={d} back={back}");
        }
        assert!(model.difference_for(0.0).is_none());
        assert!(model.difference_for(72.22).is_none());
        assert!(model.difference_for(90.0).is_none());
    }

    #[test]
    fn test_validation() {
        assert!(ScaledSigmoid::new(0.7222, 1.033, -24.55, 40.66).is_ok());
        assert!(matches!(
            ScaledSigmoid::new(0.7222, 1.033, 24.55, 40.66),
            Err(ModelError::InvalidSteepness(_))
        ));
        assert!(matches!(
            ScaledSigmoid::new(0.0, 1.033, -24.55, 40.66),
            Err(ModelError::InvalidAmplitude(_))
        ));
        assert!(matches!(
            ScaledSigmoid::new(0.7222, 1.033, -24.55, 0.0),
            Err(ModelError::InvalidScale(_))
        ));
    }

    proptest! {
        #[test]
        fn increasing_near_midpoint(a in 0i32..=90, b in 0i32..=90) {
            prop_assume!(a != b);
            let (lo, hi) = if a < b { (a, b) } else { (b, a) };
            let model = reference();
            prop_assert!(model.evaluate(lo as f64) < model.evaluate(hi as f64));
        }

        #[test]
        fn within_asymptotes(d in -1e300f64..1e300f64) {
            let model = reference();
            let chance = model.evaluate(d);
            prop_assert!(chance >= 0.0 && chance <= model.ceiling());
        }
    }
}

//! debuff_core - Debuff application chance model
//!
//! This library provides:
//! - ChanceModel: probability curves over `accuracy - resistance`
//! - Curve sampling over a fixed difference domain for charting
//! - Key points and reference markers derived from a model
//! - Calculator: input state, coercion policy and display formatting
//! - Model presets loaded from TOML

pub mod calculator;
pub mod config;
pub mod curve;
pub mod markers;
pub mod model;
pub mod prelude;
pub mod roll;

// Re-export core types for convenience
pub use calculator::{calculate, format_chance, parse_stat, Calculation, Calculator, InputError, StatField, StatInputs};
pub use config::{default_models, ConfigError, ModelPreset, ModelsConfig};
pub use curve::{sample_curve, CurveDomain, CurveError, CurvePoint, SampledCurve, MAX_DOMAIN_POINTS};
pub use markers::{KeyPoints, ReferenceMarkers, EVEN_DIFFERENCE, LOW_CHANCE_PERCENT};
pub use model::{CalibratedSigmoid, ChanceModel, DebuffModel, ModelError, ScaledSigmoid};
pub use roll::{roll_debuff, roll_many, RollSummary};

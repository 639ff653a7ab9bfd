//! Prelude module for convenient imports
//!
//! ```rust
//! use debuff_core::prelude::*;
//! ```

// Model
pub use crate::model::{CalibratedSigmoid, ChanceModel, DebuffModel, ScaledSigmoid};

// Sampling and markers
pub use crate::curve::{sample_curve, CurveDomain, SampledCurve};
pub use crate::markers::{KeyPoints, ReferenceMarkers};

// Calculator
pub use crate::calculator::{format_chance, Calculation, Calculator, StatField, StatInputs};

// Config
pub use crate::config::{default_models, ModelsConfig};

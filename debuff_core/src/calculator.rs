//! Calculator state - current inputs driving the model
//!
//! The model stays stateless; this holder owns the two stat inputs and
//! recomputes everything from them on demand.
//!
//! Input policy: an edit must be a whole number that fits in an `i32`.
//! Blank, non-numeric, fractional or out-of-range text is rejected, the
//! previous valid value is kept, and the error is recorded against the
//! field so the front-end can show it.

use crate::curve::{sample_curve, CurveDomain, SampledCurve};
use crate::markers::{KeyPoints, ReferenceMarkers};
use crate::model::{ChanceModel, DebuffModel};
use std::fmt;
use std::num::IntErrorKind;
use thiserror::Error;

/// Default value of both stat fields
pub const DEFAULT_STAT: i32 = 100;

/// Rejected stat edit
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("value is empty")]
    Empty,
    #[error("`{0}` is not a whole number")]
    NotANumber(String),
    #[error("`{0}` is out of range")]
    OutOfRange(String),
}

/// Parse a stat field, applying the input policy
pub fn parse_stat(text: &str) -> Result<i32, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    trimmed.parse::<i32>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            InputError::OutOfRange(trimmed.to_string())
        }
        _ => InputError::NotANumber(trimmed.to_string()),
    })
}

/// Chance formatted for display: two decimals and a percent sign
pub fn format_chance(chance: f64) -> String {
    format!("{:.2}%", chance)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatField {
    Accuracy,
    Resistance,
}

impl StatField {
    pub fn all() -> &'static [StatField] {
        &[StatField::Accuracy, StatField::Resistance]
    }

    pub fn name(&self) -> &'static str {
        match self {
            StatField::Accuracy => "Accuracy",
            StatField::Resistance => "Resistance",
        }
    }

    pub fn other(&self) -> StatField {
        match self {
            StatField::Accuracy => StatField::Resistance,
            StatField::Resistance => StatField::Accuracy,
        }
    }
}

impl fmt::Display for StatField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Attacker accuracy and defender resistance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatInputs {
    pub accuracy: i32,
    pub resistance: i32,
}

impl Default for StatInputs {
    fn default() -> Self {
        StatInputs {
            accuracy: DEFAULT_STAT,
            resistance: DEFAULT_STAT,
        }
    }
}

impl StatInputs {
    pub fn new(accuracy: i32, resistance: i32) -> Self {
        StatInputs {
            accuracy,
            resistance,
        }
    }

    /// `accuracy - resistance`, widened so it cannot overflow
    pub fn difference(&self) -> i64 {
        i64::from(self.accuracy) - i64::from(self.resistance)
    }

    pub fn get(&self, field: StatField) -> i32 {
        match field {
            StatField::Accuracy => self.accuracy,
            StatField::Resistance => self.resistance,
        }
    }

    pub fn set(&mut self, field: StatField, value: i32) {
        match field {
            StatField::Accuracy => self.accuracy = value,
            StatField::Resistance => self.resistance = value,
        }
    }
}

/// Result for the current inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation {
    pub difference: i64,
    /// Chance in percent
    pub chance: f64,
}

impl Calculation {
    pub fn display_chance(&self) -> String {
        format_chance(self.chance)
    }
}

/// Evaluate a model for a pair of inputs
pub fn calculate<M: ChanceModel + ?Sized>(model: &M, inputs: StatInputs) -> Calculation {
    let difference = inputs.difference();
    Calculation {
        difference,
        chance: model.evaluate(difference as f64),
    }
}

/// Mutable calculator state
#[derive(Debug, Clone)]
pub struct Calculator {
    model: DebuffModel,
    domain: CurveDomain,
    inputs: StatInputs,
    accuracy_error: Option<InputError>,
    resistance_error: Option<InputError>,
}

impl Default for Calculator {
    fn default() -> Self {
        Calculator::new(DebuffModel::default(), CurveDomain::default())
    }
}

impl Calculator {
    pub fn new(model: DebuffModel, domain: CurveDomain) -> Self {
        Calculator {
            model,
            domain,
            inputs: StatInputs::default(),
            accuracy_error: None,
            resistance_error: None,
        }
    }

    pub fn model(&self) -> &DebuffModel {
        &self.model
    }

    /// Swap the model; inputs are kept
    pub fn set_model(&mut self, model: DebuffModel) {
        self.model = model;
    }

    pub fn domain(&self) -> CurveDomain {
        self.domain
    }

    pub fn inputs(&self) -> StatInputs {
        self.inputs
    }

    /// The last rejected edit of `field`, if it has not been fixed since
    pub fn error(&self, field: StatField) -> Option<&InputError> {
        match field {
            StatField::Accuracy => self.accuracy_error.as_ref(),
            StatField::Resistance => self.resistance_error.as_ref(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.accuracy_error.is_some() || self.resistance_error.is_some()
    }

    fn error_slot(&mut self, field: StatField) -> &mut Option<InputError> {
        match field {
            StatField::Accuracy => &mut self.accuracy_error,
            StatField::Resistance => &mut self.resistance_error,
        }
    }

    /// Apply a text edit to `field`
    ///
    /// On rejection the previous value stays in effect.
    pub fn set(&mut self, field: StatField, text: &str) -> Result<Calculation, InputError> {
        match parse_stat(text) {
            Ok(value) => Ok(self.set_value(field, value)),
            Err(e) => {
                tracing::debug!(%field, text, error = %e, "rejected stat edit");
                *self.error_slot(field) = Some(e.clone());
                Err(e)
            }
        }
    }

    pub fn set_value(&mut self, field: StatField, value: i32) -> Calculation {
        self.inputs.set(field, value);
        *self.error_slot(field) = None;
        self.calculation()
    }

    /// Nudge `field` by `delta`, saturating at the `i32` range
    pub fn adjust(&mut self, field: StatField, delta: i32) -> Calculation {
        let value = self.inputs.get(field).saturating_add(delta);
        self.set_value(field, value)
    }

    /// Back to 100 / 100 with no errors
    pub fn reset(&mut self) {
        self.inputs = StatInputs::default();
        self.accuracy_error = None;
        self.resistance_error = None;
    }

    pub fn calculation(&self) -> Calculation {
        calculate(&self.model, self.inputs)
    }

    pub fn curve(&self) -> SampledCurve {
        sample_curve(&self.model, self.domain.points())
    }

    pub fn key_points(&self) -> KeyPoints {
        KeyPoints::for_model(&self.model)
    }

    pub fn markers(&self) -> ReferenceMarkers {
        ReferenceMarkers::for_model(&self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ScaledSigmoid;

    #[test]
    fn test_parse_stat_accepts_integers() {
        assert_eq!(parse_stat("100"), Ok(100));
        assert_eq!(parse_stat("  -37 "), Ok(-37));
        assert_eq!(parse_stat("+5"), Ok(5));
        assert_eq!(parse_stat("0"), Ok(0));
    }

    #[test]
    fn test_parse_stat_rejects() {
        assert_eq!(parse_stat(""), Err(InputError::Empty));
        assert_eq!(parse_stat("   "), Err(InputError::Empty));
        assert_eq!(parse_stat("-"), Err(InputError::NotANumber("-".to_string())));
        assert_eq!(parse_stat("abc"), Err(InputError::NotANumber("abc".to_string())));
        assert_eq!(parse_stat("12.5"), Err(InputError::NotANumber("12.5".to_string())));
        assert_eq!(
            parse_stat("99999999999"),
            Err(InputError::OutOfRange("99999999999".to_string()))
        );
        assert_eq!(
            parse_stat("-99999999999"),
            Err(InputError::OutOfRange("-99999999999".to_string()))
        );
    }

    #[test]
    fn test_format_chance() {
        assert_eq!(format_chance(50.0), "50.00%");
        assert_eq!(format_chance(92.0094669188373), "92.01%");
        assert_eq!(format_chance(4.726264025187664), "4.73%");
    }

    #[test]
    fn test_defaults() {
        let calc = Calculator::default();
        assert_eq!(calc.inputs(), StatInputs::new(100, 100));
        assert_eq!(calc.calculation().difference, 0);
        assert_eq!(calc.calculation().display_chance(), "92.01%");
        assert!(!calc.has_errors());
    }

    #[test]
    fn test_difference_does_not_overflow() {
        let inputs = StatInputs::new(i32::MAX, i32::MIN);
        assert_eq!(inputs.difference(), i64::from(i32::MAX) - i64::from(i32::MIN));
    }

    #[test]
    fn test_edit_updates_result() {
        let mut calc = Calculator::default();
        let result = calc.set(StatField::Accuracy, "58").unwrap();
        assert_eq!(result.difference, -42);
        assert_eq!(result.display_chance(), "50.00%");
    }

    #[test]
    fn test_rejected_edit_keeps_previous_value() {
        let mut calc = Calculator::default();
        calc.set(StatField::Resistance, "120").unwrap();

        let err = calc.set(StatField::Resistance, "12x").unwrap_err();
        assert_eq!(err, InputError::NotANumber("12x".to_string()));
        assert_eq!(calc.inputs().resistance, 120);
        assert_eq!(calc.error(StatField::Resistance), Some(&err));
        assert!(calc.error(StatField::Accuracy).is_none());
        assert_eq!(calc.calculation().difference, -20);

        // A valid edit clears the error
        calc.set(StatField::Resistance, "110").unwrap();
        assert!(calc.error(StatField::Resistance).is_none());
        assert_eq!(calc.calculation().difference, -10);
    }

    #[test]
    fn test_adjust_saturates() {
        let mut calc = Calculator::default();
        assert_eq!(calc.adjust(StatField::Accuracy, 10).difference, 10);
        assert_eq!(calc.adjust(StatField::Resistance, -25).difference, 35);

        calc.set_value(StatField::Accuracy, i32::MAX);
        calc.adjust(StatField::Accuracy, 1);
        assert_eq!(calc.inputs().accuracy, i32::MAX);
    }

    #[test]
    fn test_reset() {
        let mut calc = Calculator::default();
        calc.set(StatField::Accuracy, "3").unwrap();
        let _ = calc.set(StatField::Resistance, "");
        calc.reset();
        assert_eq!(calc.inputs(), StatInputs::default());
        assert!(!calc.has_errors());
    }

    #[test]
    fn test_swap_model_keeps_inputs() {
        let mut calc = Calculator::default();
        calc.set(StatField::Accuracy, "142").unwrap();
        calc.set_model(DebuffModel::Scaled(ScaledSigmoid::default()));
        let result = calc.calculation();
        assert_eq!(result.difference, 42);
        assert!((result.chance - 36.090595539374014).abs() < 1e-9);
    }

    #[test]
    fn test_curve_follows_model() {
        let calc = Calculator::default();
        let curve = calc.curve();
        assert_eq!(curve.len(), 201);
        let current = curve.point_at(calc.calculation().difference).unwrap();
        assert_eq!(current.chance, calc.calculation().chance);
    }

    #[test]
    fn test_field_helpers() {
        assert_eq!(StatField::Accuracy.other(), StatField::Resistance);
        assert_eq!(StatField::all().len(), 2);
        assert_eq!(StatField::Resistance.to_string(), "Resistance");
    }
}

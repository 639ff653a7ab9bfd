//! Key points and chart reference markers derived from a model
//!
//! The 50% threshold and the end of the low-chance band move with the
//! model parameters, so they are solved from the curve rather than fixed.

use crate::model::ChanceModel;

/// Chance at or below which a debuff is considered a long shot (percent)
pub const LOW_CHANCE_PERCENT: f64 = 5.0;

/// Difference of evenly matched stats, marked on every chart
pub const EVEN_DIFFERENCE: f64 = 0.0;

/// Summary numbers of a curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyPoints {
    /// Difference at which the chance is 50%
    pub fifty_fifty: Option<f64>,
    /// Chance at zero difference
    pub at_zero: f64,
    pub floor: f64,
    pub ceiling: f64,
}

impl KeyPoints {
    pub fn for_model<M: ChanceModel + ?Sized>(model: &M) -> Self {
        KeyPoints {
            fifty_fifty: model.difference_for(50.0),
            at_zero: model.evaluate(EVEN_DIFFERENCE),
            floor: model.floor(),
            ceiling: model.ceiling(),
        }
    }
}

/// Annotations overlaid on the chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceMarkers {
    /// Vertical marker at the 50% difference
    pub threshold: Option<f64>,
    /// Upper edge of the low-chance band (percent)
    pub low_chance_ceiling: f64,
    /// Difference where the curve leaves the low-chance band
    ///
    /// `None` if the curve never crosses the band edge (e.g. its floor
    /// already sits above it).
    pub low_chance_limit: Option<f64>,
}

impl ReferenceMarkers {
    pub fn for_model<M: ChanceModel + ?Sized>(model: &M) -> Self {
        ReferenceMarkers {
            threshold: model.difference_for(50.0),
            low_chance_ceiling: LOW_CHANCE_PERCENT,
            low_chance_limit: model.difference_for(LOW_CHANCE_PERCENT),
        }
    }

    /// Whether `chance` falls in the low-chance band
    pub fn is_low_chance(&self, chance: f64) -> bool {
        chance <= self.low_chance_ceiling
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CalibratedSigmoid, ScaledSigmoid};

    #[test]
    fn test_key_points_reference() {
        let points = KeyPoints::for_model(&CalibratedSigmoid::default());
        assert!((points.fifty_fifty.unwrap() - -42.0).abs() < 1e-9);
        assert!((points.at_zero - 92.0).abs() < 0.05);
        assert!((points.floor - 3.0).abs() < 1e-12);
        assert!((points.ceiling - 97.0).abs() < 1e-12);
    }

    #[test]
    fn test_markers_reference() {
        let model = CalibratedSigmoid::default();
        let markers = ReferenceMarkers::for_model(&model);
        assert!((markers.threshold.unwrap() - -42.0).abs() < 1e-9);

        let limit = markers.low_chance_limit.unwrap();
        assert!((model.evaluate(limit) - LOW_CHANCE_PERCENT).abs() < 1e-9);
        // -100 is 4.73%, inside the band; the band ends shortly after
        assert!(limit > -100.0 && limit < -90.0, "limit {limit}");
    }

    #[test]
    fn test_fifty_unreachable() {
        // A 10-40% curve never reaches 50%
        let model = CalibratedSigmoid::new(0.10, 0.40, 0.0, 0.1).unwrap();
        let markers = ReferenceMarkers::for_model(&model);
        assert!(markers.threshold.is_none());
        // Floor above the band edge
        assert!(markers.low_chance_limit.is_none());
    }

    #[test]
    fn test_scaled_markers() {
        let model = ScaledSigmoid::default();
        let markers = ReferenceMarkers::for_model(&model);
        let threshold = markers.threshold.unwrap();
        assert!((model.evaluate(threshold) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_even_difference_matches_at_zero() {
        let model = ScaledSigmoid::default();
        let points = KeyPoints::for_model(&model);
        assert_eq!(points.at_zero, model.evaluate(EVEN_DIFFERENCE));
    }

    #[test]
    fn test_low_chance_band() {
        let markers = ReferenceMarkers::for_model(&CalibratedSigmoid::default());
        assert!(markers.is_low_chance(4.73));
        assert!(markers.is_low_chance(5.0));
        assert!(!markers.is_low_chance(5.01));
    }
}

//! Curve sampling for charts
//!
//! A sampled curve is purely derivative: it is recomputed from the model
//! whenever the chart is drawn and carries no state of its own.

use crate::model::ChanceModel;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default chart domain: differences -100..=100 (201 points)
pub const DEFAULT_DOMAIN_MIN: i64 = -100;
pub const DEFAULT_DOMAIN_MAX: i64 = 100;

/// Largest number of points a domain may span
pub const MAX_DOMAIN_POINTS: usize = 10_001;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    #[error("empty domain: min {min} is greater than max {max}")]
    EmptyDomain { min: i64, max: i64 },
    #[error("domain {min}..={max} spans more than {} points", MAX_DOMAIN_POINTS)]
    DomainTooLarge { min: i64, max: i64 },
}

/// Inclusive integer domain of stat differences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveDomain {
    min: i64,
    max: i64,
}

impl CurveDomain {
    pub fn new(min: i64, max: i64) -> Result<Self, CurveError> {
        if min > max {
            return Err(CurveError::EmptyDomain { min, max });
        }
        if max.abs_diff(min) >= MAX_DOMAIN_POINTS as u64 {
            return Err(CurveError::DomainTooLarge { min, max });
        }
        Ok(CurveDomain { min, max })
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    /// Number of sample points, at most `MAX_DOMAIN_POINTS`
    pub fn len(&self) -> usize {
        (self.max - self.min) as usize + 1
    }

    /// A domain always holds at least one point
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, difference: i64) -> bool {
        (self.min..=self.max).contains(&difference)
    }

    /// Differences in ascending order
    pub fn points(&self) -> impl Iterator<Item = i64> {
        self.min..=self.max
    }
}

impl Default for CurveDomain {
    fn default() -> Self {
        CurveDomain {
            min: DEFAULT_DOMAIN_MIN,
            max: DEFAULT_DOMAIN_MAX,
        }
    }
}

/// One sample of the curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub difference: i64,
    /// Chance in percent
    pub chance: f64,
}

/// Ordered samples of a model over a domain
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SampledCurve {
    pub points: Vec<CurvePoint>,
}

impl SampledCurve {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&CurvePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&CurvePoint> {
        self.points.last()
    }

    /// The sample at `difference`, if it was part of the domain
    pub fn point_at(&self, difference: i64) -> Option<&CurvePoint> {
        let first = self.points.first()?;
        let offset = difference.checked_sub(first.difference)?;
        let index = usize::try_from(offset).ok()?;
        self.points.get(index).filter(|p| p.difference == difference)
    }

    /// `(difference, chance)` pairs for plotting
    pub fn as_xy(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|p| (p.difference as f64, p.chance))
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Evaluate `model` at every difference of `domain`, in order
pub fn sample_curve<M, I>(model: &M, domain: I) -> SampledCurve
where
    M: ChanceModel + ?Sized,
    I: IntoIterator<Item = i64>,
{
    let points = domain
        .into_iter()
        .map(|difference| CurvePoint {
            difference,
            chance: model.evaluate(difference as f64),
        })
        .collect();
    SampledCurve { points }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CalibratedSigmoid, DebuffModel, ScaledSigmoid};

    #[test]
    fn test_default_domain_has_201_points() {
        let domain = CurveDomain::default();
        assert_eq!(domain.len(), 201);
        assert_eq!(domain.points().count(), 201);
        assert!(domain.contains(-100));
        assert!(domain.contains(100));
        assert!(!domain.contains(101));
    }

    #[test]
    fn test_sample_default_domain() {
        let model = CalibratedSigmoid::default();
        let curve = sample_curve(&model, CurveDomain::default().points());

        assert_eq!(curve.len(), 201);
        assert_eq!(curve.first().unwrap().difference, -100);
        assert_eq!(curve.last().unwrap().difference, 100);

        for pair in curve.points.windows(2) {
            assert!(pair[0].difference < pair[1].difference);
        }
        for point in &curve.points {
            assert_eq!(point.chance, model.evaluate(point.difference as f64));
        }
    }

    #[test]
    fn test_sample_keeps_domain_order() {
        let model = DebuffModel::Scaled(ScaledSigmoid::default());
        let domain = vec![40, -3, 17];
        let curve = sample_curve(&model, domain.clone());
        let differences: Vec<i64> = curve.points.iter().map(|p| p.difference).collect();
        assert_eq!(differences, domain);
    }

    #[test]
    fn test_sample_works_through_trait_object() {
        let model: Box<dyn ChanceModel> = Box::new(CalibratedSigmoid::default());
        let curve = sample_curve(model.as_ref(), -1..=1);
        assert_eq!(curve.len(), 3);
    }

    #[test]
    fn test_point_at() {
        let curve = sample_curve(&CalibratedSigmoid::default(), CurveDomain::default().points());
        let point = curve.point_at(-42).unwrap();
        assert_eq!(point.difference, -42);
        assert!((point.chance - 50.0).abs() < 1e-6);
        assert!(curve.point_at(-101).is_none());
        assert!(curve.point_at(250).is_none());
        assert!(SampledCurve::default().point_at(0).is_none());
    }

    #[test]
    fn test_empty_domain_rejected() {
        assert_eq!(
            CurveDomain::new(5, -5),
            Err(CurveError::EmptyDomain { min: 5, max: -5 })
        );
        assert_eq!(CurveDomain::new(3, 3).unwrap().len(), 1);
    }

    #[test]
    fn test_oversized_domain_rejected() {
        let widest = CurveDomain::new(-5_000, 5_000).unwrap();
        assert_eq!(widest.len(), MAX_DOMAIN_POINTS);

        assert_eq!(
            CurveDomain::new(-5_000, 5_001),
            Err(CurveError::DomainTooLarge { min: -5_000, max: 5_001 })
        );
        assert!(matches!(
            CurveDomain::new(i64::MIN, i64::MAX),
            Err(CurveError::DomainTooLarge { .. })
        ));
    }

    #[test]
    fn test_json_export() {
        let curve = sample_curve(&CalibratedSigmoid::default(), [-42, 0]);
        let json = curve.to_json().unwrap();
        let parsed: SampledCurve = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed.points[0].difference, -42);
    }
}

//! Logistic function and its inverse
//!
//! `logistic(x) = 1 / (1 + e^(-x))`
//!
//! The naive form overflows `exp` for large negative `x` (e^745 is already
//! infinite). Branching on the sign keeps the exponent argument non-positive,
//! so the result saturates to 0 or 1 instead of producing NaN.

/// Numerically stable logistic
pub fn logistic(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Inverse of [`logistic`]: `ln(p / (1 - p))`
///
/// Returns `None` unless `p` lies strictly inside (0, 1).
pub fn logit(p: f64) -> Option<f64> {
    if p > 0.0 && p < 1.0 {
        Some((p / (1.0 - p)).ln())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logistic_at_zero() {
        assert!((logistic(0.0) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_logistic_symmetry() {
        for x in [0.25, 1.0, 3.5, 12.0] {
            assert!((logistic(-x) - (1.0 - logistic(x))).abs() < 1e-12);
        }
    }

    #[test]
    fn test_logistic_saturates_without_nan() {
        assert_eq!(logistic(1e308), 1.0);
        assert_eq!(logistic(-1e308), 0.0);
        assert_eq!(logistic(f64::INFINITY), 1.0);
        assert_eq!(logistic(f64::NEG_INFINITY), 0.0);
        // exp(800) would overflow in the naive form
        assert!(!logistic(-800.0).is_nan());
    }

    #[test]
    fn test_logit_inverts_logistic() {
        for x in [-6.0, -1.5, 0.0, 0.7, 4.2] {
            let p = logistic(x);
            let back = logit(p).unwrap();
            assert!((back - x).abs() < 1e-9, "logit(logistic({x})) = {back}");
        }
    }

    #[test]
    fn test_logit_rejects_bounds() {
        assert!(logit(0.0).is_none());
        assert!(logit(1.0).is_none());
        assert!(logit(-0.2).is_none());
        assert!(logit(f64::NAN).is_none());
    }
}

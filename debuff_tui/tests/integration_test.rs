//! Integration test: Load presets -> Edit inputs -> Read chance -> Sample chart
//!
//! Walks the same path the calculator tab takes on every edit.

use debuff_core::{
    default_models, sample_curve, Calculator, ChanceModel, CurveDomain, DebuffModel,
    InputError, KeyPoints, ReferenceMarkers, StatField,
};

fn calculator() -> Calculator {
    let config = default_models();
    Calculator::new(config.active_model(), config.domain().unwrap())
}

#[test]
fn test_equal_stats_show_92_percent() {
    let calc = calculator();
    let result = calc.calculation();

    assert_eq!(result.difference, 0);
    assert_eq!(result.display_chance(), "92.01%");
}

#[test]
fn test_58_vs_100_is_coin_flip() {
    let mut calc = calculator();
    calc.set(StatField::Accuracy, "58").unwrap();
    calc.set(StatField::Resistance, "100").unwrap();

    let result = calc.calculation();
    assert_eq!(result.difference, -42);
    assert_eq!(result.display_chance(), "50.00%");
}

#[test]
fn test_zero_accuracy_stays_above_floor() {
    let mut calc = calculator();
    calc.set(StatField::Accuracy, "0").unwrap();

    let result = calc.calculation();
    assert_eq!(result.difference, -100);
    assert!(result.chance > 3.0);
    assert_eq!(result.display_chance(), "4.73%");

    let markers = calc.markers();
    assert!(markers.is_low_chance(result.chance));
}

#[test]
fn test_chart_series_matches_display() {
    let mut calc = calculator();
    calc.set(StatField::Accuracy, "75").unwrap();
    calc.set(StatField::Resistance, "90").unwrap();

    let result = calc.calculation();
    let curve = calc.curve();

    assert_eq!(curve.len(), 201);
    assert_eq!(curve.first().unwrap().difference, -100);
    assert_eq!(curve.last().unwrap().difference, 100);

    // Highlighted marker sits on the curve
    let marker = curve.point_at(result.difference).unwrap();
    assert_eq!(marker.chance, result.chance);

    for pair in curve.points.windows(2) {
        assert!(pair[0].difference < pair[1].difference);
        assert!(pair[0].chance < pair[1].chance);
    }
}

#[test]
fn test_input_off_chart_has_no_marker() {
    let mut calc = calculator();
    calc.set(StatField::Accuracy, "500").unwrap();

    let result = calc.calculation();
    assert_eq!(result.difference, 400);
    assert!(calc.curve().point_at(result.difference).is_none());
    assert!(result.chance < 97.0);
}

#[test]
fn test_garbage_input_never_reaches_display() {
    let mut calc = calculator();
    calc.set(StatField::Accuracy, "80").unwrap();

    for text in ["", "  ", "abc", "1e3", "12.5", "--4", "3000000000"] {
        assert!(calc.set(StatField::Accuracy, text).is_err(), "accepted {text:?}");
        let result = calc.calculation();
        assert!(!result.chance.is_nan());
        assert_eq!(result.difference, -20);
    }

    assert_eq!(
        calc.error(StatField::Accuracy),
        Some(&InputError::OutOfRange("3000000000".to_string()))
    );
}

#[test]
fn test_reference_markers_for_every_preset() {
    let config = default_models();

    for preset in &config.models {
        let model = preset.curve;
        let markers = ReferenceMarkers::for_model(&model);
        let points = KeyPoints::for_model(&model);

        let threshold = markers.threshold.expect("both presets reach 50%");
        assert!((model.evaluate(threshold) - 50.0).abs() < 1e-9, "{}", preset.id);
        assert_eq!(points.fifty_fifty, markers.threshold);
        assert!(points.floor < points.at_zero || points.at_zero < 1e-6);
        assert!(points.ceiling <= 100.0);
    }
}

#[test]
fn test_switching_presets_recomputes() {
    let config = default_models();
    let mut calc = calculator();
    calc.set(StatField::Accuracy, "142").unwrap();
    let calibrated = calc.calculation();

    let scaled = config.preset("scaled").unwrap().curve;
    calc.set_model(scaled);
    let rescaled = calc.calculation();

    assert_eq!(calibrated.difference, rescaled.difference);
    assert_ne!(calibrated.chance, rescaled.chance);
    assert!(matches!(calc.model(), DebuffModel::Scaled(_)));
    assert!(calc.curve().points.iter().all(|p| p.chance <= scaled.ceiling()));
}

#[test]
fn test_custom_domain() {
    let model = DebuffModel::default();
    let domain = CurveDomain::new(-10, 10).unwrap();
    let curve = sample_curve(&model, domain.points());
    assert_eq!(curve.len(), 21);
    assert_eq!(curve.len(), domain.len());
}

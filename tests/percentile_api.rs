//! End-to-end tests for the `percentile` entry point

use approx::assert_relative_eq;
use percentile_stats::{
    percentile, percentile_with_config, Error, MethodSelection, PercentileConfig,
    ProbabilityPolicy, QuantileMethod,
};
use std::sync::Once;

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

const SAMPLE: [f64; 12] = [
    95.1772, 95.1567, 95.1937, 95.1959, 95.1442, 95.061, 95.1591, 95.1195, 95.1065, 95.0925,
    95.199, 95.1682,
];

#[test]
fn test_worked_example() {
    init_tracing();
    assert_relative_eq!(percentile(&SAMPLE, 0.5, None).unwrap(), 95.1579, epsilon = 1e-4);
    assert_relative_eq!(percentile(&SAMPLE, 0.5, Some(7)).unwrap(), 95.1579, epsilon = 1e-4);
}

#[test]
fn test_low_selectors_default_to_type7() {
    init_tracing();
    let expected = percentile(&SAMPLE, 0.3, Some(7)).unwrap();
    for selector in [-1, 0, 1, 5] {
        assert_eq!(percentile(&SAMPLE, 0.3, Some(selector)).unwrap(), expected);
    }
}

#[test]
fn test_methods_differ_off_center() {
    init_tracing();
    let q6 = percentile(&SAMPLE, 0.3, Some(6)).unwrap();
    let q7 = percentile(&SAMPLE, 0.3, Some(7)).unwrap();
    let q8 = percentile(&SAMPLE, 0.3, Some(8)).unwrap();
    // sorted: 95.061, 95.0925, 95.1065, 95.1195, ...
    // type 6: h = 0.3 * 13 = 3.9
    assert_relative_eq!(q6, 95.1065 + 0.9 * (95.1195 - 95.1065), epsilon = 1e-9);
    // type 7: h = 1 + 0.3 * 11 = 4.3
    assert_relative_eq!(q7, 95.1195 + 0.3 * (95.1442 - 95.1195), epsilon = 1e-9);
    // type 8: h = 0.3 * (12 + 2/3) = 3.8
    assert_relative_eq!(q8, 95.1065 + 0.8 * (95.1195 - 95.1065), epsilon = 1e-9);
}

#[test]
fn test_unsupported_method_is_rejected() {
    init_tracing();
    let err = percentile(&SAMPLE, 0.5, Some(9)).unwrap_err();
    assert!(matches!(err, Error::UnsupportedMethod { method: 9 }));
}

#[test]
fn test_legacy_selection_falls_through_to_type8() {
    init_tracing();
    let config = PercentileConfig {
        selection: MethodSelection::Legacy,
        ..Default::default()
    };
    let legacy = percentile_with_config(&SAMPLE, 0.3, Some(9), &config).unwrap();
    let type8 = percentile(&SAMPLE, 0.3, Some(8)).unwrap();
    assert_eq!(legacy, type8);
}

#[test]
fn test_empty_sample_is_invalid_input() {
    init_tracing();
    let empty: [f64; 0] = [];
    for method in [None, Some(6), Some(7), Some(8)] {
        assert!(percentile(&empty, 0.5, method).unwrap_err().is_invalid_input());
    }
}

#[test]
fn test_probability_outside_unit_interval() {
    init_tracing();
    assert!(matches!(
        percentile(&SAMPLE, 1.2, None),
        Err(Error::InvalidProbability { .. })
    ));

    let unchecked = PercentileConfig {
        probability: ProbabilityPolicy::Unchecked,
        ..Default::default()
    };
    assert!(matches!(
        percentile_with_config(&SAMPLE, -2.0, None, &unchecked),
        Err(Error::NoResult { .. })
    ));
    assert_eq!(
        percentile_with_config(&SAMPLE, 1.2, None, &unchecked).unwrap(),
        95.199
    );
}

#[test]
fn test_config_from_json() -> anyhow::Result<()> {
    init_tracing();
    let config = PercentileConfig::from_json(
        r#"{ "method": "type6", "probability": "clamp", "selection": "strict" }"#,
    )?;
    assert_eq!(config.method, QuantileMethod::Type6);

    // absent selector uses the configured method
    let q = percentile_with_config(&SAMPLE, 0.3, None, &config)?;
    assert_eq!(q, percentile(&SAMPLE, 0.3, Some(6))?);

    // strict selection rejects what the documented policy maps to type 7
    assert!(percentile_with_config(&SAMPLE, 0.3, Some(3), &config).is_err());

    // clamp keeps out-of-range probabilities in the sample
    assert_eq!(percentile_with_config(&SAMPLE, 5.0, None, &config)?, 95.199);
    Ok(())
}

#[test]
fn test_integer_and_f32_samples() {
    init_tracing();
    let ints = [10u32, 40, 20, 30];
    assert_relative_eq!(percentile(&ints, 0.5, None).unwrap(), 25.0);

    let floats = [1.5f32, 0.5, 2.5];
    assert_relative_eq!(percentile(&floats, 0.5, None).unwrap(), 1.5);
}

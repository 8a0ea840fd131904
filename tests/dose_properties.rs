//! Property-based tests for the dose-response models and the personal
//! dose aggregator.
//!
//! Invariants checked over random inputs:
//! - LNT is exactly proportional
//! - Threshold and Hormesis follow their branch formulas around 10 mSv
//! - Hormesis never goes negative
//! - Totals are linear in the counts; negative counts are rejected

use proptest::prelude::*;
use radscope::application::ExposureService;
use radscope::domain::{
    compute_total_dose, evaluate, evaluate_models, evaluate_range, linspace, DoseError,
    RiskModelKind, CHEST_XRAY_DOSE_MSV, FLIGHT_DOSE_MSV, THRESHOLD_DOSE_MSV,
};

const EPS: f64 = 1e-9;

proptest! {
    #[test]
    fn prop_lnt_proportional(x in 0.0f64..1.0e6) {
        prop_assert_eq!(evaluate(RiskModelKind::LinearNoThreshold, x).unwrap(), 0.01 * x);
    }

    #[test]
    fn prop_threshold_zero_below_cutoff(x in 0.0f64..THRESHOLD_DOSE_MSV) {
        prop_assert_eq!(evaluate(RiskModelKind::Threshold, x).unwrap(), 0.0);
    }

    #[test]
    fn prop_threshold_linear_above_cutoff(x in THRESHOLD_DOSE_MSV..1.0e6) {
        prop_assert_eq!(evaluate(RiskModelKind::Threshold, x).unwrap(), 0.01 * (x - 10.0));
    }

    #[test]
    fn prop_hormesis_branches(x in 0.0f64..1.0e4) {
        let risk = evaluate(RiskModelKind::Hormesis, x).unwrap();
        let expected = if x < 10.0 { -0.005 * x + 0.05 } else { 0.01 * (x - 10.0) };
        prop_assert_eq!(risk, expected);
    }

    #[test]
    fn prop_hormesis_non_negative(x in 0.0f64..1.0e4) {
        prop_assert!(evaluate(RiskModelKind::Hormesis, x).unwrap() >= -EPS);
    }

    #[test]
    fn prop_negative_dose_rejected(x in -1.0e6f64..-1.0e-9) {
        for model in RiskModelKind::ALL {
            prop_assert!(matches!(evaluate(model, x), Err(DoseError::InvalidInput(_))));
        }
    }

    #[test]
    fn prop_range_is_pointwise(doses in prop::collection::vec(0.0f64..200.0, 0..64)) {
        for model in RiskModelKind::ALL {
            let risks = evaluate_range(model, &doses).unwrap();
            prop_assert_eq!(risks.len(), doses.len());
            for (dose, risk) in doses.iter().zip(&risks) {
                prop_assert_eq!(*risk, evaluate(model, *dose).unwrap());
            }
        }
    }

    #[test]
    fn prop_linspace_endpoints(stop in 1.0f64..1.0e3, n in 2usize..500) {
        let grid = linspace(0.0, stop, n);
        prop_assert_eq!(grid.len(), n);
        prop_assert_eq!(grid[0], 0.0);
        prop_assert_eq!(grid[n - 1], stop);
        prop_assert!(grid.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn prop_total_dose_linear(flights in 0i64..10_000, xrays in 0i64..10_000) {
        let total = compute_total_dose(flights, xrays).unwrap();
        let expected = flights as f64 * FLIGHT_DOSE_MSV + xrays as f64 * CHEST_XRAY_DOSE_MSV;
        prop_assert!((total.msv() - expected).abs() < EPS);
        prop_assert!(total.msv() >= 0.0);
    }

    #[test]
    fn prop_negative_count_rejected(flights in -10_000i64..0, xrays in 0i64..100) {
        prop_assert!(matches!(
            compute_total_dose(flights, xrays),
            Err(DoseError::InvalidInput(_))
        ));
        prop_assert!(matches!(
            compute_total_dose(xrays, flights),
            Err(DoseError::InvalidInput(_))
        ));
    }
}

#[test]
fn test_documented_totals() {
    assert_eq!(compute_total_dose(0, 0).unwrap().to_string(), "0.00 mSv");
    assert_eq!(compute_total_dose(5, 1).unwrap().to_string(), "0.30 mSv");
    assert_eq!(compute_total_dose(50, 10).unwrap().to_string(), "3.00 mSv");
}

#[test]
fn test_default_model_grid() {
    let curves = evaluate_models(&linspace(0.0, 100.0, 100)).unwrap();
    assert_eq!(curves.lnt.len(), 100);
    assert_eq!(curves.threshold.len(), 100);
    assert_eq!(curves.hormesis.len(), 100);
    assert_eq!(curves.doses[0], 0.0);
    assert_eq!(curves.doses[99], 100.0);
    assert_eq!(curves.lnt[99], 1.0);
}

#[test]
fn test_service_reference_table() {
    let service = ExposureService::new();
    let table = service.reference_table();
    assert_eq!(table.len(), 8);

    let smoking = table
        .iter()
        .find(|r| r.name == "Smoking (1 pack/day, Annual)")
        .expect("Should list smoking");
    assert_eq!(smoking.dose_msv, 70.0);
}

//! Golden tests for the vial duration estimator.
//!
//! Each case is a pump schedule with hand-computed expected results.

use approx::assert_relative_eq;
use vial_duration_core::estimator::{calculate_vial_duration, estimate, EstimateError};
use vial_duration_core::models::PumpSettings;
use vial_duration_core::DeltaTracker;

/// Test case with hand-computed expectations.
struct GoldenCase {
    id: &'static str,
    settings: PumpSettings,
    expected_hours: f64,
    expected_day: f64,
    expected_night: f64,
    expected_boost: f64,
}

fn get_golden_cases() -> Vec<GoldenCase> {
    vec![
        GoldenCase {
            id: "form-defaults-no-boosts",
            settings: PumpSettings::new(10.0, 0.44, 0.3, 0.27, 0, 8.0),
            expected_hours: 7.84 / 0.44 + 8.0,
            expected_day: 7.84,
            expected_night: 2.16,
            expected_boost: 0.0,
        },
        GoldenCase {
            id: "form-defaults-four-boosts",
            settings: PumpSettings::new(10.0, 0.44, 0.3, 0.27, 4, 8.0),
            expected_hours: 6.64 / 0.44 + 8.0,
            expected_day: 6.64,
            expected_night: 2.16,
            expected_boost: 1.2,
        },
        GoldenCase {
            id: "night-exceeds-vial",
            settings: PumpSettings::new(1.0, 0.44, 0.0, 1.0, 0, 8.0),
            expected_hours: -7.0 / 0.44 + 8.0,
            expected_day: -7.0,
            expected_night: 8.0,
            expected_boost: 0.0,
        },
        GoldenCase {
            id: "no-night-window",
            settings: PumpSettings::new(12.0, 0.5, 0.25, 0.3, 4, 0.0),
            expected_hours: 22.0,
            expected_day: 11.0,
            expected_night: 0.0,
            expected_boost: 1.0,
        },
        GoldenCase {
            id: "whole-vial-claimed",
            settings: PumpSettings::new(5.0, 0.4, 1.0, 0.25, 3, 8.0),
            expected_hours: 8.0,
            expected_day: 0.0,
            expected_night: 2.0,
            expected_boost: 3.0,
        },
        GoldenCase {
            id: "fractional-night-hours",
            settings: PumpSettings::new(20.0, 1.0, 0.5, 0.5, 2, 6.5),
            expected_hours: 15.75 + 6.5,
            expected_day: 15.75,
            expected_night: 3.25,
            expected_boost: 1.0,
        },
        GoldenCase {
            id: "boosts-exceed-vial",
            settings: PumpSettings::new(2.0, 0.5, 1.0, 0.0, 3, 8.0),
            expected_hours: -2.0 + 8.0,
            expected_day: -1.0,
            expected_night: 0.0,
            expected_boost: 3.0,
        },
    ]
}

#[test]
fn test_golden_cases() {
    for case in get_golden_cases() {
        let result = estimate(&case.settings)
            .unwrap_or_else(|e| panic!("case {} failed: {}", case.id, e));

        assert!(
            (result.estimated_hours - case.expected_hours).abs() < 1e-9,
            "case {}: estimated_hours {} != {}",
            case.id,
            result.estimated_hours,
            case.expected_hours
        );
        assert!(
            (result.day_consumption - case.expected_day).abs() < 1e-9,
            "case {}: day_consumption {} != {}",
            case.id,
            result.day_consumption,
            case.expected_day
        );
        assert!(
            (result.night_consumption - case.expected_night).abs() < 1e-9,
            "case {}: night_consumption {} != {}",
            case.id,
            result.night_consumption,
            case.expected_night
        );
        assert!(
            (result.boost_consumption - case.expected_boost).abs() < 1e-9,
            "case {}: boost_consumption {} != {}",
            case.id,
            result.boost_consumption,
            case.expected_boost
        );
    }
}

#[test]
fn test_golden_cases_consume_whole_vial() {
    for case in get_golden_cases() {
        let result = estimate(&case.settings).unwrap();
        assert!(
            (result.total_consumption() - case.settings.vial_amount).abs() < 1e-9,
            "case {}: consumption {} does not account for vial {}",
            case.id,
            result.total_consumption(),
            case.settings.vial_amount
        );
    }
}

#[test]
fn test_scenario_four_boosts() {
    let result = calculate_vial_duration(10.0, 0.44, 0.3, 0.27, 4, 8.0).unwrap();
    assert_relative_eq!(result.estimated_hours, 23.0909, epsilon = 1e-4);
}

#[test]
fn test_scenario_infeasible_schedule() {
    let result = calculate_vial_duration(1.0, 0.44, 0.0, 1.0, 0, 8.0).unwrap();
    assert_relative_eq!(result.estimated_hours, -7.909, epsilon = 1e-3);
    assert!(!result.covers_scheduled_load());
}

#[test]
fn test_zero_base_rate_always_fails() {
    let schedules = [
        PumpSettings::new(10.0, 0.0, 0.3, 0.27, 0, 8.0),
        PumpSettings::new(0.0, 0.0, 0.0, 0.0, 0, 0.0),
        PumpSettings::new(1.0, 0.0, 0.0, 1.0, 0, 8.0),
        PumpSettings::new(100.0, -0.0, 10.0, 10.0, 12, 24.0),
    ];

    for settings in schedules {
        assert_eq!(estimate(&settings), Err(EstimateError::DivisionByZero));
    }
}

#[test]
fn test_recalculation_session() {
    let mut tracker = DeltaTracker::new();
    let mut settings = PumpSettings::default();

    let first = estimate(&settings).unwrap();
    assert!(tracker.record(first).is_none());

    settings.expected_boosts = 2;
    let second = estimate(&settings).unwrap();
    let delta = tracker.record(second).unwrap();
    assert_relative_eq!(delta.boost_consumption, 0.6, epsilon = 1e-12);
    assert_relative_eq!(delta.estimated_hours, -0.6 / 0.44, epsilon = 1e-12);

    // A failed recalculation leaves the tracker untouched.
    settings.base_flow_rate = 0.0;
    assert!(estimate(&settings).is_err());
    assert_eq!(tracker.previous(), Some(&second));
}

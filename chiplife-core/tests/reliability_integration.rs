//! Integration tests for the reliability entry point
//!
//! Runs the named stress scenarios end to end and checks that presets,
//! sweeps and duration planning agree with the single-request path.

mod common;

use chiplife_core::{
    compute_reliability,
    constants::{AUTOMOTIVE_YEARS, INDUSTRIAL_YEARS, STANDARD_SWEEP_DURATIONS_HOURS},
    lifetime::{required_test_hours, standard_duration_sweep},
    presets::StressPreset,
    Condition, ModelParameters, ModelSelection, QualificationVerdict, ReliabilityError,
    ReliabilityRequest,
};

use common::{assert_close, assert_rel_close, scenarios};

/// Relative tolerance against the independently computed figures
const REL_TOL: f64 = 1e-4;

#[test]
fn test_reference_scenarios() {
    for scenario in scenarios::all() {
        let report = compute_reliability(&scenario.request)
            .unwrap_or_else(|e| panic!("{}: {e}", scenario.name));

        assert_rel_close(report.acceleration.temperature_af, scenario.expected_temperature_af, REL_TOL);
        assert_rel_close(report.acceleration.humidity_af, scenario.expected_humidity_af, REL_TOL);
        assert_rel_close(report.lifetime.equivalent_years, scenario.expected_years, REL_TOL);
        assert_eq!(report.verdict, scenario.expected_verdict, "{}", scenario.name);
    }
}

#[test]
fn test_report_is_internally_consistent() {
    for scenario in scenarios::all() {
        let report = compute_reliability(&scenario.request).unwrap();
        let af = report.acceleration;
        let life = report.lifetime;

        assert_eq!(af.total_af, af.temperature_af * af.humidity_af);
        assert_eq!(life.test_duration_hours, scenario.request.test_duration_hours);
        assert_rel_close(life.equivalent_hours, life.test_duration_hours * af.total_af, 1e-12);
        assert_rel_close(life.equivalent_days, life.equivalent_years * 365.0, 1e-12);
        assert_eq!(report.verdict, life.verdict());
        assert_eq!(report.model, scenario.request.model);
    }
}

#[test]
fn test_presets_run_end_to_end() {
    for preset in StressPreset::ALL {
        let request = preset.request(Condition::field(), ModelParameters::default());
        let report = compute_reliability(&request).unwrap();

        assert_eq!(report.model, preset.model());
        assert_eq!(report.lifetime.test_duration_hours, preset.duration_hours());
        if preset.model().uses_humidity() {
            assert!(report.acceleration.humidity_af > 1.0, "{preset}");
        } else {
            assert_eq!(report.acceleration.humidity_af, 1.0, "{preset}");
        }
    }
}

#[test]
fn test_sweep_agrees_with_single_requests() {
    let base = scenarios::htol_low_ea().request;
    let af = compute_reliability(&base).unwrap().acceleration.total_af;
    let sweep = standard_duration_sweep(af).unwrap();

    assert_eq!(sweep.len(), STANDARD_SWEEP_DURATIONS_HOURS.len());
    for point in &sweep {
        let report = compute_reliability(&base.with_test_duration_hours(point.test_duration_hours)).unwrap();
        assert_eq!(point.equivalent_years, report.lifetime.equivalent_years);
        assert_eq!(point.verdict, report.verdict);
    }
}

#[test]
fn test_required_duration_reaches_target() {
    let base = scenarios::htol_hot_field().request;
    let af = compute_reliability(&base).unwrap().acceleration.total_af;

    for (target, verdict) in [
        (INDUSTRIAL_YEARS, QualificationVerdict::MeetsIndustrialOnly),
        (AUTOMOTIVE_YEARS, QualificationVerdict::MeetsAutomotive),
    ] {
        // Nudge past the breakpoint to stay clear of rounding at exactly 10.0 / 20.0
        let hours = required_test_hours(target, af).unwrap() * (1.0 + 1e-9);
        let report = compute_reliability(&base.with_test_duration_hours(hours)).unwrap();
        assert_close(report.lifetime.equivalent_years, target, 1e-6);
        assert_eq!(report.verdict, verdict);
    }
}

#[test]
fn test_invalid_inputs_produce_no_result() {
    let cases = [
        (
            ReliabilityRequest::htol_default()
                .with_params(ModelParameters::default().with_activation_energy(0.0)),
            "activation_energy_ev",
        ),
        (
            ReliabilityRequest::htol_default().with_stress_condition(Condition::new(-300.0)),
            "stress_temperature_celsius",
        ),
        (
            ReliabilityRequest::htol_default().with_use_condition(Condition::new(-273.15)),
            "use_temperature_celsius",
        ),
        (
            ReliabilityRequest::htol_default().with_test_duration_hours(-1.0),
            "test_duration_hours",
        ),
        (
            ReliabilityRequest::hast_default().with_use_condition(Condition::new(25.0)),
            "use_humidity_pct",
        ),
        (
            ReliabilityRequest::hast_default()
                .with_stress_condition(Condition::new(130.0).with_humidity(100.5)),
            "stress_humidity_pct",
        ),
        (
            ReliabilityRequest::hast_default()
                .with_params(ModelParameters::default().with_humidity_exponent(-3.0)),
            "humidity_exponent",
        ),
        (
            ReliabilityRequest::htol_default().with_test_duration_hours(f64::NAN),
            "test_duration_hours",
        ),
        // Above 0 K but the factor underflows or overflows f64
        (
            ReliabilityRequest::htol_default().with_stress_condition(Condition::new(-273.0)),
            "stress_temperature_celsius",
        ),
        (
            ReliabilityRequest::htol_default().with_use_condition(Condition::new(-270.0)),
            "use_temperature_celsius",
        ),
        (
            ReliabilityRequest::hast_default()
                .with_use_condition(Condition::new(25.0).with_humidity(1.0))
                .with_params(ModelParameters::default().with_humidity_exponent(200.0)),
            "humidity_exponent",
        ),
    ];

    for (request, parameter) in cases {
        match compute_reliability(&request) {
            Err(ReliabilityError::InvalidInput { parameter: p, .. }) => assert_eq!(p, parameter),
            Ok(report) => panic!("expected rejection of {parameter}, got {report:?}"),
        }
    }
}

#[test]
fn test_inverted_stress_is_reported_not_rejected() {
    let request = ReliabilityRequest::new(
        Condition::new(85.0).with_humidity(85.0),
        Condition::new(25.0).with_humidity(50.0),
        ModelSelection::TemperatureAndHumidity,
        ModelParameters::default(),
        1000.0,
    );
    let report = compute_reliability(&request).unwrap();

    assert!(report.acceleration.temperature_af < 1.0);
    assert!(report.acceleration.humidity_af < 1.0);
    assert!(report.acceleration.total_af > 0.0);
    assert_eq!(report.verdict, QualificationVerdict::BelowIndustrial);
}

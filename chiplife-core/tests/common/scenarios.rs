//! Pre-built stress scenarios
//!
//! Expected figures were computed independently with kB = 8.617e-5 eV/K and a
//! 8760 h year.

use chiplife_core::{
    Condition, ModelParameters, ModelSelection, QualificationVerdict, ReliabilityRequest,
};

/// Scenario with its expected outcome
pub struct TestScenario {
    pub name: &'static str,
    pub request: ReliabilityRequest,
    pub expected_temperature_af: f64,
    pub expected_humidity_af: f64,
    pub expected_years: f64,
    pub expected_verdict: QualificationVerdict,
}

/// HTOL 125 °C / 1000 h, Ea = 0.5 eV
pub fn htol_low_ea() -> TestScenario {
    TestScenario {
        name: "htol_ea_0.5",
        request: ReliabilityRequest::new(
            Condition::new(25.0),
            Condition::new(125.0),
            ModelSelection::TemperatureOnly,
            ModelParameters::default().with_activation_energy(0.5),
            1000.0,
        ),
        expected_temperature_af: 132.690,
        expected_humidity_af: 1.0,
        expected_years: 15.147,
        expected_verdict: QualificationVerdict::MeetsIndustrialOnly,
    }
}

/// HTOL 125 °C / 1000 h, Ea = 0.7 eV
pub fn htol_default() -> TestScenario {
    TestScenario {
        name: "htol_ea_0.7",
        request: ReliabilityRequest::htol_default(),
        expected_temperature_af: 937.502,
        expected_humidity_af: 1.0,
        expected_years: 107.021,
        expected_verdict: QualificationVerdict::MeetsAutomotive,
    }
}

/// HTOL with a hot field environment, 55 °C use
pub fn htol_hot_field() -> TestScenario {
    TestScenario {
        name: "htol_hot_field",
        request: ReliabilityRequest::htol_default().with_use_condition(Condition::new(55.0)),
        expected_temperature_af: 77.658,
        expected_humidity_af: 1.0,
        expected_years: 8.865,
        expected_verdict: QualificationVerdict::BelowIndustrial,
    }
}

/// HAST 130 °C / 85 %RH / 96 h against 25 °C / 50 %RH
pub fn hast_default() -> TestScenario {
    TestScenario {
        name: "hast",
        request: ReliabilityRequest::hast_default(),
        expected_temperature_af: 1207.448,
        expected_humidity_af: 4.913,
        expected_years: 65.010,
        expected_verdict: QualificationVerdict::MeetsAutomotive,
    }
}

/// HAST temperature term alone, 96 h
pub fn hast_temperature_only() -> TestScenario {
    TestScenario {
        name: "hast_temperature_only",
        request: ReliabilityRequest::hast_default().with_model(ModelSelection::TemperatureOnly),
        expected_temperature_af: 1207.448,
        expected_humidity_af: 1.0,
        expected_years: 13.232,
        expected_verdict: QualificationVerdict::MeetsIndustrialOnly,
    }
}

/// THB 85 °C / 85 %RH / 1000 h against 25 °C / 50 %RH
pub fn thb_default() -> TestScenario {
    TestScenario {
        name: "thb",
        request: ReliabilityRequest::hast_default()
            .with_stress_condition(Condition::new(85.0).with_humidity(85.0))
            .with_test_duration_hours(1000.0),
        expected_temperature_af: 96.015,
        expected_humidity_af: 4.913,
        expected_years: 53.849,
        expected_verdict: QualificationVerdict::MeetsAutomotive,
    }
}

/// Every scenario above
pub fn all() -> [TestScenario; 6] {
    [
        htol_low_ea(),
        htol_default(),
        htol_hot_field(),
        hast_default(),
        hast_temperature_only(),
        thb_default(),
    ]
}

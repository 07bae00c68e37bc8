//! Reliability Computation Entry Point
//!
//! [`compute_reliability`] is the one call a presentation layer needs: hand
//! it a [`ReliabilityRequest`], get back a [`ReliabilityReport`] holding the
//! acceleration factors, the equivalent lifetime, and the qualification
//! verdict. Every constraint is checked up front, so a failure never comes
//! with a partial result.
//!
//! ## Validation Order
//!
//! 1. Model parameters (Ea, n, kB > 0), n included under every model
//! 2. Absolute temperatures (> 0 K)
//! 3. Relative humidities in (0, 100] %, humidity model only
//! 4. Test duration (≥ 0 h)
//!
//! A factor or lifetime that leaves the `f64` range during computation is
//! also `InvalidInput`, naming the input that drove it there.
//!
//! Under the temperature-only model humidity fields are ignored, whatever
//! they contain.
//!
//! ```rust
//! use chiplife_core::{compute_reliability, Condition, ModelParameters, ModelSelection,
//!                     QualificationVerdict, ReliabilityRequest};
//!
//! let request = ReliabilityRequest::new(
//!     Condition::new(25.0),
//!     Condition::new(125.0),
//!     ModelSelection::TemperatureOnly,
//!     ModelParameters::default().with_activation_energy(0.5),
//!     1000.0,
//! );
//! let report = compute_reliability(&request)?;
//!
//! assert!((report.acceleration.total_af - 132.7).abs() < 0.1);
//! assert!((report.lifetime.equivalent_years - 15.1).abs() < 0.1);
//! assert_eq!(report.verdict, QualificationVerdict::MeetsIndustrialOnly);
//! # Ok::<(), chiplife_core::ReliabilityError>(())
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    conditions::Condition,
    errors::ReliabilityResult,
    lifetime::{compute_lifetime_estimate, LifetimeEstimate},
    models::{compute_acceleration, utils, AccelerationResult},
    params::{ModelParameters, ModelSelection},
    presets::StressPreset,
    qualification::{classify, QualificationVerdict},
};

/// Everything needed for one computation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReliabilityRequest {
    /// Field environment
    pub use_condition: Condition,

    /// Test chamber environment
    pub stress_condition: Condition,

    /// Model to evaluate
    #[cfg_attr(feature = "serde", serde(default))]
    pub model: ModelSelection,

    /// Model constants
    #[cfg_attr(feature = "serde", serde(default))]
    pub params: ModelParameters,

    /// Proposed test duration (h)
    pub test_duration_hours: f64,
}

impl ReliabilityRequest {
    /// Request from explicit parts
    pub const fn new(
        use_condition: Condition,
        stress_condition: Condition,
        model: ModelSelection,
        params: ModelParameters,
        test_duration_hours: f64,
    ) -> Self {
        Self {
            use_condition,
            stress_condition,
            model,
            params,
            test_duration_hours,
        }
    }

    /// 1000 h HTOL at 125 °C against a 25 °C / 50 %RH field, default parameters
    pub fn htol_default() -> Self {
        StressPreset::Htol.request(Condition::field(), ModelParameters::default())
    }

    /// 96 h HAST at 130 °C / 85 %RH against a 25 °C / 50 %RH field, default parameters
    pub fn hast_default() -> Self {
        StressPreset::Hast.request(Condition::field(), ModelParameters::default())
    }

    /// Replace the use condition
    pub const fn with_use_condition(mut self, use_condition: Condition) -> Self {
        self.use_condition = use_condition;
        self
    }

    /// Replace the stress condition
    pub const fn with_stress_condition(mut self, stress_condition: Condition) -> Self {
        self.stress_condition = stress_condition;
        self
    }

    /// Replace the model selection
    pub const fn with_model(mut self, model: ModelSelection) -> Self {
        self.model = model;
        self
    }

    /// Replace the model parameters
    pub const fn with_params(mut self, params: ModelParameters) -> Self {
        self.params = params;
        self
    }

    /// Replace the test duration
    pub const fn with_test_duration_hours(mut self, test_duration_hours: f64) -> Self {
        self.test_duration_hours = test_duration_hours;
        self
    }

    /// Check every constraint without computing anything
    pub fn validate(&self) -> ReliabilityResult<()> {
        utils::check_positive("activation_energy_ev", self.params.activation_energy_ev)?;
        utils::check_positive("humidity_exponent", self.params.humidity_exponent)?;
        utils::check_positive("boltzmann_constant_ev_per_k", self.params.boltzmann_constant_ev_per_k)?;

        utils::absolute_temperature("use_temperature_celsius", &self.use_condition)?;
        utils::absolute_temperature("stress_temperature_celsius", &self.stress_condition)?;

        if self.model.uses_humidity() {
            let rh_use = utils::required_humidity("use_humidity_pct", &self.use_condition)?;
            utils::check_humidity("use_humidity_pct", rh_use)?;
            let rh_stress = utils::required_humidity("stress_humidity_pct", &self.stress_condition)?;
            utils::check_humidity("stress_humidity_pct", rh_stress)?;
        }

        utils::check_non_negative("test_duration_hours", self.test_duration_hours)?;
        Ok(())
    }

    /// Shorthand for [`compute_reliability`]
    pub fn compute(&self) -> ReliabilityResult<ReliabilityReport> {
        compute_reliability(self)
    }
}

impl Default for ReliabilityRequest {
    fn default() -> Self {
        Self::htol_default()
    }
}

/// Result of one computation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReliabilityReport {
    /// Model that produced the factors
    pub model: ModelSelection,

    /// Temperature, humidity and total acceleration factors
    pub acceleration: AccelerationResult,

    /// Equivalent field lifetime of the proposed test
    pub lifetime: LifetimeEstimate,

    /// Qualification verdict for the equivalent lifetime
    pub verdict: QualificationVerdict,
}

/// Compute acceleration factors, equivalent lifetime and verdict
///
/// Fails with `InvalidInput` if any constraint of the request is violated; no
/// partial result is produced.
pub fn compute_reliability(request: &ReliabilityRequest) -> ReliabilityResult<ReliabilityReport> {
    request.validate()?;

    let params = &request.params;
    if !params.activation_energy_is_typical() {
        log_warn!("Activation energy {} eV outside the typical 0.4-1.1 eV range", params.activation_energy_ev);
    }
    if request.model.uses_humidity() && !params.humidity_exponent_is_typical() {
        log_warn!("Humidity exponent {} outside the typical 2.0-4.0 range", params.humidity_exponent);
    }

    let acceleration = compute_acceleration(
        request.model,
        &request.use_condition,
        &request.stress_condition,
        params,
    )?;
    let lifetime = compute_lifetime_estimate(request.test_duration_hours, acceleration.total_af)?;
    let verdict = classify(lifetime.equivalent_years);

    log_debug!(
        "{} AF: temp={:.3} hum={:.3} total={:.3}; {} h -> {:.2} yr ({})",
        request.model,
        acceleration.temperature_af,
        acceleration.humidity_af,
        acceleration.total_af,
        request.test_duration_hours,
        lifetime.equivalent_years,
        verdict
    );

    Ok(ReliabilityReport {
        model: request.model,
        acceleration,
        lifetime,
        verdict,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ReliabilityError;

    #[test]
    fn htol_default_report() {
        let report = compute_reliability(&ReliabilityRequest::htol_default()).unwrap();
        assert_eq!(report.model, ModelSelection::TemperatureOnly);
        assert!((report.acceleration.total_af - 937.5).abs() < 0.5);
        assert!((report.lifetime.equivalent_years - 107.0).abs() < 0.1);
        assert_eq!(report.verdict, QualificationVerdict::MeetsAutomotive);
    }

    #[test]
    fn hast_default_report() {
        let report = ReliabilityRequest::hast_default().compute().unwrap();
        assert!((report.acceleration.humidity_af - 4.913).abs() < 1e-9);
        assert!((report.acceleration.temperature_af - 1207.4).abs() < 0.5);
        assert!((report.acceleration.total_af - 5932.2).abs() < 2.0);
        assert!((report.lifetime.equivalent_years - 65.0).abs() < 0.1);
        assert_eq!(report.verdict, QualificationVerdict::MeetsAutomotive);
    }

    #[test]
    fn zero_activation_energy_rejected() {
        let req = ReliabilityRequest::htol_default()
            .with_params(ModelParameters::default().with_activation_energy(0.0));
        assert!(matches!(
            compute_reliability(&req),
            Err(ReliabilityError::InvalidInput { parameter: "activation_energy_ev", .. })
        ));
    }

    #[test]
    fn non_positive_humidity_exponent_rejected() {
        let req = ReliabilityRequest::hast_default()
            .with_params(ModelParameters::default().with_humidity_exponent(0.0));
        assert!(compute_reliability(&req).is_err());
    }

    #[test]
    fn sub_absolute_zero_stress_rejected() {
        let req = ReliabilityRequest::htol_default().with_stress_condition(Condition::new(-300.0));
        assert!(matches!(
            compute_reliability(&req),
            Err(ReliabilityError::InvalidInput { parameter: "stress_temperature_celsius", .. })
        ));
    }

    #[test]
    fn humidity_exponent_checked_even_without_humidity_model() {
        let params = ModelParameters::default().with_humidity_exponent(0.0);
        let req = ReliabilityRequest::htol_default().with_params(params);
        assert!(matches!(
            compute_reliability(&req),
            Err(ReliabilityError::InvalidInput { parameter: "humidity_exponent", .. })
        ));

        // The model layer alone does not read n for this selection
        assert!(compute_acceleration(req.model, &req.use_condition, &req.stress_condition, &params).is_ok());
    }

    #[test]
    fn negative_duration_rejected() {
        let req = ReliabilityRequest::htol_default().with_test_duration_hours(-1.0);
        assert!(compute_reliability(&req).is_err());
    }

    #[test]
    fn zero_use_humidity_rejected_at_entry_point() {
        let req = ReliabilityRequest::hast_default()
            .with_use_condition(Condition::new(25.0).with_humidity(0.0));
        assert!(matches!(
            compute_reliability(&req),
            Err(ReliabilityError::InvalidInput { parameter: "use_humidity_pct", .. })
        ));
    }

    #[test]
    fn humidity_above_hundred_rejected() {
        let req = ReliabilityRequest::hast_default()
            .with_stress_condition(Condition::new(130.0).with_humidity(120.0));
        assert!(compute_reliability(&req).is_err());
    }

    #[test]
    fn temperature_only_ignores_bad_humidity() {
        let req = ReliabilityRequest::htol_default()
            .with_use_condition(Condition::new(25.0).with_humidity(-20.0))
            .with_stress_condition(Condition::new(125.0).with_humidity(250.0));
        let report = compute_reliability(&req).unwrap();
        assert_eq!(report.acceleration.humidity_af, 1.0);
    }

    #[test]
    fn small_use_humidity_floored() {
        let base = ReliabilityRequest::hast_default();
        let at_floor = base
            .with_use_condition(Condition::new(25.0).with_humidity(1.0))
            .compute()
            .unwrap();
        let below = base
            .with_use_condition(Condition::new(25.0).with_humidity(0.4))
            .compute()
            .unwrap();
        assert_eq!(at_floor.acceleration, below.acceleration);
    }

    #[test]
    fn atypical_parameters_still_accepted() {
        let req = ReliabilityRequest::htol_default()
            .with_params(ModelParameters::new(1.5, 6.0));
        assert!(compute_reliability(&req).is_ok());
    }
}

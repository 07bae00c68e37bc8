//! Core traits for acceleration models
//!
//! Every model answers the same three questions for a pair of conditions:
//! how much does temperature accelerate failures, how much does humidity, and
//! what is the product. Keep the trait small; the models are closed-form.

use crate::{
    conditions::Condition,
    errors::ReliabilityResult,
    models::{utils, AccelerationResult},
    params::ModelSelection,
};

/// Acceleration model - implement this for each physical model
pub trait AccelerationModel {
    /// The selection this model answers to
    fn selection(&self) -> ModelSelection;

    /// Temperature acceleration factor between use and stress
    fn temperature_af(&self, use_condition: &Condition, stress_condition: &Condition) -> ReliabilityResult<f64>;

    /// Humidity acceleration factor between use and stress
    ///
    /// Models without a humidity term return exactly 1.0.
    fn humidity_af(&self, use_condition: &Condition, stress_condition: &Condition) -> ReliabilityResult<f64>;

    /// Evaluate both factors and their product
    ///
    /// Each factor is in range on its own, but their product can still leave
    /// `f64`. That only happens when the humidity term is not 1, so the error
    /// names `humidity_exponent`.
    fn acceleration(&self, use_condition: &Condition, stress_condition: &Condition) -> ReliabilityResult<AccelerationResult> {
        let temperature_af = self.temperature_af(use_condition, stress_condition)?;
        let humidity_af = self.humidity_af(use_condition, stress_condition)?;
        let result = AccelerationResult::new(temperature_af, humidity_af);
        utils::check_factor("humidity_exponent", result.total_af, result.total_af)?;
        Ok(result)
    }
}

/// Trait for values that can be validated
pub trait Validatable {
    /// Check if the value is usable in a computation (not NaN, infinite, etc)
    fn is_valid(&self) -> bool;
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validatable for Condition {
    fn is_valid(&self) -> bool {
        self.temperature_celsius.is_valid()
            && self.relative_humidity_pct.map_or(true, |rh| rh.is_valid())
    }
}

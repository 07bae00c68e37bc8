//! Physics-Based Acceleration Models
//!
//! ## Overview
//!
//! An accelerated life test runs parts hotter (and often wetter) than they
//! will ever see in the field, so that failure mechanisms which would take
//! years show up in hours. The acceleration factor (AF) is the ratio between
//! the two failure rates; multiplying test hours by AF gives equivalent field
//! hours.
//!
//! Two closed-form models cover the JEDEC stress regimes:
//!
//! | Model | Selection | Factors | Typical test |
//! |-------|-----------|---------|--------------|
//! | Arrhenius | `TemperatureOnly` | temperature | HTOL |
//! | Peck | `TemperatureAndHumidity` | temperature × humidity | HAST, THB |
//!
//! ## Layers
//!
//! - The raw formulas are free functions ([`compute_temperature_af`],
//!   [`compute_humidity_af`], [`compute_total_af`]) that validate their own
//!   arguments.
//! - [`ArrheniusModel`] and [`PeckModel`] bind a parameter set and implement
//!   [`AccelerationModel`](crate::traits::AccelerationModel).
//! - [`compute_acceleration`] dispatches on [`ModelSelection`].
//!
//! ## Usage Example
//!
//! ```rust
//! use chiplife_core::models::{ArrheniusModel, PeckModel};
//! use chiplife_core::{AccelerationModel, Condition, ModelParameters};
//!
//! let params = ModelParameters::default();
//! let field = Condition::new(25.0).with_humidity(50.0);
//! let thb = Condition::new(85.0).with_humidity(85.0);
//!
//! let peck = PeckModel::from_params(&params)?;
//! let af = peck.acceleration(&field, &thb)?;
//! assert!(af.total_af > af.temperature_af);
//!
//! // The Arrhenius model ignores humidity entirely
//! let arrhenius = ArrheniusModel::from_params(&params)?;
//! assert_eq!(arrhenius.acceleration(&field, &thb)?.humidity_af, 1.0);
//! # Ok::<(), chiplife_core::ReliabilityError>(())
//! ```

mod arrhenius;
mod peck;
pub mod utils;

pub use arrhenius::{ArrheniusModel, compute_temperature_af};
pub use peck::{PeckModel, compute_humidity_af};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    conditions::Condition,
    errors::ReliabilityResult,
    params::{ModelParameters, ModelSelection},
    traits::AccelerationModel,
};

/// Acceleration factors of one use/stress pair
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AccelerationResult {
    /// Arrhenius temperature factor
    pub temperature_af: f64,

    /// Peck humidity factor, exactly 1.0 for the temperature-only model
    pub humidity_af: f64,

    /// `temperature_af × humidity_af`
    pub total_af: f64,
}

impl AccelerationResult {
    /// Combine the two factors
    pub fn new(temperature_af: f64, humidity_af: f64) -> Self {
        Self {
            temperature_af,
            humidity_af,
            total_af: compute_total_af(temperature_af, humidity_af),
        }
    }
}

/// Total acceleration factor
///
/// Plain product, full precision. Rounding is left to whoever displays it.
pub fn compute_total_af(temperature_af: f64, humidity_af: f64) -> f64 {
    temperature_af * humidity_af
}

/// Evaluate the selected model for a use/stress pair
///
/// Only the parameters the selected model reads are checked; `n` is ignored
/// under `TemperatureOnly`. [`compute_reliability`](crate::compute_reliability)
/// rejects a non-positive `n` for every model.
pub fn compute_acceleration(
    model: ModelSelection,
    use_condition: &Condition,
    stress_condition: &Condition,
    params: &ModelParameters,
) -> ReliabilityResult<AccelerationResult> {
    match model {
        ModelSelection::TemperatureOnly => {
            ArrheniusModel::from_params(params)?.acceleration(use_condition, stress_condition)
        }
        ModelSelection::TemperatureAndHumidity => {
            PeckModel::from_params(params)?.acceleration(use_condition, stress_condition)
        }
    }
}

//! Peck Temperature-Humidity Acceleration
//!
//! ## Physics Background
//!
//! Moisture-driven mechanisms in non-hermetic packages (aluminium pad
//! corrosion, delamination, ionic migration) accelerate with both temperature
//! and humidity. Peck's model multiplies the Arrhenius term by a power law in
//! relative humidity:
//!
//! ```text
//! AF_total = (RH_stress / RH_use)^n · exp[(Ea / kB) · (1/T_use − 1/T_stress)]
//! ```
//!
//! The exponent `n` is typically 2.0 – 4.0; 3.0 is the usual default.
//!
//! ### Dry Use Conditions
//!
//! `RH_use` is a divisor, so a very dry field environment would make the
//! humidity factor arbitrarily large. Use humidities below 1 % are raised to
//! 1 % before the ratio is formed:
//!
//! ```text
//! RH_use = 0.2 %  →  treated as 1 %
//! RH_use = 1.0 %  →  1 %
//! RH_use = 50 %   →  50 %
//! ```
//!
//! ### Worked Example (HAST)
//!
//! ```text
//! RH_use = 50 %, RH_stress = 85 %, n = 3.0
//! AF_hum = (85 / 50)^3 = 4.913
//! ```

use crate::{
    conditions::Condition,
    errors::ReliabilityResult,
    params::{ModelParameters, ModelSelection},
    traits::AccelerationModel,
};

use super::{arrhenius::ArrheniusModel, utils};

/// Peck humidity acceleration factor
///
/// Returns `(RH_stress / max(RH_use, 1 %))^n`. Both conditions must carry a
/// humidity; the stress humidity must lie in (0, 100] %, the use humidity in
/// [0, 100] % (the floor takes care of zero). Fails with `InvalidInput` if
/// `n` is not positive, or naming `humidity_exponent` if the power leaves the
/// `f64` range (for example `(100 / 1)^200`).
pub fn compute_humidity_af(
    use_condition: &Condition,
    stress_condition: &Condition,
    humidity_exponent: f64,
) -> ReliabilityResult<f64> {
    let n = utils::check_positive("humidity_exponent", humidity_exponent)?;

    let rh_stress = utils::required_humidity("stress_humidity_pct", stress_condition)?;
    let rh_stress = utils::check_humidity("stress_humidity_pct", rh_stress)?;

    let rh_use = utils::required_humidity("use_humidity_pct", use_condition)?;
    let rh_use = utils::check_humidity_floorable("use_humidity_pct", rh_use)?;
    let rh_use_floored = utils::floor_use_humidity(rh_use);

    if rh_use_floored > rh_use {
        log_warn!("Use humidity {}% raised to {}% for the Peck ratio", rh_use, rh_use_floored);
    }
    if rh_stress < rh_use_floored {
        log_warn!(
            "Stress humidity {}% is below use humidity {}%; humidity AF will be < 1",
            rh_stress,
            rh_use_floored
        );
    }

    utils::check_factor("humidity_exponent", n, libm::pow(rh_stress / rh_use_floored, n))
}

/// Temperature-humidity model (HAST, THB)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeckModel {
    arrhenius: ArrheniusModel,
    humidity_exponent: f64,
}

impl PeckModel {
    /// Create model, rejecting non-positive constants
    pub fn new(
        activation_energy_ev: f64,
        humidity_exponent: f64,
        boltzmann_constant_ev_per_k: f64,
    ) -> ReliabilityResult<Self> {
        Ok(Self {
            arrhenius: ArrheniusModel::new(activation_energy_ev, boltzmann_constant_ev_per_k)?,
            humidity_exponent: utils::check_positive("humidity_exponent", humidity_exponent)?,
        })
    }

    /// Create model from the shared parameter set
    pub fn from_params(params: &ModelParameters) -> ReliabilityResult<Self> {
        Self::new(
            params.activation_energy_ev,
            params.humidity_exponent,
            params.boltzmann_constant_ev_per_k,
        )
    }

    /// Humidity exponent n
    pub fn humidity_exponent(&self) -> f64 {
        self.humidity_exponent
    }
}

impl AccelerationModel for PeckModel {
    fn selection(&self) -> ModelSelection {
        ModelSelection::TemperatureAndHumidity
    }

    fn temperature_af(&self, use_condition: &Condition, stress_condition: &Condition) -> ReliabilityResult<f64> {
        self.arrhenius.temperature_af(use_condition, stress_condition)
    }

    fn humidity_af(&self, use_condition: &Condition, stress_condition: &Condition) -> ReliabilityResult<f64> {
        compute_humidity_af(use_condition, stress_condition, self.humidity_exponent)
    }
}

//! Arrhenius Temperature Acceleration
//!
//! ## Physics Background
//!
//! Most package failure mechanisms (intermetallic growth, corrosion kinetics,
//! electromigration, dielectric breakdown) are thermally activated: their rate
//! follows the Arrhenius law
//!
//! ```text
//! rate ∝ exp(-Ea / (kB · T))
//! ```
//!
//! The acceleration factor between a stress temperature and a use temperature
//! is the ratio of the two rates:
//!
//! ```text
//! AF_temp = exp[(Ea / kB) · (1/T_use − 1/T_stress)]
//! ```
//!
//! with both temperatures in Kelvin. Feeding Celsius into the exponent is the
//! classic mistake; the conversion happens here and nowhere else.
//!
//! ### Worked Example (HTOL)
//!
//! ```text
//! T_use = 25 °C (298.15 K), T_stress = 125 °C (398.15 K)
//! 1/298.15 − 1/398.15 = 8.424e-4 K⁻¹
//!
//! Ea = 0.5 eV:  Ea/kB = 5802 K  →  AF_temp = exp(4.888) ≈ 132.7
//! Ea = 0.7 eV:  Ea/kB = 8123 K  →  AF_temp = exp(6.843) ≈ 937.5
//! ```
//!
//! The exponent is linear in Ea, so a modest change in activation energy moves
//! the factor by almost an order of magnitude. Quote Ea with every AF.
//!
//! ## Inverted Conditions
//!
//! The formula is evaluated as-is when the stress temperature is not above the
//! use temperature. The result is then ≤ 1, which is physically a
//! deceleration. This is logged but not rejected.

use crate::{
    conditions::Condition,
    errors::ReliabilityResult,
    params::{ModelParameters, ModelSelection},
    traits::AccelerationModel,
};

use super::utils;

/// Arrhenius temperature acceleration factor
///
/// Returns `exp[(ea/kB) · (1/T_use − 1/T_stress)]`, temperatures in Kelvin.
/// Fails with `InvalidInput` if `ea` or `kB` is not positive, if either
/// absolute temperature is not above 0 K, or if the factor underflows to 0 or
/// overflows `f64` (temperatures within a few kelvin of absolute zero). The
/// overflow error names the colder of the two temperatures.
pub fn compute_temperature_af(
    use_condition: &Condition,
    stress_condition: &Condition,
    activation_energy_ev: f64,
    boltzmann_constant_ev_per_k: f64,
) -> ReliabilityResult<f64> {
    let ea = utils::check_positive("activation_energy_ev", activation_energy_ev)?;
    let kb = utils::check_positive("boltzmann_constant_ev_per_k", boltzmann_constant_ev_per_k)?;
    let t_use_k = utils::absolute_temperature("use_temperature_celsius", use_condition)?;
    let t_stress_k = utils::absolute_temperature("stress_temperature_celsius", stress_condition)?;

    if t_stress_k <= t_use_k {
        log_warn!(
            "Stress temperature {}°C does not exceed use temperature {}°C; AF will be <= 1",
            stress_condition.temperature_celsius,
            use_condition.temperature_celsius
        );
    }

    let af = libm::exp((ea / kb) * (1.0 / t_use_k - 1.0 / t_stress_k));

    // The colder side dominates 1/T, so it is the one that drove exp out of range
    let (parameter, input) = if t_use_k < t_stress_k {
        ("use_temperature_celsius", use_condition.temperature_celsius)
    } else {
        ("stress_temperature_celsius", stress_condition.temperature_celsius)
    };
    utils::check_factor(parameter, input, af)
}

/// Temperature-only model (HTOL)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrheniusModel {
    activation_energy_ev: f64,
    boltzmann_constant_ev_per_k: f64,
}

impl ArrheniusModel {
    /// Create model, rejecting non-positive constants
    pub fn new(activation_energy_ev: f64, boltzmann_constant_ev_per_k: f64) -> ReliabilityResult<Self> {
        Ok(Self {
            activation_energy_ev: utils::check_positive("activation_energy_ev", activation_energy_ev)?,
            boltzmann_constant_ev_per_k: utils::check_positive(
                "boltzmann_constant_ev_per_k",
                boltzmann_constant_ev_per_k,
            )?,
        })
    }

    /// Create model from the shared parameter set
    pub fn from_params(params: &ModelParameters) -> ReliabilityResult<Self> {
        Self::new(params.activation_energy_ev, params.boltzmann_constant_ev_per_k)
    }

    /// Activation energy (eV)
    pub fn activation_energy_ev(&self) -> f64 {
        self.activation_energy_ev
    }
}

impl AccelerationModel for ArrheniusModel {
    fn selection(&self) -> ModelSelection {
        ModelSelection::TemperatureOnly
    }

    fn temperature_af(&self, use_condition: &Condition, stress_condition: &Condition) -> ReliabilityResult<f64> {
        compute_temperature_af(
            use_condition,
            stress_condition,
            self.activation_energy_ev,
            self.boltzmann_constant_ev_per_k,
        )
    }

    fn humidity_af(&self, _use_condition: &Condition, _stress_condition: &Condition) -> ReliabilityResult<f64> {
        Ok(1.0)
    }
}

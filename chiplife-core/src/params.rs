//! Model Parameters and Model Selection
//!
//! [`ModelParameters`] holds the material/mechanism constants of the models;
//! [`ModelSelection`] picks which model a computation runs.
//!
//! ## Typical Values
//!
//! | Parameter | Typical range | Default |
//! |-----------|---------------|---------|
//! | Activation energy Ea | 0.4 – 1.1 eV | 0.7 eV |
//! | Humidity exponent n  | 2.0 – 4.0    | 3.0    |
//! | Boltzmann constant kB | fixed       | 8.617e-5 eV/K |
//!
//! Values outside the typical ranges are accepted as long as they are
//! positive; they are only flagged by [`ModelParameters::is_typical`].
//!
//! ```rust
//! use chiplife_core::ModelParameters;
//!
//! let params = ModelParameters::default()
//!     .with_activation_energy(0.9)
//!     .with_humidity_exponent(2.66);
//! assert!(params.is_typical());
//! ```

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::{
    physics::BOLTZMANN_CONSTANT_EV_PER_K,
    qualification::{
        DEFAULT_ACTIVATION_ENERGY_EV, DEFAULT_HUMIDITY_EXPONENT,
        ACTIVATION_ENERGY_TYPICAL_MIN_EV, ACTIVATION_ENERGY_TYPICAL_MAX_EV,
        HUMIDITY_EXPONENT_TYPICAL_MIN, HUMIDITY_EXPONENT_TYPICAL_MAX,
    },
};

/// Constants of the acceleration models
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ModelParameters {
    /// Activation energy of the failure mechanism (eV)
    pub activation_energy_ev: f64,

    /// Peck humidity exponent (dimensionless)
    pub humidity_exponent: f64,

    /// Boltzmann constant (eV/K)
    pub boltzmann_constant_ev_per_k: f64,
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            activation_energy_ev: DEFAULT_ACTIVATION_ENERGY_EV,
            humidity_exponent: DEFAULT_HUMIDITY_EXPONENT,
            boltzmann_constant_ev_per_k: BOLTZMANN_CONSTANT_EV_PER_K,
        }
    }
}

impl ModelParameters {
    /// Parameters with explicit activation energy and humidity exponent
    pub const fn new(activation_energy_ev: f64, humidity_exponent: f64) -> Self {
        Self {
            activation_energy_ev,
            humidity_exponent,
            boltzmann_constant_ev_per_k: BOLTZMANN_CONSTANT_EV_PER_K,
        }
    }

    /// Replace the activation energy
    pub const fn with_activation_energy(mut self, activation_energy_ev: f64) -> Self {
        self.activation_energy_ev = activation_energy_ev;
        self
    }

    /// Replace the humidity exponent
    pub const fn with_humidity_exponent(mut self, humidity_exponent: f64) -> Self {
        self.humidity_exponent = humidity_exponent;
        self
    }

    /// Activation energy inside 0.4 – 1.1 eV
    pub fn activation_energy_is_typical(&self) -> bool {
        (ACTIVATION_ENERGY_TYPICAL_MIN_EV..=ACTIVATION_ENERGY_TYPICAL_MAX_EV)
            .contains(&self.activation_energy_ev)
    }

    /// Humidity exponent inside 2.0 – 4.0
    pub fn humidity_exponent_is_typical(&self) -> bool {
        (HUMIDITY_EXPONENT_TYPICAL_MIN..=HUMIDITY_EXPONENT_TYPICAL_MAX)
            .contains(&self.humidity_exponent)
    }

    /// Both parameters inside their typical ranges
    pub fn is_typical(&self) -> bool {
        self.activation_energy_is_typical() && self.humidity_exponent_is_typical()
    }
}

/// Which acceleration model to evaluate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ModelSelection {
    /// Arrhenius: temperature acceleration only (HTOL)
    #[default]
    TemperatureOnly,

    /// Peck: Arrhenius times a humidity power law (HAST, THB)
    TemperatureAndHumidity,
}

impl ModelSelection {
    /// Whether the model needs relative humidity on both conditions
    pub const fn uses_humidity(self) -> bool {
        matches!(self, Self::TemperatureAndHumidity)
    }

    /// Conventional model name
    pub const fn name(self) -> &'static str {
        match self {
            Self::TemperatureOnly => "Arrhenius",
            Self::TemperatureAndHumidity => "Peck",
        }
    }
}

impl fmt::Display for ModelSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ModelSelection {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.name())
    }
}

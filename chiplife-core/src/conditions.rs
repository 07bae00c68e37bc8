//! Use and Stress Conditions
//!
//! A [`Condition`] describes the environment a package sits in: either the
//! field ("use") environment or the chamber ("stress") environment of an
//! accelerated test. Temperatures are carried in Celsius because that is how
//! test plans quote them; the models convert to Kelvin before any exponential
//! term sees them.
//!
//! ```rust
//! use chiplife_core::Condition;
//!
//! let field = Condition::new(25.0).with_humidity(50.0);
//! let hast = Condition::new(130.0).with_humidity(85.0);
//!
//! assert!((field.temperature_kelvin() - 298.15).abs() < 1e-9);
//! assert_eq!(hast.relative_humidity_pct, Some(85.0));
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::physics::CELSIUS_TO_KELVIN_OFFSET;

/// Temperature and (optional) relative humidity of an environment
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Condition {
    /// Ambient temperature in °C
    pub temperature_celsius: f64,

    /// Relative humidity in %, only required by humidity-aware models
    #[cfg_attr(feature = "serde", serde(default))]
    pub relative_humidity_pct: Option<f64>,
}

impl Condition {
    /// Typical field temperature (°C)
    pub const FIELD_TEMPERATURE_C: f64 = 25.0;

    /// Typical field relative humidity (%)
    pub const FIELD_HUMIDITY_PCT: f64 = 50.0;

    /// Temperature-only condition
    pub const fn new(temperature_celsius: f64) -> Self {
        Self {
            temperature_celsius,
            relative_humidity_pct: None,
        }
    }

    /// Attach a relative humidity in %
    pub const fn with_humidity(mut self, relative_humidity_pct: f64) -> Self {
        self.relative_humidity_pct = Some(relative_humidity_pct);
        self
    }

    /// Default field environment: 25 °C, 50 %RH
    pub const fn field() -> Self {
        Self::new(Self::FIELD_TEMPERATURE_C).with_humidity(Self::FIELD_HUMIDITY_PCT)
    }

    /// Absolute temperature in Kelvin
    ///
    /// No validation happens here; callers that feed the result into an
    /// exponent go through `models::utils::absolute_temperature`.
    pub fn temperature_kelvin(&self) -> f64 {
        self.temperature_celsius + CELSIUS_TO_KELVIN_OFFSET
    }
}

impl Default for Condition {
    fn default() -> Self {
        Self::field()
    }
}

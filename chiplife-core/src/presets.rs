//! JEDEC Stress-Test Presets
//!
//! The three stress regimes most qualification plans start from:
//!
//! | Preset | Standard | Stress | Duration | Model |
//! |--------|----------|--------|----------|-------|
//! | HTOL | JESD22-A108 | 125 °C | 1000 h | Arrhenius |
//! | HAST | JESD22-A110 | 130 °C / 85 %RH | 96 h | Peck |
//! | THB  | JESD22-A101 | 85 °C / 85 %RH | 1000 h | Peck |
//!
//! ```rust
//! use chiplife_core::presets::StressPreset;
//! use chiplife_core::{compute_reliability, Condition, ModelParameters};
//!
//! let request = StressPreset::Thb.request(Condition::field(), ModelParameters::default());
//! let report = compute_reliability(&request)?;
//! assert!(report.acceleration.humidity_af > 1.0);
//! # Ok::<(), chiplife_core::ReliabilityError>(())
//! ```

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    conditions::Condition,
    params::{ModelParameters, ModelSelection},
    reliability::ReliabilityRequest,
};

/// Standard accelerated stress test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StressPreset {
    /// High-Temperature Operating Life
    Htol,
    /// Highly Accelerated Stress Test
    Hast,
    /// Temperature-Humidity-Bias
    Thb,
}

impl StressPreset {
    /// All presets, in table order
    pub const ALL: [StressPreset; 3] = [Self::Htol, Self::Hast, Self::Thb];

    /// Chamber condition
    pub const fn stress_condition(self) -> Condition {
        match self {
            Self::Htol => Condition::new(125.0),
            Self::Hast => Condition::new(130.0).with_humidity(85.0),
            Self::Thb => Condition::new(85.0).with_humidity(85.0),
        }
    }

    /// Model conventionally applied to this test
    pub const fn model(self) -> ModelSelection {
        match self {
            Self::Htol => ModelSelection::TemperatureOnly,
            Self::Hast | Self::Thb => ModelSelection::TemperatureAndHumidity,
        }
    }

    /// Standard test duration (h)
    pub const fn duration_hours(self) -> f64 {
        match self {
            Self::Htol | Self::Thb => 1000.0,
            Self::Hast => 96.0,
        }
    }

    /// Short name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Htol => "HTOL",
            Self::Hast => "HAST",
            Self::Thb => "THB",
        }
    }

    /// Governing JEDEC document
    pub const fn standard(self) -> &'static str {
        match self {
            Self::Htol => "JESD22-A108",
            Self::Hast => "JESD22-A110",
            Self::Thb => "JESD22-A101",
        }
    }

    /// Complete request for this preset against a use condition
    pub fn request(self, use_condition: Condition, params: ModelParameters) -> ReliabilityRequest {
        ReliabilityRequest {
            use_condition,
            stress_condition: self.stress_condition(),
            model: self.model(),
            params,
            test_duration_hours: self.duration_hours(),
        }
    }
}

impl fmt::Display for StressPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! Qualification Verdicts
//!
//! Classifies an equivalent field lifetime against the two lifetime targets
//! quoted for packaged ICs:
//!
//! ```text
//!   years < 10        → BelowIndustrial
//!   10 ≤ years < 20   → MeetsIndustrialOnly
//!   years ≥ 20        → MeetsAutomotive
//! ```
//!
//! Breakpoints belong to the higher category: exactly 10.0 years meets the
//! industrial target, exactly 20.0 years meets the automotive one. The
//! verdict depends on the equivalent years and nothing else.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::qualification::{AUTOMOTIVE_YEARS, INDUSTRIAL_YEARS};

/// Outcome of comparing an equivalent lifetime to the qualification targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum QualificationVerdict {
    /// Under 10 years
    BelowIndustrial,
    /// At least 10 but under 20 years
    MeetsIndustrialOnly,
    /// 20 years or more
    MeetsAutomotive,
}

/// Classify an equivalent lifetime in years
pub fn classify(equivalent_years: f64) -> QualificationVerdict {
    if equivalent_years >= AUTOMOTIVE_YEARS {
        QualificationVerdict::MeetsAutomotive
    } else if equivalent_years >= INDUSTRIAL_YEARS {
        QualificationVerdict::MeetsIndustrialOnly
    } else {
        QualificationVerdict::BelowIndustrial
    }
}

impl QualificationVerdict {
    /// Lowest equivalent lifetime that earns this verdict (years)
    pub const fn minimum_years(self) -> f64 {
        match self {
            Self::BelowIndustrial => 0.0,
            Self::MeetsIndustrialOnly => INDUSTRIAL_YEARS,
            Self::MeetsAutomotive => AUTOMOTIVE_YEARS,
        }
    }

    /// Industrial target reached
    pub const fn meets_industrial(self) -> bool {
        matches!(self, Self::MeetsIndustrialOnly | Self::MeetsAutomotive)
    }

    /// Automotive target reached
    pub const fn meets_automotive(self) -> bool {
        matches!(self, Self::MeetsAutomotive)
    }

    /// Short label
    pub const fn label(self) -> &'static str {
        match self {
            Self::BelowIndustrial => "below industrial",
            Self::MeetsIndustrialOnly => "industrial",
            Self::MeetsAutomotive => "automotive",
        }
    }

    /// One-line advisory suitable for a result panel
    pub const fn describe(self) -> &'static str {
        match self {
            Self::BelowIndustrial =>
                "Equivalent lifetime under 10 years: extend the test or raise the stress",
            Self::MeetsIndustrialOnly =>
                "Meets the 10-year industrial target but not the 20-year automotive target",
            Self::MeetsAutomotive =>
                "Meets both the 10-year industrial and the 20-year automotive targets",
        }
    }
}

impl fmt::Display for QualificationVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for QualificationVerdict {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.label())
    }
}

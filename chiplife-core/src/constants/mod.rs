//! Constants for ChipLife Core
//!
//! Centralized, documented constants used throughout the crate. Every numeric
//! value the models depend on lives here, with its unit in the name.
//!
//! ## Organization
//!
//! - **Physics**: physical constants and unit conversions
//! - **Qualification**: lifetime breakpoints, typical parameter ranges,
//!   standard test durations
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Include units in new constant names (`_EV`, `_K`, `_PCT`, `_HOURS`)
//! 3. Reference the governing standard where one exists

/// Physical constants and unit conversions.
pub mod physics;

/// Qualification thresholds and typical model-parameter ranges.
pub mod qualification;

// Re-export commonly used constants for convenience
pub use physics::{
    BOLTZMANN_CONSTANT_EV_PER_K, CELSIUS_TO_KELVIN_OFFSET, ABSOLUTE_ZERO_CELSIUS,
    HOURS_PER_DAY, HOURS_PER_YEAR, MIN_USE_HUMIDITY_PCT,
};

pub use qualification::{
    INDUSTRIAL_YEARS, AUTOMOTIVE_YEARS,
    DEFAULT_ACTIVATION_ENERGY_EV, DEFAULT_HUMIDITY_EXPONENT,
    STANDARD_SWEEP_DURATIONS_HOURS, MAX_SWEEP_POINTS,
};

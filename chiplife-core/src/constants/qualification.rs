//! Qualification Thresholds and Model Parameter Ranges
//!
//! Lifetime targets used to classify an equivalent lifetime, the typical
//! ranges for the model parameters, and the stock test durations used when
//! comparing test plans.

// ===== LIFETIME TARGETS =====

/// Minimum equivalent lifetime for industrial-grade parts (years).
///
/// Equivalent lifetimes at or above this value meet the industrial target.
pub const INDUSTRIAL_YEARS: f64 = 10.0;

/// Minimum equivalent lifetime for automotive-grade parts (years).
///
/// Equivalent lifetimes at or above this value meet the automotive target.
pub const AUTOMOTIVE_YEARS: f64 = 20.0;

// ===== MODEL PARAMETERS =====

/// Default activation energy (eV).
///
/// Typical value quoted for HTOL and HAST when the failure mechanism is not
/// characterised.
pub const DEFAULT_ACTIVATION_ENERGY_EV: f64 = 0.7;

/// Lower edge of the typical activation energy range (eV).
pub const ACTIVATION_ENERGY_TYPICAL_MIN_EV: f64 = 0.4;

/// Upper edge of the typical activation energy range (eV).
pub const ACTIVATION_ENERGY_TYPICAL_MAX_EV: f64 = 1.1;

/// Default Peck humidity exponent (dimensionless).
pub const DEFAULT_HUMIDITY_EXPONENT: f64 = 3.0;

/// Lower edge of the typical humidity exponent range.
pub const HUMIDITY_EXPONENT_TYPICAL_MIN: f64 = 2.0;

/// Upper edge of the typical humidity exponent range.
pub const HUMIDITY_EXPONENT_TYPICAL_MAX: f64 = 4.0;

// ===== TEST PLANNING =====

/// Test durations compared when planning a qualification run (hours).
///
/// 96 h and 168 h are the HAST options, 500 h to 2000 h cover HTOL/THB.
pub const STANDARD_SWEEP_DURATIONS_HOURS: [f64; 5] = [96.0, 168.0, 500.0, 1000.0, 2000.0];

/// Maximum number of durations in a single sweep.
pub const MAX_SWEEP_POINTS: usize = 16;

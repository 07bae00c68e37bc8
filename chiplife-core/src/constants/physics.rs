//! Physical Constants for ChipLife
//!
//! Fundamental constants and unit conversions used by the acceleration models.

// ===== FUNDAMENTAL PHYSICS CONSTANTS =====

/// Boltzmann constant (eV/K).
///
/// Converts an activation energy in electron-volts into the temperature scale
/// of the Arrhenius exponent. Rounded to the four significant digits used
/// throughout JEDEC reliability literature.
///
/// Source: JEDEC JEP122, CODATA 2018 (8.617333262e-5 eV/K)
pub const BOLTZMANN_CONSTANT_EV_PER_K: f64 = 8.617e-5;

/// Offset between the Celsius and Kelvin scales (K).
///
/// `T[K] = T[°C] + 273.15`. Arrhenius exponents must only ever see Kelvin.
///
/// Source: NIST Special Publication 330 (2019)
pub const CELSIUS_TO_KELVIN_OFFSET: f64 = 273.15;

/// Absolute zero in Celsius (°C).
///
/// Any condition at or below this temperature has no valid absolute
/// temperature and is rejected.
pub const ABSOLUTE_ZERO_CELSIUS: f64 = -CELSIUS_TO_KELVIN_OFFSET;

// ===== HUMIDITY =====

/// Lowest relative humidity used as the Peck-model divisor (%).
///
/// Very dry use conditions would otherwise make the humidity ratio blow up.
/// Valid use humidities below this value are raised to it.
pub const MIN_USE_HUMIDITY_PCT: f64 = 1.0;

/// Highest meaningful relative humidity (%).
pub const MAX_HUMIDITY_PCT: f64 = 100.0;

// ===== TIME =====

/// Hours in a day.
pub const HOURS_PER_DAY: f64 = 24.0;

/// Days in a lifetime year.
///
/// Fixed 365-day year, no leap-year correction. Qualification figures are
/// quoted against this convention.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Hours in a lifetime year (8760 h).
pub const HOURS_PER_YEAR: f64 = HOURS_PER_DAY * DAYS_PER_YEAR;

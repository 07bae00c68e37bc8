//! Common Input Checks for the Acceleration Models
//!
//! ## Overview
//!
//! Shared checks used by every model so that an input is rejected the same
//! way regardless of which formula consumes it. All helpers are pure and
//! return the accepted value, so call sites read as
//! `let t_k = absolute_temperature("use_temperature_celsius", c)?;`.
//!
//! ## Rejection Rules
//!
//! - NaN or infinite: always rejected
//! - Physical constants (Ea, n, kB): must be > 0
//! - Absolute temperature: must be > 0 K after conversion
//! - Relative humidity: must lie in (0, 100]
//! - Durations: must be ≥ 0
//! - Computed factors: must be finite and > 0; a result that leaves the
//!   `f64` range is reported against the input that drove it there
//!
//! Values are never clamped here. The one intentional adjustment, raising a
//! dry use humidity to 1 %, lives in [`floor_use_humidity`] and is applied by
//! the Peck model after validation.

use crate::{
    conditions::Condition,
    constants::physics::{MAX_HUMIDITY_PCT, MIN_USE_HUMIDITY_PCT},
    errors::{ReliabilityError, ReliabilityResult},
    traits::Validatable,
};

/// Reject NaN and infinite values
pub fn check_finite(parameter: &'static str, value: f64) -> ReliabilityResult<f64> {
    if value.is_valid() {
        Ok(value)
    } else {
        Err(ReliabilityError::invalid(parameter, value, "not a finite number"))
    }
}

/// Require a finite value strictly greater than zero
pub fn check_positive(parameter: &'static str, value: f64) -> ReliabilityResult<f64> {
    check_finite(parameter, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ReliabilityError::invalid(parameter, value, "must be positive"))
    }
}

/// Require a finite value of zero or more
pub fn check_non_negative(parameter: &'static str, value: f64) -> ReliabilityResult<f64> {
    check_finite(parameter, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(ReliabilityError::invalid(parameter, value, "must not be negative"))
    }
}

/// Require a relative humidity in (0, 100] %
pub fn check_humidity(parameter: &'static str, value: f64) -> ReliabilityResult<f64> {
    check_finite(parameter, value)?;
    if value > 0.0 && value <= MAX_HUMIDITY_PCT {
        Ok(value)
    } else {
        Err(ReliabilityError::invalid(parameter, value, "relative humidity outside (0, 100] %"))
    }
}

/// Require a relative humidity in [0, 100] %, zero being allowed before flooring
pub fn check_humidity_floorable(parameter: &'static str, value: f64) -> ReliabilityResult<f64> {
    check_finite(parameter, value)?;
    if (0.0..=MAX_HUMIDITY_PCT).contains(&value) {
        Ok(value)
    } else {
        Err(ReliabilityError::invalid(parameter, value, "relative humidity outside [0, 100] %"))
    }
}

/// Convert a condition to Kelvin, rejecting anything at or below absolute zero
pub fn absolute_temperature(parameter: &'static str, condition: &Condition) -> ReliabilityResult<f64> {
    check_finite(parameter, condition.temperature_celsius)?;
    let kelvin = condition.temperature_kelvin();
    if kelvin > 0.0 {
        Ok(kelvin)
    } else {
        Err(ReliabilityError::invalid(
            parameter,
            condition.temperature_celsius,
            "absolute temperature must be above 0 K",
        ))
    }
}

/// Humidity of a condition, which must be present
pub fn required_humidity(parameter: &'static str, condition: &Condition) -> ReliabilityResult<f64> {
    condition
        .relative_humidity_pct
        .ok_or(ReliabilityError::invalid(parameter, f64::NAN, "required by the humidity model"))
}

/// Require a computed acceleration factor to be finite and strictly positive
///
/// `exp` and `pow` saturate to 0 or infinity for extreme inputs. The error
/// names `parameter` and carries `input`, the caller-supplied value that
/// pushed the factor out of range.
pub fn check_factor(parameter: &'static str, input: f64, factor: f64) -> ReliabilityResult<f64> {
    if factor.is_valid() && factor > 0.0 {
        Ok(factor)
    } else {
        Err(ReliabilityError::invalid(parameter, input, "acceleration factor outside f64 range"))
    }
}

/// Raise a use humidity to the 1 % minimum used as the Peck divisor
pub fn floor_use_humidity(relative_humidity_pct: f64) -> f64 {
    relative_humidity_pct.max(MIN_USE_HUMIDITY_PCT)
}

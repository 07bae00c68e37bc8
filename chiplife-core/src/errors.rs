//! Error Types for Reliability Computations
//!
//! ## Design Philosophy
//!
//! Every computation in this crate is a pure function of its arguments, so there
//! is exactly one way to fail: the caller handed over something that is not a
//! physically meaningful input. There is nothing to retry and nothing to recover
//! locally. The presentation layer is expected to show the message and ask for
//! corrected input.
//!
//! The error is kept small and `Copy` like the rest of the crate's value types:
//! parameter names and reasons are `&'static str`, the rejected value is inline.
//!
//! ## What Counts as Invalid Input
//!
//! - Activation energy or humidity exponent ≤ 0
//! - Boltzmann constant ≤ 0
//! - Absolute temperature ≤ 0 K after the Celsius → Kelvin conversion
//! - Negative test duration
//! - Relative humidity outside (0, 100] %
//! - Any NaN or infinite value
//!
//! Raising a valid use-condition humidity below 1 % up to the 1 % floor is a
//! modelling rule, not an error, and never shows up here.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use chiplife_core::{compute_reliability, ReliabilityError, ReliabilityRequest};
//!
//! let request = ReliabilityRequest::htol_default().with_test_duration_hours(-1.0);
//! match compute_reliability(&request) {
//!     Ok(report) => {
//!         // render report.lifetime.equivalent_years
//!         let _ = report;
//!     }
//!     Err(ReliabilityError::InvalidInput { parameter, .. }) => {
//!         // highlight the offending field and ask again
//!         assert_eq!(parameter, "test_duration_hours");
//!     }
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for reliability operations
pub type ReliabilityResult<T> = Result<T, ReliabilityError>;

/// Reliability computation errors
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ReliabilityError {
    /// An input violates a physical or domain constraint
    #[error("Invalid input: {parameter} = {value} ({reason})")]
    InvalidInput {
        /// Name of the offending parameter
        parameter: &'static str,
        /// The rejected value
        value: f64,
        /// Constraint that was violated
        reason: &'static str,
    },
}

impl ReliabilityError {
    /// Shorthand for building an [`ReliabilityError::InvalidInput`]
    pub const fn invalid(parameter: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidInput { parameter, value, reason }
    }

    /// Name of the parameter that was rejected
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidInput { parameter, .. } => parameter,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ReliabilityError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidInput { parameter, value, reason } =>
                defmt::write!(fmt, "Invalid input: {} = {} ({})", parameter, value, reason),
        }
    }
}

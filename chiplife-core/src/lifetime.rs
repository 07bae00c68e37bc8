//! Equivalent Lifetime Estimates
//!
//! ## Time Equivalence
//!
//! A test of `h` hours at an acceleration factor `AF` exercises the same
//! failure mechanism as `h × AF` hours in the field:
//!
//! ```text
//! equivalent_hours = h × AF
//! equivalent_days  = h × AF / 24
//! equivalent_years = h × AF / (24 × 365)
//! ```
//!
//! The year is a fixed 365 days (8760 h). No leap-year or calendar
//! correction is applied; lifetime targets are quoted on the same basis.
//!
//! ## Planning
//!
//! The relation runs both ways. [`required_test_hours`] answers "how long
//! must we test to demonstrate N years", and [`duration_sweep`] lays several
//! candidate durations side by side with their verdicts.
//!
//! ```rust
//! use chiplife_core::lifetime::{compute_lifetime_estimate, required_test_hours};
//! use chiplife_core::constants::AUTOMOTIVE_YEARS;
//!
//! let estimate = compute_lifetime_estimate(1000.0, 132.5)?;
//! assert!((estimate.equivalent_years - 15.13).abs() < 0.01);
//!
//! let hours = required_test_hours(AUTOMOTIVE_YEARS, 132.5)?;
//! assert!((hours - 1322.3).abs() < 0.1);
//! # Ok::<(), chiplife_core::ReliabilityError>(())
//! ```

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        physics::{HOURS_PER_DAY, HOURS_PER_YEAR},
        qualification::{MAX_SWEEP_POINTS, STANDARD_SWEEP_DURATIONS_HOURS},
    },
    errors::{ReliabilityError, ReliabilityResult},
    models::utils,
    qualification::{classify, QualificationVerdict},
};

/// Field lifetime implied by a test duration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LifetimeEstimate {
    /// Proposed test duration (h)
    pub test_duration_hours: f64,

    /// Test duration expressed in years (h / 8760)
    pub test_years: f64,

    /// Equivalent field hours (h × AF)
    pub equivalent_hours: f64,

    /// Equivalent field days
    pub equivalent_days: f64,

    /// Equivalent field years
    pub equivalent_years: f64,
}

impl LifetimeEstimate {
    /// Verdict for this lifetime
    pub fn verdict(&self) -> QualificationVerdict {
        classify(self.equivalent_years)
    }
}

/// Translate a test duration into equivalent field time
///
/// Fails with `InvalidInput` for a negative duration, a non-positive AF, or a
/// product `h × AF` too large for `f64`.
pub fn compute_lifetime_estimate(test_duration_hours: f64, total_af: f64) -> ReliabilityResult<LifetimeEstimate> {
    let hours = utils::check_non_negative("test_duration_hours", test_duration_hours)?;
    let af = utils::check_positive("total_af", total_af)?;

    let equivalent_hours = hours * af;
    if !equivalent_hours.is_finite() {
        return Err(ReliabilityError::invalid(
            "test_duration_hours",
            hours,
            "equivalent lifetime outside f64 range",
        ));
    }

    Ok(LifetimeEstimate {
        test_duration_hours: hours,
        test_years: hours / HOURS_PER_YEAR,
        equivalent_hours,
        equivalent_days: equivalent_hours / HOURS_PER_DAY,
        equivalent_years: equivalent_hours / HOURS_PER_YEAR,
    })
}

/// Test duration needed to demonstrate `target_years` at `total_af` (h)
pub fn required_test_hours(target_years: f64, total_af: f64) -> ReliabilityResult<f64> {
    let years = utils::check_non_negative("target_years", target_years)?;
    let af = utils::check_positive("total_af", total_af)?;
    let hours = years * HOURS_PER_YEAR / af;
    if hours.is_finite() {
        Ok(hours)
    } else {
        Err(ReliabilityError::invalid("target_years", years, "required duration outside f64 range"))
    }
}

/// One row of a duration comparison
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SweepPoint {
    /// Candidate test duration (h)
    pub test_duration_hours: f64,

    /// Equivalent field years at that duration
    pub equivalent_years: f64,

    /// Verdict at that duration
    pub verdict: QualificationVerdict,
}

/// Fixed-capacity list of sweep rows
pub type DurationSweep = Vec<SweepPoint, MAX_SWEEP_POINTS>;

/// Equivalent lifetime and verdict for each candidate duration, in input order
///
/// At most [`MAX_SWEEP_POINTS`] durations are accepted.
pub fn duration_sweep(durations_hours: &[f64], total_af: f64) -> ReliabilityResult<DurationSweep> {
    let mut sweep = DurationSweep::new();
    for &hours in durations_hours {
        let estimate = compute_lifetime_estimate(hours, total_af)?;
        let point = SweepPoint {
            test_duration_hours: estimate.test_duration_hours,
            equivalent_years: estimate.equivalent_years,
            verdict: estimate.verdict(),
        };
        sweep.push(point).map_err(|_| {
            ReliabilityError::invalid(
                "durations_hours",
                durations_hours.len() as f64,
                "too many durations in one sweep",
            )
        })?;
    }
    Ok(sweep)
}

/// Sweep over the standard 96 / 168 / 500 / 1000 / 2000 h durations
pub fn standard_duration_sweep(total_af: f64) -> ReliabilityResult<DurationSweep> {
    duration_sweep(&STANDARD_SWEEP_DURATIONS_HOURS, total_af)
}

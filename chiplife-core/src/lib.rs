//! Core reliability engine for ChipLife
//!
//! Computes acceleration factors and equivalent field lifetimes for IC
//! packages under accelerated stress testing, using the Arrhenius
//! (temperature) and Peck (temperature + humidity) models, and classifies
//! the result against the 10-year industrial and 20-year automotive targets.
//!
//! Key constraints:
//! - Pure functions, no I/O, no global state
//! - `no_std` capable (math through `libm`)
//! - Invalid input is always an error, never a silent default
//!
//! ## Where inputs are checked
//!
//! [`compute_reliability`] (through [`ReliabilityRequest::validate`]) is the
//! enforcing layer: it rejects Ea, n or kB ≤ 0 for every model, humidity
//! exponent included, before any factor is computed. The lower-level
//! functions in [`models`] check only what their own formula reads, so
//! `compute_acceleration` under `TemperatureOnly` never looks at `n`.
//!
//! ```no_run
//! use chiplife_core::{compute_reliability, ReliabilityRequest};
//!
//! let report = compute_reliability(&ReliabilityRequest::htol_default());
//!
//! match report {
//!     Ok(r) => {}, // render r.acceleration, r.lifetime, r.verdict
//!     Err(e) => {}, // ask the user to correct e.parameter()
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod conditions;
pub mod constants;
pub mod errors;
pub mod lifetime;
pub mod models;
pub mod params;
pub mod presets;
pub mod qualification;
pub mod reliability;
pub mod traits;

// Public API
pub use conditions::Condition;
pub use errors::{ReliabilityError, ReliabilityResult};
pub use lifetime::{compute_lifetime_estimate, LifetimeEstimate};
pub use models::{
    compute_humidity_af, compute_temperature_af, compute_total_af,
    AccelerationResult, ArrheniusModel, PeckModel,
};
pub use params::{ModelParameters, ModelSelection};
pub use qualification::{classify, QualificationVerdict};
pub use reliability::{compute_reliability, ReliabilityReport, ReliabilityRequest};
pub use traits::{AccelerationModel, Validatable};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

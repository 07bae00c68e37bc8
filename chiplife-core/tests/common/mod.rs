//! Common test fixtures for integration tests
//!
//! This module provides:
//! - Named stress scenarios with hand-checked expectations
//! - Tolerance assertion helpers

#![allow(dead_code)]

pub mod scenarios;

/// Assert two floats agree within an absolute tolerance
#[track_caller]
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}

/// Assert two floats agree within a relative tolerance
#[track_caller]
pub fn assert_rel_close(actual: f64, expected: f64, rel_tolerance: f64) {
    let scale = expected.abs().max(f64::MIN_POSITIVE);
    assert!(
        ((actual - expected) / scale).abs() <= rel_tolerance,
        "expected {expected} (rel ± {rel_tolerance}), got {actual}"
    );
}

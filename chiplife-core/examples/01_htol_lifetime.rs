//! HTOL Equivalent Lifetime Example
//!
//! The simplest use case of ChipLife: how many field years does a standard
//! 1000 h HTOL run at 125 °C represent?
//!
//! ## What You'll Learn
//!
//! - Building a request from explicit conditions and parameters
//! - Reading the acceleration factor and equivalent lifetime
//! - How strongly the result depends on activation energy
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_htol_lifetime
//! ```

use chiplife_core::{
    compute_reliability, Condition, ModelParameters, ModelSelection, ReliabilityError,
    ReliabilityRequest,
};

fn main() -> Result<(), ReliabilityError> {
    println!("ChipLife HTOL Lifetime Example");
    println!("==============================\n");

    let use_condition = Condition::new(25.0);
    let stress_condition = Condition::new(125.0);

    println!("Use: {}°C, Stress: {}°C, Duration: 1000 h\n", use_condition.temperature_celsius, stress_condition.temperature_celsius);
    println!("{:>8}  {:>10}  {:>12}  {:>10}  Verdict", "Ea (eV)", "AF", "Years", "Days");

    // Sweep the typical activation energy range
    for ea in [0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0, 1.1] {
        let request = ReliabilityRequest::new(
            use_condition,
            stress_condition,
            ModelSelection::TemperatureOnly,
            ModelParameters::default().with_activation_energy(ea),
            1000.0,
        );
        let report = compute_reliability(&request)?;

        println!(
            "{:>8.1}  {:>9.1}X  {:>12.1}  {:>10.0}  {}",
            ea,
            report.acceleration.total_af,
            report.lifetime.equivalent_years,
            report.lifetime.equivalent_days,
            report.verdict
        );
    }

    // A caller bug: negative duration is rejected, not clamped
    println!("\nRejected input:");
    let bad = ReliabilityRequest::htol_default().with_test_duration_hours(-1.0);
    match compute_reliability(&bad) {
        Ok(_) => println!("  unexpectedly accepted"),
        Err(e) => println!("  {}", e),
    }

    Ok(())
}

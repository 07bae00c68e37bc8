//! Test Duration Planning
//!
//! Given the acceleration of a stress condition, compare the standard test
//! durations and work out how long a run must be to demonstrate the
//! industrial and automotive lifetime targets.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 03_duration_planning
//! ```

use chiplife_core::{
    compute_reliability,
    constants::{AUTOMOTIVE_YEARS, INDUSTRIAL_YEARS},
    lifetime::{required_test_hours, standard_duration_sweep},
    Condition, ModelParameters, ReliabilityError, ReliabilityRequest,
};

fn main() -> Result<(), ReliabilityError> {
    println!("ChipLife Duration Planning Example");
    println!("==================================\n");

    // Hot field environment with a weakly activated mechanism
    let request = ReliabilityRequest::htol_default()
        .with_use_condition(Condition::new(55.0))
        .with_params(ModelParameters::default().with_activation_energy(0.6));
    let af = compute_reliability(&request)?.acceleration.total_af;
    println!("HTOL 125°C against 55°C use, Ea = 0.6 eV: AF = {:.1}X\n", af);

    println!("{:>8}  {:>8}  Verdict", "Hours", "Years");
    for point in &standard_duration_sweep(af)? {
        println!("{:>8.0}  {:>8.1}  {}", point.test_duration_hours, point.equivalent_years, point.verdict);
    }

    println!();
    for (label, years) in [("Industrial", INDUSTRIAL_YEARS), ("Automotive", AUTOMOTIVE_YEARS)] {
        let hours = required_test_hours(years, af)?;
        println!("{} ({} yr) needs {:.0} h of testing", label, years, hours.ceil());
    }

    Ok(())
}

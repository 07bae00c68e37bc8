//! HAST / THB with the Peck Model
//!
//! Humidity-driven mechanisms need the Peck model: an Arrhenius temperature
//! term multiplied by a power law in relative humidity.
//!
//! ## What You'll Learn
//!
//! - Using the JEDEC presets
//! - Splitting the total AF into its temperature and humidity parts
//! - Effect of the humidity exponent n
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_hast_peck
//! ```

use chiplife_core::{
    compute_reliability, presets::StressPreset, Condition, ModelParameters, ReliabilityError,
};

fn main() -> Result<(), ReliabilityError> {
    println!("ChipLife Peck Model Example");
    println!("===========================\n");

    let field = Condition::field();
    println!(
        "Field: {}°C / {}%RH\n",
        field.temperature_celsius,
        field.relative_humidity_pct.unwrap_or_default()
    );

    for preset in StressPreset::ALL {
        let report = compute_reliability(&preset.request(field, ModelParameters::default()))?;
        let stress = preset.stress_condition();

        println!("{} ({}) at {}°C, {} h:", preset, preset.standard(), stress.temperature_celsius, preset.duration_hours());
        println!("  Temperature AF: {:.2}", report.acceleration.temperature_af);
        println!("  Humidity AF:    {:.2}", report.acceleration.humidity_af);
        println!("  Total AF:       {:.2}", report.acceleration.total_af);
        println!("  Equivalent:     {:.1} years ({})", report.lifetime.equivalent_years, report.verdict.describe());
        println!();
    }

    println!("Humidity exponent sensitivity (HAST):");
    for n in [2.0, 2.5, 3.0, 3.5, 4.0] {
        let params = ModelParameters::default().with_humidity_exponent(n);
        let report = compute_reliability(&StressPreset::Hast.request(field, params))?;
        println!("  n = {:.1}: humidity AF {:>6.2}, {:>6.1} years", n, report.acceleration.humidity_af, report.lifetime.equivalent_years);
    }

    Ok(())
}

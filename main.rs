use anyhow::{Context, Result};

use check_weight_dist::{calculate_weight, render_comparison, sample_triples, DistSummary};

const NUM_SAMPLES: usize = 10_000;
// Stake passed by callers of the weight function; ignored by the
// current formula but kept in the call for interface fidelity.
const STAKE_AMOUNT: u128 = 10_000_000 * 10u128.pow(18);
const OUTPUT_FILE: &str = "weight_dist.png";

fn main() -> Result<()> {
    println!("Sampling {} triples from OS entropy...", NUM_SAMPLES);
    let triples = sample_triples(NUM_SAMPLES);

    let weights: Vec<u128> = triples
        .iter()
        .map(|t| calculate_weight(t, STAKE_AMOUNT))
        .collect();

    DistSummary::from_weights(&weights).print();

    let weights_f: Vec<f64> = weights.iter().map(|&w| w as f64).collect();
    render_comparison(&weights_f, OUTPUT_FILE)
        .context("rendering weight distribution chart")?;

    println!("\nWrote {}", OUTPUT_FILE);
    Ok(())
}

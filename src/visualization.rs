//! Histogram overlay of the weight sample against a uniform reference.

use anyhow::{bail, Context, Result};
use plotters::prelude::*;
use rand::distributions::{Distribution, Uniform};
use std::path::Path;

const NUM_BINS: usize = 30;

/// Bin a series into equal-width density bins over [min, max], so the
/// bar areas sum to one.
fn bin_densities(data: &[f64], min: f64, max: f64) -> Vec<f64> {
    let width = (max - min) / NUM_BINS as f64;
    let mut counts = vec![0usize; NUM_BINS];
    for &v in data {
        let i = (((v - min) / width) as usize).min(NUM_BINS - 1);
        counts[i] += 1;
    }
    counts
        .iter()
        .map(|&c| c as f64 / (data.len() as f64 * width))
        .collect()
}

/// Points at the bin centers, for tracing a density curve over the
/// bars.
fn density_curve(density: &[f64], min: f64, bin_width: f64) -> Vec<(f64, f64)> {
    density
        .iter()
        .enumerate()
        .map(|(i, &d)| (min + (i as f64 + 0.5) * bin_width, d))
        .collect()
}

/// Render the weight distribution next to a uniform reference.
///
/// Draws a fresh uniform sample of the same size over
/// `[min(weights), max(weights)]`, bins both series as densities, and
/// writes the overlaid histograms, each traced with a density curve
/// through its bin centers, to a PNG at `output_path`.
pub fn render_comparison<P: AsRef<Path>>(weights: &[f64], output_path: P) -> Result<()> {
    let min = weights.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = weights.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if !(min < max) {
        bail!("need at least two distinct weight values to plot");
    }

    let mut rng = rand::thread_rng();
    let uniform: Vec<f64> = Uniform::new_inclusive(min, max)
        .sample_iter(&mut rng)
        .take(weights.len())
        .collect();

    let weight_density = bin_densities(weights, min, max);
    let uniform_density = bin_densities(&uniform, min, max);

    let max_density = weight_density
        .iter()
        .chain(uniform_density.iter())
        .cloned()
        .fold(0.0, f64::max);

    let root = BitMapBackend::new(output_path.as_ref(), (1280, 720)).into_drawing_area();
    root.fill(&WHITE).context("filling chart background")?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "calculate_weight distribution vs uniform",
            ("sans-serif", 30).into_font(),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(min..max, 0.0..max_density * 1.1)
        .context("building chart axes")?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Weight value")
        .y_desc("Density")
        .draw()
        .context("drawing chart mesh")?;

    let bin_width = (max - min) / NUM_BINS as f64;
    let bars = |density: &[f64], color: RGBAColor| -> Vec<Rectangle<(f64, f64)>> {
        density
            .iter()
            .enumerate()
            .map(|(i, &d)| {
                let x0 = min + i as f64 * bin_width;
                Rectangle::new([(x0, 0.0), (x0 + bin_width, d)], color.filled())
            })
            .collect()
    };

    chart
        .draw_series(bars(&weight_density, BLUE.mix(0.5)))
        .context("drawing weight histogram")?
        .label("calculate_weight")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], BLUE.mix(0.5).filled()));

    chart
        .draw_series(bars(&uniform_density, RED.mix(0.5)))
        .context("drawing uniform histogram")?
        .label("uniform reference")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], RED.mix(0.5).filled()));

    // Trace each histogram with its density curve.
    chart
        .draw_series(LineSeries::new(
            density_curve(&weight_density, min, bin_width),
            &BLUE,
        ))
        .context("drawing weight density curve")?;
    chart
        .draw_series(LineSeries::new(
            density_curve(&uniform_density, min, bin_width),
            &RED,
        ))
        .context("drawing uniform density curve")?;

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .draw()
        .context("drawing legend")?;

    root.present().context("writing chart file")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bin_densities_sum_to_one() {
        let data: Vec<f64> = (0..1000).map(|i| i as f64).collect();
        let d = bin_densities(&data, 0.0, 999.0);
        assert_eq!(d.len(), NUM_BINS);
        let width = 999.0 / NUM_BINS as f64;
        let total: f64 = d.iter().map(|v| v * width).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_density_curve_runs_through_bin_centers() {
        let density = vec![0.1, 0.3, 0.2];
        let pts = density_curve(&density, 10.0, 2.0);
        assert_eq!(pts.len(), 3);
        assert_eq!(pts[0], (11.0, 0.1));
        assert_eq!(pts[1], (13.0, 0.3));
        assert_eq!(pts[2], (15.0, 0.2));
    }

    #[test]
    fn test_degenerate_range_is_an_error() {
        let weights = vec![1.0; 10];
        assert!(render_comparison(&weights, "/nonexistent/never_written.png").is_err());
    }
}

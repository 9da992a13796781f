//! `r` across a range of exponents at one noise level.

use anyhow::{bail, Result};
use tracing::warn;

use corrplot_core::params::{EXPONENT_MAX, EXPONENT_MIN};
use corrplot_core::{compute_correlation, generate_sample, NoiseSource};

/// Upper bound on the number of exponents in one sweep.
pub const MAX_SWEEP_POINTS: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRow {
    pub exponent: f64,
    pub correlation: f64,
}

/// Exponents `from, from + step, ...` up to and including `to`.
///
/// Bounds outside the slider range are clamped into it with a warning.
pub fn exponent_grid(from: f64, to: f64, step: f64) -> Result<Vec<f64>> {
    if !step.is_finite() || step <= 0.0 {
        bail!("sweep step must be positive, got {}", step);
    }
    if !from.is_finite() || !to.is_finite() || from > to {
        bail!("sweep range [{}, {}] is empty", from, to);
    }
    let from = clamp_bound("from", from);
    let to = clamp_bound("to", to);

    // Tolerance so that e.g. 1..10 step 0.1 keeps its last point.
    let span = (to - from) / step + 1e-9;
    if span >= MAX_SWEEP_POINTS as f64 {
        bail!(
            "sweep step {} gives more than {} exponents in [{}, {}]",
            step,
            MAX_SWEEP_POINTS,
            from,
            to
        );
    }
    let steps = span.floor() as usize;
    Ok((0..=steps).map(|k| from + k as f64 * step).collect())
}

fn clamp_bound(bound: &str, requested: f64) -> f64 {
    let used = requested.clamp(EXPONENT_MIN, EXPONENT_MAX);
    if used != requested {
        warn!(bound, requested, used, "Sweep bound out of range, clamping");
    }
    used
}

pub fn sweep<N: NoiseSource>(
    exponents: &[f64],
    noise_amplitude: f64,
    sample_count: usize,
    mut noise: N,
) -> Vec<SweepRow> {
    exponents
        .iter()
        .map(|&exponent| {
            let points = generate_sample(exponent, noise_amplitude, sample_count, &mut noise);
            SweepRow {
                exponent,
                correlation: compute_correlation(&points),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Silent;

    impl NoiseSource for Silent {
        fn next_uniform(&mut self) -> f64 {
            0.0
        }
    }

    #[test]
    fn test_grid_includes_endpoint() {
        let grid = exponent_grid(1.0, 10.0, 1.0).unwrap();
        assert_eq!(grid.len(), 10);
        assert_eq!(grid[9], 10.0);

        let fine = exponent_grid(1.0, 10.0, 0.1).unwrap();
        assert_eq!(fine.len(), 91);
    }

    #[test]
    fn test_grid_rejects_bad_ranges() {
        assert!(exponent_grid(1.0, 10.0, 0.0).is_err());
        assert!(exponent_grid(1.0, 10.0, f64::NAN).is_err());
        assert!(exponent_grid(5.0, 1.0, 1.0).is_err());
    }

    #[test]
    fn test_grid_rejects_tiny_steps() {
        assert!(exponent_grid(1.0, 10.0, 1e-300).is_err());
        assert!(exponent_grid(1.0, 10.0, 1e-9).is_err());
        assert!(exponent_grid(1.0, 10.0, f64::MIN_POSITIVE).is_err());
    }

    #[test]
    fn test_grid_clamps_bounds_to_slider_range() {
        let grid = exponent_grid(-2.0, 14.0, 4.0).unwrap();
        assert_eq!(grid, vec![1.0, 5.0, 9.0]);

        let pinned = exponent_grid(20.0, 30.0, 1.0).unwrap();
        assert_eq!(pinned, vec![10.0]);
    }

    #[test]
    fn test_noise_free_sweep_decreases() {
        let grid = exponent_grid(1.0, 10.0, 1.0).unwrap();
        let rows = sweep(&grid, 0.0, 101, Silent);
        assert!((rows[0].correlation - 1.0).abs() < 1e-9);
        assert!(rows.windows(2).all(|w| w[0].correlation > w[1].correlation));
        assert!((rows[9].correlation - 0.660_339_274_5).abs() < 1e-9);
    }
}

//! Synthetic samples of the power curve `y = x^p`.

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::noise::NoiseSource;
use crate::params::PlotParams;

/// Points per sample on the slider page.
pub const DEFAULT_SAMPLE_COUNT: usize = 101;

/// One generated observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    pub x: f64,
    /// Observed value: the curve plus noise.
    pub y: f64,
    /// The curve itself at `x`.
    pub ideal_y: f64,
}

/// `x^exponent` with IEEE `pow` semantics.
///
/// `0^p` is 0 for `p > 0`, 1 for `p == 0`, and +inf for `p < 0`.
pub fn power(x: f64, exponent: f64) -> f64 {
    libm::pow(x, exponent)
}

/// Samples `y = x^exponent` at `x_i = i / sample_count` for `i` in
/// `0..sample_count` and perturbs each `y` by `noise_amplitude * u_i`, with
/// `u_i` uniform on `[-0.5, 0.5)`.
///
/// Points come out in increasing `x`, spanning `[0, (n-1)/n]`. A
/// `sample_count` of 0 yields an empty sample. With `noise_amplitude == 0`
/// no draws are taken and every `y` equals its `ideal_y` exactly.
///
/// Args:
///     exponent: Exponent of the curve.
///     noise_amplitude: Scale of the uniform perturbation.
///     sample_count: Number of points.
///     noise: Randomness provider, one draw per point.
pub fn generate_sample<N: NoiseSource>(
    exponent: f64,
    noise_amplitude: f64,
    sample_count: usize,
    mut noise: N,
) -> Vec<Point> {
    let n = sample_count as f64;
    let noisy = noise_amplitude != 0.0;

    (0..sample_count)
        .map(|i| {
            let x = i as f64 / n;
            let ideal_y = power(x, exponent);
            let y = if noisy {
                ideal_y + noise_amplitude * noise.next_uniform()
            } else {
                ideal_y
            };
            Point { x, y, ideal_y }
        })
        .collect()
}

/// [`generate_sample`] driven by a bundled [`PlotParams`].
///
/// The parameters are used as given; clamp them first if they come from an
/// untrusted source.
pub fn generate_sample_with<N: NoiseSource>(params: &PlotParams, noise: N) -> Vec<Point> {
    generate_sample(
        params.exponent,
        params.noise_amplitude,
        params.sample_count,
        noise,
    )
}

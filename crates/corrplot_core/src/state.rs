//! Parameters in, sample and coefficient out.
//!
//! [`PlotState`] is what a front end holds between redraws: every parameter
//! change regenerates the sample and recomputes `r` before returning, so the
//! derived values are never stale.

use alloc::vec::Vec;
use core::fmt;

use crate::correlation::{compute_correlation, format_correlation};
use crate::noise::NoiseSource;
use crate::params::{clamp_exponent, clamp_noise_amplitude, PlotParams};
use crate::sample::{generate_sample_with, Point};

pub struct PlotState<N> {
    params: PlotParams,
    noise: N,
    sample: Vec<Point>,
    correlation: f64,
}

impl<N: NoiseSource> PlotState<N> {
    /// Clamps `params` and computes the first sample.
    pub fn new(params: PlotParams, noise: N) -> Self {
        let mut state = Self {
            params: params.clamped(),
            noise,
            sample: Vec::new(),
            correlation: f64::NAN,
        };
        state.recompute();
        state
    }

    pub fn params(&self) -> &PlotParams {
        &self.params
    }

    pub fn sample(&self) -> &[Point] {
        &self.sample
    }

    /// Current `r`; NaN or infinite when the sample is degenerate.
    pub fn correlation(&self) -> f64 {
        self.correlation
    }

    pub fn set_exponent(&mut self, exponent: f64) {
        self.params.exponent = clamp_exponent(exponent);
        self.recompute();
    }

    pub fn set_noise_amplitude(&mut self, noise_amplitude: f64) {
        self.params.noise_amplitude = clamp_noise_amplitude(noise_amplitude);
        self.recompute();
    }

    pub fn set_params(&mut self, params: PlotParams) {
        self.params = params.clamped();
        self.recompute();
    }

    /// Fresh noise, same parameters.
    pub fn regenerate(&mut self) {
        self.recompute();
    }

    pub fn summary(&self) -> PlotSummary {
        PlotSummary {
            exponent: self.params.exponent,
            noise_amplitude: self.params.noise_amplitude,
            correlation: self.correlation,
        }
    }

    pub fn into_noise(self) -> N {
        self.noise
    }

    fn recompute(&mut self) {
        self.sample = generate_sample_with(&self.params, &mut self.noise);
        self.correlation = compute_correlation(&self.sample);

        if self.correlation.is_finite() {
            log::debug!(
                "recomputed sample: exponent={} noise={} n={} r={}",
                self.params.exponent,
                self.params.noise_amplitude,
                self.sample.len(),
                self.correlation
            );
        } else {
            log::warn!(
                "correlation undefined for sample of {} points (exponent={}, noise={})",
                self.sample.len(),
                self.params.exponent,
                self.params.noise_amplitude
            );
        }
    }
}

/// The read-outs shown under the sliders.
///
/// `Display` renders one line per read-out:
///
/// ```text
/// Power: 2.00
/// Noise: 0.10
/// Correlation coefficient: r = 0.9672
/// Function equation: y = x^2.00
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotSummary {
    pub exponent: f64,
    pub noise_amplitude: f64,
    pub correlation: f64,
}

impl fmt::Display for PlotSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Power: {:.2}", self.exponent)?;
        writeln!(f, "Noise: {:.2}", self.noise_amplitude)?;
        writeln!(
            f,
            "Correlation coefficient: r = {}",
            format_correlation(self.correlation)
        )?;
        write!(f, "Function equation: y = x^{:.2}", self.exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::SeededNoise;
    use alloc::string::ToString;

    /// Counts draws and always returns 0.
    #[derive(Default)]
    struct Counting {
        draws: usize,
    }

    impl NoiseSource for Counting {
        fn next_uniform(&mut self) -> f64 {
            self.draws += 1;
            0.0
        }
    }

    #[test]
    fn test_new_computes_initial_sample() {
        let state = PlotState::new(PlotParams::default(), SeededNoise::from_seed(1));
        assert_eq!(state.sample().len(), 101);
        assert!(state.correlation() > 0.9 && state.correlation() < 1.0);
    }

    #[test]
    fn test_every_setter_recomputes() {
        let mut state = PlotState::new(PlotParams::new(2.0, 0.5), Counting::default());
        state.set_exponent(3.0);
        state.set_noise_amplitude(0.25);
        state.regenerate();
        assert_eq!(state.into_noise().draws, 4 * 101);
    }

    #[test]
    fn test_setters_clamp() {
        let mut state = PlotState::new(PlotParams::default(), SeededNoise::from_seed(2));
        state.set_exponent(25.0);
        state.set_noise_amplitude(-1.0);
        assert_eq!(state.params().exponent, 10.0);
        assert_eq!(state.params().noise_amplitude, 0.0);
        assert!(state.sample().iter().all(|p| p.y == p.ideal_y));
    }

    #[test]
    fn test_sample_follows_exponent() {
        let mut state = PlotState::new(PlotParams::new(1.0, 0.0), Counting::default());
        let r_linear = state.correlation();
        state.set_exponent(8.0);
        assert!((r_linear - 1.0).abs() < 1e-9);
        assert!(state.correlation() < r_linear);
        assert_eq!(state.sample()[50].ideal_y, libm::pow(50.0 / 101.0, 8.0));
    }

    #[test]
    fn test_degenerate_sample_reports_undefined() {
        let params = PlotParams::new(2.0, 0.0).with_sample_count(1);
        let state = PlotState::new(params, Counting::default());
        assert!(!state.correlation().is_finite());
        let text = state.summary().to_string();
        assert!(text.contains("r = undefined"), "{}", text);
    }

    #[test]
    fn test_summary_lines() {
        let summary = PlotSummary {
            exponent: 2.0,
            noise_amplitude: 0.1,
            correlation: 0.96719,
        };
        assert_eq!(
            summary.to_string(),
            "Power: 2.00\nNoise: 0.10\nCorrelation coefficient: r = 0.9672\nFunction equation: y = x^2.00"
        );
    }
}

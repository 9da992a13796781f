//! Slider parameters and their accepted ranges.

use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
use clap::Args;

use crate::error::{CorrplotError, Result};
use crate::sample::DEFAULT_SAMPLE_COUNT;

pub const EXPONENT_MIN: f64 = 1.0;
pub const EXPONENT_MAX: f64 = 10.0;
/// Exponent slider moves in steps of 0.1.
pub const EXPONENT_STEPS_PER_UNIT: f64 = 10.0;
pub const DEFAULT_EXPONENT: f64 = 2.0;

pub const NOISE_MIN: f64 = 0.0;
pub const NOISE_MAX: f64 = 1.0;
/// Noise slider moves in steps of 0.01.
pub const NOISE_STEPS_PER_UNIT: f64 = 100.0;
pub const DEFAULT_NOISE_AMPLITUDE: f64 = 0.1;

/// Inputs to one round of sample generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "cli", derive(Args))]
pub struct PlotParams {
    /// Exponent p of the curve y = x^p (1 to 10)
    #[cfg_attr(feature = "cli", arg(long, visible_alias = "power", default_value_t = DEFAULT_EXPONENT))]
    pub exponent: f64,

    /// Scale of the uniform noise added to each y (0 to 1)
    #[cfg_attr(feature = "cli", arg(long = "noise", default_value_t = DEFAULT_NOISE_AMPLITUDE))]
    pub noise_amplitude: f64,

    /// Number of points sampled on [0, 1)
    #[cfg_attr(feature = "cli", arg(long = "samples", default_value_t = DEFAULT_SAMPLE_COUNT))]
    pub sample_count: usize,
}

impl Default for PlotParams {
    fn default() -> Self {
        Self {
            exponent: DEFAULT_EXPONENT,
            noise_amplitude: DEFAULT_NOISE_AMPLITUDE,
            sample_count: DEFAULT_SAMPLE_COUNT,
        }
    }
}

impl PlotParams {
    pub fn new(exponent: f64, noise_amplitude: f64) -> Self {
        Self {
            exponent,
            noise_amplitude,
            sample_count: DEFAULT_SAMPLE_COUNT,
        }
    }

    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    /// Rejects values the slider page could never produce.
    ///
    /// Step alignment is not checked; only the bounds and finiteness are.
    pub fn validate(&self) -> Result<()> {
        check_range("exponent", self.exponent, EXPONENT_MIN, EXPONENT_MAX)?;
        check_range(
            "noise_amplitude",
            self.noise_amplitude,
            NOISE_MIN,
            NOISE_MAX,
        )?;
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Pulls both values into range and onto the slider grid.
    ///
    /// A NaN falls back to the default for that field.
    pub fn clamped(&self) -> Self {
        Self {
            exponent: clamp_exponent(self.exponent),
            noise_amplitude: clamp_noise_amplitude(self.noise_amplitude),
            sample_count: self.sample_count,
        }
    }
}

pub fn clamp_exponent(value: f64) -> f64 {
    snap(
        value,
        EXPONENT_MIN,
        EXPONENT_MAX,
        EXPONENT_STEPS_PER_UNIT,
        DEFAULT_EXPONENT,
    )
}

pub fn clamp_noise_amplitude(value: f64) -> f64 {
    snap(
        value,
        NOISE_MIN,
        NOISE_MAX,
        NOISE_STEPS_PER_UNIT,
        DEFAULT_NOISE_AMPLITUDE,
    )
}

fn snap(value: f64, min: f64, max: f64, steps_per_unit: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        return fallback;
    }
    // Dividing by the step count (not multiplying by the step) keeps 2.3 exact.
    let snapped = libm::round(value.clamp(min, max) * steps_per_unit) / steps_per_unit;
    snapped.clamp(min, max)
}

fn check_range(name: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(CorrplotError::OutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}

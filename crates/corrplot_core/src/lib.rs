//! Core of the corrplot visualization.
//!
//! Generates noisy samples of `y = x^p` on `[0, 1)` and measures how linear
//! they look through the Pearson correlation coefficient. A coefficient close
//! to 1 does not make the relationship linear; that contrast is what the
//! front ends display.
//!
//! The crate is `no_std` + `alloc` by default. Enable `std` for the
//! thread-local entropy source and `cli` for clap derives on [`PlotParams`].

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod correlation;
pub mod error;
pub mod noise;
pub mod params;
pub mod sample;
pub mod state;

pub use correlation::{
    checked_correlation, compute_correlation, correlation_of_series, format_correlation, Paired,
};
pub use error::{CorrplotError, Result};
pub use noise::{NoiseSource, RngNoise, SeededNoise};
pub use params::PlotParams;
pub use sample::{generate_sample, generate_sample_with, power, Point, DEFAULT_SAMPLE_COUNT};
pub use state::{PlotState, PlotSummary};

#[cfg(feature = "std")]
pub use noise::ThreadNoise;

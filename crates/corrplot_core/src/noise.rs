//! Randomness provider for the sample generator.
//!
//! The generator never reaches for an ambient RNG. Callers hand it a
//! [`NoiseSource`], which lets tests script the exact perturbations and lets
//! front ends pick between fresh entropy and a reproducible seed.

use alloc::boxed::Box;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of independent per-point noise draws.
pub trait NoiseSource {
    /// Next value, uniformly distributed over `[-0.5, 0.5)`.
    fn next_uniform(&mut self) -> f64;
}

impl<N: NoiseSource + ?Sized> NoiseSource for &mut N {
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

impl<N: NoiseSource + ?Sized> NoiseSource for Box<N> {
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

/// Adapts any `rand` generator into a [`NoiseSource`].
#[derive(Debug, Clone)]
pub struct RngNoise<R> {
    rng: R,
}

impl<R: RngCore> RngNoise<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore> NoiseSource for RngNoise<R> {
    fn next_uniform(&mut self) -> f64 {
        // gen::<f64>() is uniform over [0, 1)
        self.rng.gen::<f64>() - 0.5
    }
}

/// Reproducible noise stream (ChaCha8).
pub type SeededNoise = RngNoise<ChaCha8Rng>;

impl RngNoise<ChaCha8Rng> {
    /// Same seed, same sequence of draws, on every platform.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

/// Fresh, unseeded entropy from the calling thread's generator.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadNoise;

#[cfg(feature = "std")]
impl NoiseSource for ThreadNoise {
    fn next_uniform(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>() - 0.5
    }
}

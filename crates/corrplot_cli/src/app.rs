//! Merges command-line flags with the config file.

use clap::parser::ValueSource;
use clap::ArgMatches;
use tracing::{info, warn};

use corrplot_core::{NoiseSource, PlotParams, SeededNoise, ThreadNoise};

use crate::config::DefaultsConfig;

/// Flags given on the command line win; otherwise the config file's
/// `[defaults]` apply. The result is clamped into the slider ranges.
pub fn resolve_params(
    flags: &PlotParams,
    matches: &ArgMatches,
    defaults: &DefaultsConfig,
) -> PlotParams {
    let explicit = |id: &str| matches.value_source(id) == Some(ValueSource::CommandLine);

    let requested = PlotParams {
        exponent: if explicit("exponent") {
            flags.exponent
        } else {
            defaults.exponent
        },
        noise_amplitude: if explicit("noise_amplitude") {
            flags.noise_amplitude
        } else {
            defaults.noise_amplitude
        },
        sample_count: if explicit("sample_count") {
            flags.sample_count
        } else {
            defaults.sample_count
        },
    };

    warn_if_out_of_range(&requested);
    requested.clamped()
}

/// Logs the first parameter `params` would have clamped.
///
/// Returns whether a warning was emitted.
pub fn warn_if_out_of_range(params: &PlotParams) -> bool {
    match params.validate() {
        Ok(()) => false,
        Err(e) => {
            warn!(error = %e, "Parameter out of range, clamping");
            true
        }
    }
}

/// Seeded noise when a seed is known, fresh entropy otherwise.
pub fn noise_source(seed: Option<u64>) -> Box<dyn NoiseSource> {
    match seed {
        Some(seed) => {
            info!(seed, "Using seeded noise");
            Box::new(SeededNoise::from_seed(seed))
        }
        None => Box::new(ThreadNoise),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_is_reported() {
        assert!(!warn_if_out_of_range(&PlotParams::default()));
        assert!(warn_if_out_of_range(&PlotParams::new(50.0, 0.1)));
        assert!(warn_if_out_of_range(&PlotParams::new(2.0, -0.5)));
    }
}

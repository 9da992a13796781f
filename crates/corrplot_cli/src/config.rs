use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use corrplot_core::params::{DEFAULT_EXPONENT, DEFAULT_NOISE_AMPLITUDE};
use corrplot_core::DEFAULT_SAMPLE_COUNT;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid color {0:?}, expected #rrggbb")]
    InvalidColor(String),
}

/// Returns the ~/.corrplot directory, creating it if needed.
///
/// Falls back to a local `.corrplot` directory if the home directory cannot be
/// determined or created. The fallback is created lazily by [`Config::save`],
/// which reports its failure as a [`ConfigError::Io`].
pub fn corrplot_data_dir() -> PathBuf {
    let fallback = PathBuf::from(".corrplot");
    let Some(home) = dirs::home_dir() else {
        warn!("Could not determine home directory, falling back to local .corrplot");
        return fallback;
    };

    let path = home.join(".corrplot");
    match fs::create_dir_all(&path) {
        Ok(()) => path,
        Err(e) => {
            warn!(
                error = %e,
                path = %path.display(),
                "Could not create config directory, falling back to local .corrplot"
            );
            fallback
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub plot: PlotConfig,
}

/// Starting slider positions, used when the matching flag is absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DefaultsConfig {
    #[serde(default = "default_exponent")]
    pub exponent: f64,
    #[serde(default = "default_noise_amplitude")]
    pub noise_amplitude: f64,
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,
    /// Fixed noise seed; fresh entropy on every run when unset
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            exponent: default_exponent(),
            noise_amplitude: default_noise_amplitude(),
            sample_count: default_sample_count(),
            seed: None,
        }
    }
}

fn default_exponent() -> f64 {
    DEFAULT_EXPONENT
}
fn default_noise_amplitude() -> f64 {
    DEFAULT_NOISE_AMPLITUDE
}
fn default_sample_count() -> usize {
    DEFAULT_SAMPLE_COUNT
}

/// SVG chart settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlotConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    /// Scatter color, `#rrggbb`
    #[serde(default = "default_point_color")]
    pub point_color: String,
    /// Curve color, `#rrggbb`
    #[serde(default = "default_line_color")]
    pub line_color: String,
}

fn default_width() -> u32 {
    800
}
fn default_height() -> u32 {
    480
}
fn default_point_color() -> String {
    "#8884d8".to_string()
}
fn default_line_color() -> String {
    "#ff0000".to_string()
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            point_color: default_point_color(),
            line_color: default_line_color(),
        }
    }
}

/// Parses `#rrggbb` into its channels.
pub fn parse_hex_color(color: &str) -> Result<(u8, u8, u8), ConfigError> {
    let invalid = || ConfigError::InvalidColor(color.to_string());
    let hex = color.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }
    let channel = |at: usize| {
        let pair = &hex[at..at + 2];
        u8::from_str_radix(pair, 16).map_err(|_| invalid())
    };
    Ok((channel(0)?, channel(2)?, channel(4)?))
}

impl Config {
    pub fn get_config_path() -> PathBuf {
        let mut path = corrplot_data_dir();
        path.push("config.toml");
        path
    }

    /// Loads the config at `path` (or the default location), writing a
    /// default file first if none exists.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::get_config_path(),
        };

        if !path.exists() {
            let config = Config::default();
            config.save(&path)?;
            info!(path = %path.display(), "Wrote default config");
            return Ok(config);
        }

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config: Config = toml::from_str(&content)?;
        parse_hex_color(&config.plot.point_color)?;
        parse_hex_color(&config.plot.line_color)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let toml = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, toml).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

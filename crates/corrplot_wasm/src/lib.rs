//! WebAssembly bindings for the corrplot slider page.
//!
//! The page keeps a [`PlotSession`] alive, forwards slider events to its
//! setters and redraws from the returned arrays.

use corrplot_core::{
    correlation_of_series, format_correlation, generate_sample, CorrplotError, PlotParams,
    PlotState, SeededNoise,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn init_hooks() {
    console_error_panic_hook::set_once();
}

/// Seed drawn from `Math.random`, so every page load gets new noise.
fn entropy_seed() -> u64 {
    (js_sys::Math::random() * (1u64 << 53) as f64) as u64
}

/// JSON array of `{x, y, idealY}` objects.
#[wasm_bindgen]
pub fn generate_sample_json(
    exponent: f64,
    noise_amplitude: f64,
    sample_count: usize,
) -> Result<String, JsValue> {
    let points = generate_sample(
        exponent,
        noise_amplitude,
        sample_count,
        SeededNoise::from_seed(entropy_seed()),
    );
    serde_json::to_string(&points)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

/// Pearson `r` of two parallel arrays; NaN when undefined.
#[wasm_bindgen]
pub fn compute_correlation(xs: &[f64], ys: &[f64]) -> Result<f64, JsValue> {
    match correlation_of_series(xs, ys) {
        Ok(r) => Ok(r),
        Err(CorrplotError::DegenerateCorrelation) => Ok(f64::NAN),
        Err(e) => Err(JsValue::from_str(&e.to_string())),
    }
}

#[wasm_bindgen]
pub struct PlotSession {
    state: PlotState<SeededNoise>,
}

#[wasm_bindgen]
impl PlotSession {
    #[wasm_bindgen(constructor)]
    pub fn new(exponent: f64, noise_amplitude: f64) -> PlotSession {
        Self::with_seed(exponent, noise_amplitude, entropy_seed())
    }

    /// Reproducible session, for demos and tests.
    pub fn with_seed(exponent: f64, noise_amplitude: f64, seed: u64) -> PlotSession {
        PlotSession {
            state: PlotState::new(
                PlotParams::new(exponent, noise_amplitude),
                SeededNoise::from_seed(seed),
            ),
        }
    }

    pub fn set_exponent(&mut self, exponent: f64) {
        self.state.set_exponent(exponent);
    }

    pub fn set_noise(&mut self, noise_amplitude: f64) {
        self.state.set_noise_amplitude(noise_amplitude);
    }

    pub fn regenerate(&mut self) {
        self.state.regenerate();
    }

    #[wasm_bindgen(getter)]
    pub fn exponent(&self) -> f64 {
        self.state.params().exponent
    }

    #[wasm_bindgen(getter)]
    pub fn noise(&self) -> f64 {
        self.state.params().noise_amplitude
    }

    #[wasm_bindgen(getter)]
    pub fn correlation(&self) -> f64 {
        self.state.correlation()
    }

    /// `r` to four decimals, or `undefined`.
    pub fn correlation_text(&self) -> String {
        format_correlation(self.state.correlation())
    }

    pub fn xs(&self) -> Vec<f64> {
        self.state.sample().iter().map(|p| p.x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.state.sample().iter().map(|p| p.y).collect()
    }

    pub fn ideal_ys(&self) -> Vec<f64> {
        self.state.sample().iter().map(|p| p.ideal_y).collect()
    }

    pub fn points_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.state.sample())
            .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
    }

    /// The read-outs under the sliders, one per line.
    pub fn summary(&self) -> String {
        self.state.summary().to_string()
    }
}

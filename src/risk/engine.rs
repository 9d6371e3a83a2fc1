//! Maps one feature row to five independent bounded risk scores.

use crate::config::RiskConfig;
use crate::features::FeatureVector;
use serde::{Deserialize, Serialize};

/// One score per extreme condition, each clamped to [0, 1]. Scores are
/// evaluated independently from the same feature row; no normalization
/// across them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskScores {
    pub very_hot: f64,
    pub very_cold: f64,
    pub very_windy: f64,
    pub very_wet: f64,
    pub very_uncomfortable: f64,
}

pub struct RiskScorer {
    config: RiskConfig,
}

impl RiskScorer {
    pub fn new(config: RiskConfig) -> Self {
        Self { config }
    }

    /// Total over all real-valued inputs; never fails. Non-finite values pass
    /// through the formulas untouched.
    pub fn scores(&self, features: &FeatureVector) -> RiskScores {
        let c = &self.config;
        // Heat alone past the gate threshold, or heat and humidity together.
        let discomfort_gate = (features.temperature_c > c.gate_temperature_c
            && features.relative_humidity_pct > c.gate_humidity_pct)
            || features.heat_index_c > c.gate_heat_index_c;

        RiskScores {
            very_hot: clamp01((features.temperature_c - c.hot_onset_c) / c.ramp_width),
            very_cold: clamp01((c.cold_onset_c - features.temperature_c) / c.ramp_width),
            very_windy: clamp01((features.wind_speed_ms - c.wind_onset_ms) / c.ramp_width),
            very_wet: clamp01(features.precip_sum_3d / c.wet_saturation_mm),
            very_uncomfortable: if discomfort_gate {
                clamp01((features.heat_index_c - c.discomfort_onset_c) / c.ramp_width)
            } else {
                0.0
            },
        }
    }

    pub fn config(&self) -> &RiskConfig {
        &self.config
    }
}

fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

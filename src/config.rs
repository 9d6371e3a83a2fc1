//! Agent configuration: provider location/window, risk thresholds, logging.

use serde::{Deserialize, Serialize};

/// NASA POWER daily point endpoint.
pub const DEFAULT_POWER_BASE_URL: &str = "https://power.larc.nasa.gov/api/temporal/daily/point";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Upstream observation source
    pub provider: ProviderConfig,
    /// Risk ramp thresholds
    pub risk: RiskConfig,
    /// Logging
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// POWER daily point base URL
    pub base_url: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Trailing days of history fetched before the target date
    pub history_days: u64,
    /// HTTP request timeout (seconds)
    pub timeout_secs: u64,
    /// Poll interval for daemon mode (seconds); 0 runs a single cycle
    pub poll_interval_secs: u64,
}

/// Policy constants for the five scoring ramps. Each ramp rises linearly from
/// its onset over `ramp_width` of its own unit, then saturates at 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Temperature where very_hot starts rising (°C)
    pub hot_onset_c: f64,
    /// Temperature where very_cold starts rising, falling scale (°C)
    pub cold_onset_c: f64,
    /// Wind speed where very_windy starts rising (m/s)
    pub wind_onset_ms: f64,
    /// 3-day precipitation that saturates very_wet (mm)
    pub wet_saturation_mm: f64,
    /// Heat index where very_uncomfortable starts rising (°C)
    pub discomfort_onset_c: f64,
    /// Discomfort gate: temperature AND humidity together, or heat index alone
    pub gate_temperature_c: f64,
    pub gate_humidity_pct: f64,
    pub gate_heat_index_c: f64,
    /// Width of each linear ramp, in the ramp's own unit
    pub ramp_width: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            provider: ProviderConfig::default(),
            risk: RiskConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_POWER_BASE_URL.to_string(),
            latitude: 20.9674,
            longitude: -89.5926,
            history_days: 10,
            timeout_secs: 60,
            poll_interval_secs: 0,
        }
    }
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            hot_onset_c: 30.0,
            cold_onset_c: 5.0,
            wind_onset_ms: 5.0,
            wet_saturation_mm: 10.0,
            discomfort_onset_c: 35.0,
            gate_temperature_c: 30.0,
            gate_humidity_pct: 80.0,
            gate_heat_index_c: 40.0,
            ramp_width: 10.0,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: true,
        }
    }
}

impl AgentConfig {
    /// Load from JSON file if present; otherwise return default
    pub fn load(path: &std::path::Path) -> Self {
        if path.exists() {
            if let Ok(data) = std::fs::read_to_string(path) {
                if let Ok(c) = serde_json::from_str::<AgentConfig>(&data) {
                    return c;
                }
            }
        }
        Self::default()
    }
}

//! Upstream daily weather observations: shared record type, NASA POWER client.

mod power;

pub use power::{parse_observations, PowerClient, POWER_SENTINEL};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One calendar day of surface observations. The provider layer guarantees
/// sentinel-free values; downstream derivation does no range validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyObservation {
    pub date: NaiveDate,
    /// 2-meter air temperature (°C)
    pub temperature_c: f64,
    /// Daily precipitation (mm)
    pub precipitation_mm: f64,
    /// 2-meter wind speed (m/s)
    pub wind_speed_ms: f64,
    /// Relative humidity, 0–100 nominal
    pub relative_humidity_pct: f64,
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("upstream returned status {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Body(#[from] serde_json::Error),
    #[error("missing parameter {0} in response")]
    MissingParameter(&'static str),
    #[error("unparseable observation date: {0}")]
    Date(#[from] chrono::ParseError),
    #[error("no valid observations after sentinel filtering")]
    NoValidData,
}

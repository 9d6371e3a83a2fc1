//! Engineered features over an ordered daily observation series.

mod builder;
mod heat;

pub use builder::build_latest_features;
pub use heat::compute_heat_index;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Feature row for one calendar day. Derived fresh from the full ordered
/// series on every call; only the latest row ever leaves the module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub date: NaiveDate,
    pub temperature_c: f64,
    pub precipitation_mm: f64,
    pub wind_speed_ms: f64,
    pub relative_humidity_pct: f64,
    /// Temperature 1 and 2 days prior; same-day fallback at the series start
    pub temp_lag1_c: f64,
    pub temp_lag2_c: f64,
    /// Trailing precipitation sums; fewer terms near the series start
    pub precip_sum_3d: f64,
    pub precip_sum_7d: f64,
    pub wind_lag1_ms: f64,
    /// Cyclical day-of-year encoding, period 365.25
    pub day_of_year_sin: f64,
    pub day_of_year_cos: f64,
    pub heat_index_c: f64,
}

/// The observation series was empty. Caller-contract violation; never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot derive features from an empty observation series")]
pub struct InsufficientDataError;

//! Feature derivation: observations → stable date sort → per-day walk → latest row.

use super::{compute_heat_index, FeatureVector, InsufficientDataError};
use crate::provider::DailyObservation;
use chrono::Datelike;
use std::f64::consts::PI;

/// Period of the day-of-year encoding, leap-cycle averaged.
const DAYS_PER_YEAR: f64 = 365.25;

/// Derive the feature row for the latest-dated observation.
///
/// Input order does not matter; the series is stably sorted by date first,
/// so duplicate dates keep their input order. Numeric ranges are not
/// validated here — sentinel filtering is the provider's job.
pub fn build_latest_features(
    observations: &[DailyObservation],
) -> Result<FeatureVector, InsufficientDataError> {
    build_feature_series(observations)?
        .pop()
        .ok_or(InsufficientDataError)
}

/// Full per-day derivation pass. Internal only: callers get the latest row,
/// which leaves this free to become a streaming accumulator later.
fn build_feature_series(
    observations: &[DailyObservation],
) -> Result<Vec<FeatureVector>, InsufficientDataError> {
    if observations.is_empty() {
        return Err(InsufficientDataError);
    }
    let mut sorted: Vec<&DailyObservation> = observations.iter().collect();
    sorted.sort_by_key(|obs| obs.date);

    Ok((0..sorted.len()).map(|i| feature_row(&sorted, i)).collect())
}

fn feature_row(sorted: &[&DailyObservation], i: usize) -> FeatureVector {
    let current = sorted[i];

    // Lags fall back to the current day where no prior data exists.
    let temp_lag1_c = if i > 0 { sorted[i - 1].temperature_c } else { current.temperature_c };
    let temp_lag2_c = if i > 1 { sorted[i - 2].temperature_c } else { current.temperature_c };
    let wind_lag1_ms = if i > 0 { sorted[i - 1].wind_speed_ms } else { current.wind_speed_ms };

    let day_of_year = f64::from(current.date.ordinal());
    let angle = 2.0 * PI * day_of_year / DAYS_PER_YEAR;

    FeatureVector {
        date: current.date,
        temperature_c: current.temperature_c,
        precipitation_mm: current.precipitation_mm,
        wind_speed_ms: current.wind_speed_ms,
        relative_humidity_pct: current.relative_humidity_pct,
        temp_lag1_c,
        temp_lag2_c,
        precip_sum_3d: trailing_precip_sum(sorted, i, 3),
        precip_sum_7d: trailing_precip_sum(sorted, i, 7),
        wind_lag1_ms,
        day_of_year_sin: angle.sin(),
        day_of_year_cos: angle.cos(),
        heat_index_c: compute_heat_index(current.temperature_c, current.relative_humidity_pct),
    }
}

/// Precipitation over the current day plus up to `window - 1` preceding days;
/// the window shrinks at the start of the series.
fn trailing_precip_sum(sorted: &[&DailyObservation], i: usize, window: usize) -> f64 {
    let start = (i + 1).saturating_sub(window);
    sorted[start..=i].iter().map(|obs| obs.precipitation_mm).sum()
}

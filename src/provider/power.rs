//! NASA POWER daily point client: fetch, shape check, sentinel filtering.

use super::{DailyObservation, ProviderError};
use crate::config::ProviderConfig;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{info, warn};

/// POWER marks missing data with this value; such days are dropped whole.
pub const POWER_SENTINEL: f64 = -999.0;

const POWER_PARAMETERS: &str = "T2M,PRECTOTCORR,WS2M,RH2M";
const POWER_COMMUNITY: &str = "ag";
const POWER_DATE_FORMAT: &str = "%Y%m%d";

#[derive(Deserialize)]
struct PowerResponse {
    properties: PowerProperties,
}

#[derive(Deserialize)]
struct PowerProperties {
    parameter: BTreeMap<String, BTreeMap<String, f64>>,
}

pub struct PowerClient {
    config: ProviderConfig,
    client: reqwest::blocking::Client,
}

impl PowerClient {
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(5))
            .build()?;
        Ok(Self { config, client })
    }

    /// Fetch daily observations for the configured point over `[start, end]`.
    pub fn fetch_daily(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyObservation>, ProviderError> {
        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("start", start.format(POWER_DATE_FORMAT).to_string()),
                ("end", end.format(POWER_DATE_FORMAT).to_string()),
                ("latitude", self.config.latitude.to_string()),
                ("longitude", self.config.longitude.to_string()),
                ("parameters", POWER_PARAMETERS.to_string()),
                ("community", POWER_COMMUNITY.to_string()),
                ("format", "JSON".to_string()),
            ])
            .send()?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            warn!(status, "POWER request rejected");
            return Err(ProviderError::Status(status));
        }

        let body = response.text()?;
        let observations = parse_observations(&body)?;
        info!(count = observations.len(), "fetched POWER observations");
        Ok(observations)
    }
}

/// Parse a POWER JSON body into sentinel-free observations.
/// A day missing any parameter, or carrying a -999 value in any, is dropped whole.
pub fn parse_observations(body: &str) -> Result<Vec<DailyObservation>, ProviderError> {
    let response: PowerResponse = serde_json::from_str(body)?;
    let parameter = &response.properties.parameter;

    let temperature = parameter
        .get("T2M")
        .ok_or(ProviderError::MissingParameter("T2M"))?;
    // Newer POWER responses carry the bias-corrected precipitation series.
    let precipitation = parameter
        .get("PRECTOTCORR")
        .or_else(|| parameter.get("PRECTOT"))
        .ok_or(ProviderError::MissingParameter("PRECTOTCORR"))?;
    let wind = parameter
        .get("WS2M")
        .ok_or(ProviderError::MissingParameter("WS2M"))?;
    let humidity = parameter
        .get("RH2M")
        .ok_or(ProviderError::MissingParameter("RH2M"))?;

    let mut observations = Vec::new();
    for (key, &temperature_c) in temperature {
        let (Some(&precipitation_mm), Some(&wind_speed_ms), Some(&relative_humidity_pct)) =
            (precipitation.get(key), wind.get(key), humidity.get(key))
        else {
            continue;
        };
        if [temperature_c, precipitation_mm, wind_speed_ms, relative_humidity_pct]
            .iter()
            .any(|value| *value == POWER_SENTINEL)
        {
            continue;
        }
        observations.push(DailyObservation {
            date: NaiveDate::parse_from_str(key, POWER_DATE_FORMAT)?,
            temperature_c,
            precipitation_mm,
            wind_speed_ms,
            relative_humidity_pct,
        });
    }

    if observations.is_empty() {
        return Err(ProviderError::NoValidData);
    }
    Ok(observations)
}

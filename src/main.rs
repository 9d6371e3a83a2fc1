//! wxrisk agent entrypoint: fetch a trailing window of POWER observations,
//! derive the latest feature row, score extreme-condition risks, and emit a
//! JSON conditions report. Runs a single cycle or a daemon loop with
//! configurable interval.

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use std::time::Duration;
use tracing::info;
use wxrisk_agent::{
    config::AgentConfig,
    features::{build_latest_features, FeatureVector},
    logging::StructuredLogger,
    provider::PowerClient,
    risk::{RiskScorer, RiskScores},
};

#[derive(Serialize)]
struct ReportLocation {
    latitude: f64,
    longitude: f64,
}

#[derive(Serialize)]
struct CurrentConditions {
    temperature_c: f64,
    precipitation_mm: f64,
    wind_speed_ms: f64,
    relative_humidity_pct: f64,
    heat_index_c: f64,
}

/// Downstream consumers render scores as percentages; raw [0, 1] here.
#[derive(Serialize)]
struct ConditionsReport {
    date: NaiveDate,
    location: ReportLocation,
    current_conditions: CurrentConditions,
    predictions: RiskScores,
}

fn build_report(config: &AgentConfig, features: &FeatureVector, predictions: RiskScores) -> ConditionsReport {
    ConditionsReport {
        date: features.date,
        location: ReportLocation {
            latitude: config.provider.latitude,
            longitude: config.provider.longitude,
        },
        current_conditions: CurrentConditions {
            temperature_c: features.temperature_c,
            precipitation_mm: features.precipitation_mm,
            wind_speed_ms: features.wind_speed_ms,
            relative_humidity_pct: features.relative_humidity_pct,
            heat_index_c: features.heat_index_c,
        },
        predictions,
    }
}

fn run_one_cycle(
    config: &AgentConfig,
    client: &PowerClient,
    scorer: &RiskScorer,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let end = Utc::now().date_naive();
    let start = end - chrono::Duration::days(config.provider.history_days as i64);

    let observations = client.fetch_daily(start, end)?;
    let features = build_latest_features(&observations)?;
    let scores = scorer.scores(&features);

    info!(
        date = %features.date,
        very_hot = scores.very_hot,
        very_cold = scores.very_cold,
        very_windy = scores.very_windy,
        very_wet = scores.very_wet,
        very_uncomfortable = scores.very_uncomfortable,
        "scored extreme conditions"
    );

    let report = build_report(config, &features, scores);
    StructuredLogger::emit_json(&report, &mut std::io::stdout().lock());

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config_path = std::env::var("WXRISK_CONFIG_PATH")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| std::path::PathBuf::from("config.json"));
    let config = AgentConfig::load(&config_path);

    StructuredLogger::init(config.log.json, &config.log.level);

    info!(
        latitude = config.provider.latitude,
        longitude = config.provider.longitude,
        "wxrisk agent starting"
    );

    let client = PowerClient::new(config.provider.clone())?;
    let scorer = RiskScorer::new(config.risk.clone());

    let interval_secs = config.provider.poll_interval_secs;
    let run_daemon = interval_secs > 0;

    if run_daemon {
        info!(interval_secs, "daemon mode (Ctrl+C to stop)");
        static STOP: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
        let _ = ctrlc::set_handler(|| {
            STOP.store(true, std::sync::atomic::Ordering::Relaxed);
        });
        let mut cycle: u64 = 0;
        while !STOP.load(std::sync::atomic::Ordering::Relaxed) {
            cycle += 1;
            if let Err(e) = run_one_cycle(&config, &client, &scorer) {
                tracing::warn!(cycle, error = %e, "cycle failed");
            }
            for _ in 0..(interval_secs as u32) {
                if STOP.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                std::thread::sleep(Duration::from_secs(1));
            }
        }
        info!("wxrisk agent stopping");
    } else {
        run_one_cycle(&config, &client, &scorer)?;
        info!("wxrisk agent cycle complete");
    }

    Ok(())
}

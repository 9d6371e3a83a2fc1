//! Pipeline benchmark: observation series → feature derivation → risk scores.

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::f64::consts::TAU;
use wxrisk_agent::config::RiskConfig;
use wxrisk_agent::features::build_latest_features;
use wxrisk_agent::provider::DailyObservation;
use wxrisk_agent::risk::RiskScorer;

fn make_series(days: usize) -> Vec<DailyObservation> {
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    (0..days)
        .map(|i| {
            let phase = i as f64 / 365.25 * TAU;
            DailyObservation {
                date: start + chrono::Duration::days(i as i64),
                temperature_c: 22.0 + 8.0 * phase.sin(),
                precipitation_mm: (5.0 * phase.cos()).max(0.0),
                wind_speed_ms: 4.0 + 2.0 * (phase * 3.0).sin(),
                relative_humidity_pct: 65.0 + 15.0 * phase.cos(),
            }
        })
        .collect()
}

fn bench_feature_build(c: &mut Criterion) {
    let series = make_series(365);

    c.bench_function("feature_build_365_days", |b| {
        b.iter(|| build_latest_features(black_box(&series)))
    });
}

fn bench_risk_scoring(c: &mut Criterion) {
    let series = make_series(365);
    let features = build_latest_features(&series).unwrap();
    let scorer = RiskScorer::new(RiskConfig::default());

    c.bench_function("risk_scoring", |b| {
        b.iter(|| scorer.scores(black_box(&features)))
    });
}

fn bench_full_pipeline(c: &mut Criterion) {
    let series = make_series(365);
    let scorer = RiskScorer::new(RiskConfig::default());

    c.bench_function("full_pipeline_series_to_scores", |b| {
        b.iter(|| {
            let features = build_latest_features(black_box(&series)).unwrap();
            black_box(scorer.scores(&features))
        })
    });
}

criterion_group!(
    benches,
    bench_feature_build,
    bench_risk_scoring,
    bench_full_pipeline
);
criterion_main!(benches);

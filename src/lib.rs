//! wxrisk agent — extreme-weather risk scoring over NASA POWER daily data.
//!
//! Modular structure:
//! - [`provider`] — NASA POWER daily-point client and observation records
//! - [`features`] — Lag, rolling-sum, and cyclical feature derivation
//! - [`risk`] — Piecewise-linear extreme-condition risk scoring
//! - [`logging`] — Structured JSON logging

pub mod config;
pub mod provider;
pub mod features;
pub mod risk;
pub mod logging;

pub use config::AgentConfig;
pub use provider::{DailyObservation, PowerClient, ProviderError};
pub use features::{build_latest_features, compute_heat_index, FeatureVector, InsufficientDataError};
pub use risk::{RiskScorer, RiskScores};
pub use logging::StructuredLogger;

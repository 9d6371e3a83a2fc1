//! Piecewise-linear extreme-condition risk scoring.

mod engine;

pub use engine::{RiskScorer, RiskScores};

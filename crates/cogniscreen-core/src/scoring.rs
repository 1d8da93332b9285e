//! Risk scoring.
//!
//! The overall score is the unweighted mean of whichever scored metrics are
//! present (memory accuracy, attention accuracy, reaction score); the risk
//! tier is a fixed three-band classification of that score. This is a
//! screening heuristic, not a fitted model.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::assessment::AssessmentResults;

/// Scores at or above this are Low risk.
pub const LOW_RISK_FLOOR: f64 = 75.0;
/// Scores at or above this (and below [`LOW_RISK_FLOOR`]) are Moderate risk.
pub const MODERATE_RISK_FLOOR: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => f.write_str("Low"),
            RiskLevel::Moderate => f.write_str("Moderate"),
            RiskLevel::High => f.write_str("High"),
        }
    }
}

/// The metrics that feed the overall score, with their field names for error
/// reporting. Counts and timings are informational and never appear here.
fn scored_metrics(results: &AssessmentResults) -> Vec<(&'static str, f64)> {
    let mut metrics = Vec::new();
    if let Some(memory) = &results.memory
        && let Some(accuracy) = memory.accuracy
    {
        metrics.push(("memory.accuracy", accuracy));
    }
    if let Some(attention) = &results.attention
        && let Some(accuracy) = attention.accuracy
    {
        metrics.push(("attention.accuracy", accuracy));
    }
    if let Some(reaction) = &results.reaction
        && let Some(score) = reaction.score
    {
        metrics.push(("reaction.score", score));
    }
    metrics
}

/// Unweighted mean of the present scored metrics; `0.0` when none are present.
pub fn overall_score(results: &AssessmentResults) -> f64 {
    let metrics = scored_metrics(results);
    if metrics.is_empty() {
        return 0.0;
    }
    metrics.iter().map(|(_, value)| value).sum::<f64>() / metrics.len() as f64
}

/// Boundary values belong to the higher band: exactly 75 is Low, exactly 50
/// is Moderate.
pub fn classify(overall: f64) -> RiskLevel {
    if overall >= LOW_RISK_FLOOR {
        RiskLevel::Low
    } else if overall >= MODERATE_RISK_FLOOR {
        RiskLevel::Moderate
    } else {
        RiskLevel::High
    }
}

/// Reject any scored metric outside 0-100. Invalid input is refused rather
/// than clamped, so an impossible accuracy can never produce a plausible
/// score.
pub fn validate(results: &AssessmentResults) -> Result<(), CoreError> {
    for (field, value) in scored_metrics(results) {
        if !(0.0..=100.0).contains(&value) {
            return Err(CoreError::MetricOutOfRange { field, value });
        }
    }
    Ok(())
}

/// Validate, score and classify in one step.
pub fn evaluate(results: &AssessmentResults) -> Result<(f64, RiskLevel), CoreError> {
    validate(results)?;
    let overall = overall_score(results);
    Ok((overall, classify(overall)))
}

//! Scoring Engine
//!
//! Orchestration: aggregate the factors, classify the score, assemble the
//! result. Stateless and deterministic - these are the only entry points.

use serde_json::{Map, Value};

use super::aggregator::{calculate_risk, factors_from_record};
use super::classifier::{classify, describe};
use super::error::ScoringError;
use super::types::{RiskFactors, ScoringResult};

/// Score typed risk factors.
///
/// Infallible: absent factors already carry their defaults.
pub fn score(factors: &RiskFactors) -> ScoringResult {
    let risk = calculate_risk(factors);
    let status = classify(risk);
    let message = describe(risk, status);

    ScoringResult {
        risk_score: risk,
        status,
        message,
    }
}

/// Score a loosely-typed input record.
///
/// Coercion of present values is the only fallible step; the error
/// propagates untouched.
pub fn score_record(record: &Map<String, Value>) -> Result<ScoringResult, ScoringError> {
    let factors = factors_from_record(record)?;
    Ok(score(&factors))
}

// ============================================================================
// TESTS
// ============================================================================

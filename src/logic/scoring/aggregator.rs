//! Risk Aggregator
//!
//! Extracts the recognized risk factors from an input record and
//! aggregates them into a single risk score.
//! Input: record or RiskFactors. Output: risk score (f64).

use serde_json::{Map, Value};

use super::error::ScoringError;
use super::types::RiskFactors;

/// Record key for the activity factor
pub const ACTIVITY_SCORE_KEY: &str = "activity_score";

/// Record key for the suspicion factor
pub const SUSPICION_LEVEL_KEY: &str = "suspicion_level";

// ============================================================================
// RECORD EXTRACTION
// ============================================================================

/// Extract risk factors from a loosely-typed record.
///
/// Only the two recognized keys are consulted; everything else is ignored.
/// A missing key leaves the factor absent. A present value that cannot be
/// coerced to a number is an error.
pub fn factors_from_record(record: &Map<String, Value>) -> Result<RiskFactors, ScoringError> {
    Ok(RiskFactors {
        activity_score: coerce_field(record, ACTIVITY_SCORE_KEY)?,
        suspicion_level: coerce_field(record, SUSPICION_LEVEL_KEY)?,
    })
}

/// Coerce one record value to f64.
///
/// Numbers convert directly, strings are parsed, bools map to 1.0/0.0.
/// Null, arrays and objects are malformed, not missing.
fn coerce_field(record: &Map<String, Value>, key: &str) -> Result<Option<f64>, ScoringError> {
    let value = match record.get(key) {
        Some(v) => v,
        None => return Ok(None),
    };

    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };

    match number {
        Some(n) => Ok(Some(n)),
        None => Err(ScoringError::TypeConversion {
            field: key.to_string(),
            value: value.to_string(),
        }),
    }
}

// ============================================================================
// AGGREGATION
// ============================================================================

/// Aggregate the factors into one risk score.
///
/// Unweighted arithmetic mean of the two factors; an absent factor counts
/// as 0.0. No clamping: out-of-range inputs produce out-of-range scores.
pub fn calculate_risk(factors: &RiskFactors) -> f64 {
    let activity = factors.activity_score.unwrap_or(0.0);
    let suspicion = factors.suspicion_level.unwrap_or(0.0);

    (activity + suspicion) / 2.0
}

// ============================================================================
// TESTS
// ============================================================================

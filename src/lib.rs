//! Sentinelle Core - Risk Scoring Engine
//!
//! Aggregates named risk factors into a single risk score and classifies
//! it into NORMAL / MINOR_WARNING / CRITICAL_ALERT via fixed thresholds.

pub mod constants;
pub mod logic;

// Re-export the scoring surface at the crate root
pub use logic::scoring::{
    score, score_record,
    RiskFactors, RiskStatus, ScoringResult, ScoringError,
    CRITICAL_THRESHOLD, WARNING_THRESHOLD,
};

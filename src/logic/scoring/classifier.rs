//! Threshold Classifier
//!
//! Maps an aggregated risk score onto a status level.
//! Classify logic only - the thresholds live in `rules`.

use super::rules::{CRITICAL_THRESHOLD, WARNING_THRESHOLD};
use super::types::RiskStatus;

// ============================================================================
// CLASSIFICATION
// ============================================================================

/// Classify a risk score against the fixed thresholds.
///
/// Evaluated high-to-low; a score exactly on a threshold belongs to the
/// higher-severity bucket. Total over the whole f64 line: +inf classifies
/// as CriticalAlert, -inf as Normal, and NaN fails both ordered
/// comparisons and falls through to Normal.
pub fn classify(risk: f64) -> RiskStatus {
    if risk >= CRITICAL_THRESHOLD {
        RiskStatus::CriticalAlert
    } else if risk >= WARNING_THRESHOLD {
        RiskStatus::MinorWarning
    } else {
        RiskStatus::Normal
    }
}

/// Format the status message for a classified score.
///
/// The score renders at two decimal places in every branch.
pub fn describe(risk: f64, status: RiskStatus) -> String {
    match status {
        RiskStatus::CriticalAlert => format!(
            "Risk score ({:.2}) exceeds critical threshold ({}).",
            risk, CRITICAL_THRESHOLD
        ),
        RiskStatus::MinorWarning => {
            format!("Risk score ({:.2}) indicates potential issue.", risk)
        }
        RiskStatus::Normal => format!("Risk score ({:.2}) is low.", risk),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_at_warning_threshold() {
        assert_eq!(classify(0.5), RiskStatus::MinorWarning);
        assert_eq!(classify(0.49), RiskStatus::Normal);
    }

    #[test]
    fn test_boundary_at_critical_threshold() {
        assert_eq!(classify(0.85), RiskStatus::CriticalAlert);
        assert_eq!(classify(0.84), RiskStatus::MinorWarning);
    }

    #[test]
    fn test_classification_is_idempotent() {
        let first = classify(0.65);
        assert_eq!(classify(0.65), first);
        assert_eq!(first, RiskStatus::MinorWarning);
    }

    #[test]
    fn test_out_of_range_scores_still_classify() {
        assert_eq!(classify(-0.3), RiskStatus::Normal);
        assert_eq!(classify(1.7), RiskStatus::CriticalAlert);
    }

    #[test]
    fn test_non_finite_scores_have_a_bucket() {
        assert_eq!(classify(f64::INFINITY), RiskStatus::CriticalAlert);
        assert_eq!(classify(f64::NEG_INFINITY), RiskStatus::Normal);
        assert_eq!(classify(f64::NAN), RiskStatus::Normal);
    }

    #[test]
    fn test_messages_embed_score_and_context() {
        assert_eq!(
            describe(0.925, RiskStatus::CriticalAlert),
            "Risk score (0.93) exceeds critical threshold (0.85)."
        );
        assert_eq!(
            describe(0.65, RiskStatus::MinorWarning),
            "Risk score (0.65) indicates potential issue."
        );
        assert_eq!(
            describe(0.25, RiskStatus::Normal),
            "Risk score (0.25) is low."
        );
    }
}

//! Scoring Types
//!
//! Core types for the scoring engine.
//! Data structures only - no scoring logic here.

use serde::{Deserialize, Serialize};

// ============================================================================
// RISK STATUS
// ============================================================================

/// Risk status levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskStatus {
    /// Normal activity, no action needed
    Normal,
    /// Potential issue, worth monitoring
    MinorWarning,
    /// Dangerous, needs action now
    CriticalAlert,
}

impl RiskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskStatus::Normal => "NORMAL",
            RiskStatus::MinorWarning => "MINOR_WARNING",
            RiskStatus::CriticalAlert => "CRITICAL_ALERT",
        }
    }

    pub fn severity_level(&self) -> u8 {
        match self {
            RiskStatus::Normal => 0,
            RiskStatus::MinorWarning => 1,
            RiskStatus::CriticalAlert => 2,
        }
    }
}

impl std::fmt::Display for RiskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// RISK FACTORS (input record)
// ============================================================================

/// Named risk factors for one evaluation
///
/// An absent factor counts as 0.0 during aggregation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskFactors {
    /// Observed activity intensity (nominally 0.0 - 1.0)
    pub activity_score: Option<f64>,
    /// Suspicion level from upstream analysis (nominally 0.0 - 1.0)
    pub suspicion_level: Option<f64>,
}

impl RiskFactors {
    /// Create factors with both fields present
    pub fn new(activity_score: f64, suspicion_level: f64) -> Self {
        Self {
            activity_score: Some(activity_score),
            suspicion_level: Some(suspicion_level),
        }
    }

    /// Set the activity score
    pub fn with_activity_score(mut self, value: f64) -> Self {
        self.activity_score = Some(value);
        self
    }

    /// Set the suspicion level
    pub fn with_suspicion_level(mut self, value: f64) -> Self {
        self.suspicion_level = Some(value);
        self
    }
}

// ============================================================================
// SCORING RESULT
// ============================================================================

/// Result of one scoring call
///
/// Built once per call, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    /// Aggregated risk score (nominally 0.0 - 1.0, not clamped)
    pub risk_score: f64,
    /// Business decision derived from the score
    pub status: RiskStatus,
    /// Human-readable description with score and threshold context
    pub message: String,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factors_builder() {
        let factors = RiskFactors::default()
            .with_activity_score(0.4)
            .with_suspicion_level(0.8);

        assert_eq!(factors.activity_score, Some(0.4));
        assert_eq!(factors.suspicion_level, Some(0.8));
    }

    #[test]
    fn test_factors_default_is_absent() {
        let factors = RiskFactors::default();
        assert_eq!(factors.activity_score, None);
        assert_eq!(factors.suspicion_level, None);
    }

    #[test]
    fn test_status_wire_form() {
        let json = serde_json::to_string(&RiskStatus::MinorWarning).unwrap();
        assert_eq!(json, "\"MINOR_WARNING\"");

        assert_eq!(RiskStatus::Normal.as_str(), "NORMAL");
        assert_eq!(RiskStatus::CriticalAlert.to_string(), "CRITICAL_ALERT");
    }

    #[test]
    fn test_severity_ordering() {
        assert_eq!(RiskStatus::Normal.severity_level(), 0);
        assert!(
            RiskStatus::CriticalAlert.severity_level()
                > RiskStatus::MinorWarning.severity_level()
        );
    }
}

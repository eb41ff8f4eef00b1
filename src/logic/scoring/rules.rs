//! Scoring Rules & Thresholds
//!
//! Fixed thresholds for status classification.
//! No classify logic here - constants only.

// ============================================================================
// THRESHOLDS (constants - fixed, no runtime adjustment)
// ============================================================================

/// At or above this score = CRITICAL_ALERT
pub const CRITICAL_THRESHOLD: f64 = 0.85;

/// At or above this score (and below critical) = MINOR_WARNING
pub const WARNING_THRESHOLD: f64 = 0.5;

//! Error handling

use thiserror::Error;

/// Errors raised by the scoring engine
///
/// Missing record keys are tolerated (they default); a present value that
/// cannot be coerced to a number is the only failure mode.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    /// A present input value could not be coerced to a number
    #[error("cannot convert value {value} for key '{field}' to a number")]
    TypeConversion { field: String, value: String },
}

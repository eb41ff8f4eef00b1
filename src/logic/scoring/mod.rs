//! Scoring Module
//!
//! Aggregates named risk factors into one risk score and classifies it
//! against fixed thresholds. This is the CORE STEP - where
//! NORMAL/MINOR_WARNING/CRITICAL_ALERT is decided.
//!
//! ## Structure
//! - `types`: Core types (RiskStatus, RiskFactors, ScoringResult)
//! - `rules`: Fixed thresholds
//! - `error`: ScoringError
//! - `aggregator`: Factor extraction and aggregation
//! - `classifier`: Threshold classification
//! - `engine`: Orchestration entry points
//!
//! ## Usage
//! ```
//! use sentinelle_core::logic::scoring::{score, RiskFactors, RiskStatus};
//!
//! let result = score(&RiskFactors::new(0.9, 0.95));
//! match result.status {
//!     RiskStatus::Normal => println!("Safe"),
//!     RiskStatus::MinorWarning => println!("Monitor"),
//!     RiskStatus::CriticalAlert => println!("Action needed"),
//! }
//! ```

pub mod types;
pub mod rules;
pub mod error;
pub mod aggregator;
pub mod classifier;
pub mod engine;

// Re-export main types for convenience
pub use types::{
    RiskStatus,
    RiskFactors,
    ScoringResult,
};

pub use rules::{
    CRITICAL_THRESHOLD,
    WARNING_THRESHOLD,
};

pub use error::ScoringError;

pub use aggregator::{calculate_risk, factors_from_record};
pub use classifier::{classify, describe};
pub use engine::{score, score_record};

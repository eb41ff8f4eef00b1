//! Logic Module - Scoring Engine
//!
//! One engine: `scoring/` - risk aggregation followed by threshold
//! classification.

pub mod scoring;

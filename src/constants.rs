//! Central Configuration Constants
//!
//! Single source of truth for crate identity.

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Sentinelle";

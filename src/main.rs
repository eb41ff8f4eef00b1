//! Sentinelle Core - Demo Entry Point

use sentinelle_core::constants::{APP_NAME, APP_VERSION};
use sentinelle_core::{score, RiskFactors};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    log::info!("Starting {} scoring engine v{}...", APP_NAME, APP_VERSION);

    let critical_case = RiskFactors::new(0.9, 0.95);
    let result = score(&critical_case);

    log::info!("{}", result.message);
    println!(
        "Scoring Result: {} (Score: {:.2})",
        result.status, result.risk_score
    );
}

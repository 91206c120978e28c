#![doc(test(attr(deny(warnings))))]

//! Atelier Core tracks a handmade-garment seller's catalog, sales, and
//! operating expenses, and derives the revenue, cost, and profit figures
//! shown by the interactive CLI.

pub mod auth;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod reports;
pub mod storage;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        init_tracing();
        tracing::info!("Atelier Core tracing initialized.");
    });
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::from_default_env().add_directive("atelier_core=info".parse().unwrap());

    fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}

//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! vCOW claims test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for accounts, networks, tokens and claims
//! - `builders`: Builder patterns for test data construction
//! - `assertions`: Custom assertion helpers for claims
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;

/// Installs a test subscriber so `tracing` output shows up with `--nocapture`
///
/// Safe to call from every test; only the first call installs it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

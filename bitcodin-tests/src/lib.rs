//! Bitcodin integration-test suite
//!
//! Shared pieces of the test binaries under `tests/`:
//! - Configuration: API credentials, endpoints and S3 settings from the environment
//! - Fixture: resources created before a test and always deleted after it
//! - Scenarios: the test cases themselves, runnable against the live API or a mock
//!
//! The live tests are ignored by default. Run them with
//! `cargo test -p bitcodin-tests --test live -- --ignored` once `BITCODIN_API_KEY` is set.

pub mod config;
pub mod fixture;
pub mod scenarios;

pub use config::{S3Settings, TestConfig};
pub use fixture::{Cleanup, Fixture, FixtureOptions, run_with_cleanup};

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging for a test binary
///
/// Safe to call from every test; only the first call installs the subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bitcodin_tests=info,bitcodin_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

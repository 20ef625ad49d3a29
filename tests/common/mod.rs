//! Common test infrastructure for bgtone integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod fixtures;
pub mod harness;
pub mod sink;
pub mod source;

pub use harness::{dispatcher, dispatcher_with_timeout, resolver, wait_for_phase};
pub use sink::RecordingSink;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install a log subscriber once per test binary. Set RUST_LOG to override.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bgtone=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer().without_time())
        .try_init();
}

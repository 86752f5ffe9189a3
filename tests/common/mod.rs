//! Test tracing setup.
//!
//! ```rust,ignore
//! mod common;
//!
//! #[test]
//! fn my_test() {
//!     common::init_tracing();
//! }
//! ```
//!
//! Environment variables:
//! - `RUST_LOG`: filter directives, e.g. `locked_avl=trace`
//! - `AVL_LOG_CONSOLE`: set to "0" to disable console output
//!
//! Library events are only emitted when built with `--features tracing`.

#![allow(dead_code)]

use std::env;
use std::sync::Once;

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

static INIT: Once = Once::new();

/// Installs the subscriber once per test binary. Safe to call from every test.
pub fn init_tracing() {
    INIT.call_once(setup_tracing);
}

fn make_filter(default_level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(format!("{default_level}")))
}

fn setup_tracing() {
    let console_enabled = !env::var("AVL_LOG_CONSOLE").is_ok_and(|v| v == "0");

    let console_layer = if console_enabled {
        Some(
            tracing_subscriber::fmt::layer()
                .with_test_writer()
                .with_thread_ids(true)
                .with_target(true)
                .compact()
                .with_filter(make_filter(Level::INFO)),
        )
    } else {
        None
    };

    // try_init: another test binary setup may already have installed one
    let _ = Registry::default().with(console_layer).try_init();
}

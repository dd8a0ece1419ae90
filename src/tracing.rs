//! Tracing utilities for the library

// Re-export the external tracing crate
pub use ::tracing::*;

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set
const DEFAULT_FILTER: &str = "mysql_teardown=debug,mysql_async=info";

/// Initialize tracing for the application.
/// Only initializes if RUST_ENV is set to "DEBUG"
pub fn init_tracing() {
    if let Ok(env) = std::env::var("RUST_ENV") {
        if env == "DEBUG" {
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
            // A subscriber may already be installed by the host runner
            let _ = ::tracing_subscriber::fmt().with_env_filter(filter).try_init();
        }
    }
}

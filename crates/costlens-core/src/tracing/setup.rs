//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the filter directives.
pub const LOG_ENV_VAR: &str = "COSTLENS_LOG";

/// Filter used when `COSTLENS_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "costlens=info";

/// Initialize the costlens tracing/logging system.
///
/// Reads `COSTLENS_LOG` for per-subsystem log levels, e.g.
/// `COSTLENS_LOG=costlens_analysis::significance=debug,costlens_analysis::history=trace`.
///
/// Falls back to `costlens=info` if `COSTLENS_LOG` is not set or is invalid.
/// Calling it more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // A host may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}

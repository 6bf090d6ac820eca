//! Structured logging.
//!
//! # Responsibilities
//! - Initialize logging subsystem
//! - Configure log level from the environment, with a crate default
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - `RUST_LOG` wins over the default directive
//! - Initialization is idempotent so tests and tools can call it freely

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_DIRECTIVE: &str = "route_localization=info";

/// Install the global subscriber.
///
/// `level` overrides the crate's default level (e.g. "debug"). Returns false
/// if a subscriber was already installed.
pub fn init_logging(level: Option<&str>) -> bool {
    let default_directive = match level {
        Some(level) => format!("route_localization={}", level),
        None => DEFAULT_DIRECTIVE.to_string(),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .is_ok()
}

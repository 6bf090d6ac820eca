//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing / translation produce:
//!     → tracing events (lookups at debug, committed translations at info,
//!       replaced translations at warn)
//!
//! Consumers:
//!     → logging.rs subscriber (stderr, filtered by RUST_LOG)
//! ```
//!
//! # Design Decisions
//! - The library only emits events; installing a subscriber is the host's call
//! - Route ids and cultures are structured fields, not interpolated text

pub mod logging;

pub use logging::init_logging;

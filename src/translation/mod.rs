//! Route translation subsystem.
//!
//! # Data Flow
//! ```text
//! RouteTranslator::add_translation(url)
//!     → table index lookup (first untranslated route)
//!     → engine.rs: culture check
//!     → policy.rs: first translation of a plain route converts it into a root
//!     → engine.rs: compose URL, check placeholders (placeholders.rs)
//!     → engine.rs: replace root in place, insert child after root family
//! ```
//!
//! # Design Decisions
//! - Validation completes before the table is written; failures leave it untouched
//! - Root conversion happens once per route and keeps its `RouteId`
//! - Children point back to their root by id

pub mod engine;
pub mod error;
pub mod placeholders;
pub mod policy;

pub use engine::{compose_url, join_segments, normalize_url, RoutePrefixes, TranslationEngine};
pub use error::{TranslationError, TranslationResult};
pub use placeholders::{extract_placeholders, validate_placeholders};
pub use policy::{convert_root, RootConversion};

//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → LocalizationConfig (validated, immutable)
//!     → borrowed by every RouteTranslator
//!
//! route manifest (TOML)
//!     → loader.rs
//!     → validation.rs
//!     → RouteManifest (routes + translations for the CLI)
//! ```
//!
//! # Design Decisions
//! - Config is read-only while translations run
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_manifest, ConfigError};
pub use schema::LocalizationConfig;
pub use schema::RootTranslationProcessing;
pub use schema::{RouteConfig, RouteManifest, TranslationConfig};
pub use validation::ValidationError;

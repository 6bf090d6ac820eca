//! Localized route tables.
//!
//! Derives per-culture variants of existing routes, links them to their
//! originating root route and keeps the table ordered so request dispatch and
//! URL generation resolve the right culture.

pub mod config;
pub mod controller;
pub mod manifest;
pub mod observability;
pub mod routing;
pub mod translation;
pub mod translator;

pub use config::{LocalizationConfig, RootTranslationProcessing};
pub use controller::{Controller, ControllerAttribute};
pub use routing::{Route, RouteId, RouteTable};
pub use translation::{TranslationError, TranslationResult};
pub use translator::{RouteTranslator, TypedRouteTranslator};

//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Startup configuration
//!     → table.rs (ordered routes, name map)
//!     → matcher.rs (controller/action/namespace/signature/culture conditions)
//!     → Return: first untranslated route or None
//!
//! Translation (see crate::translation):
//!     root entry replaced in place
//!     → translated entries inserted after the root
//!     → table handed to request dispatch
//! ```
//!
//! # Design Decisions
//! - Routes are identified by `RouteId`; back-references never own
//! - Deterministic: same table and query always select the same route
//! - First match wins (table order)

pub mod matcher;
pub mod route;
pub mod table;

pub use route::{Route, RouteId, Translation};
pub use table::{RouteEntry, RouteTable, TableError};

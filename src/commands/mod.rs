//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `catalog.rs` — list/show/query/categories (read-only, no network).
//! - `fetch.rs` — the image batch (default command).
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod catalog;
pub mod fetch;

pub use catalog::handle_catalog_commands;
pub use fetch::handle_fetch;

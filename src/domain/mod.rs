//! Shared data model layer (structs/enums only).
//!
//! ## Files
//! - `models.rs` — status records, categories, search plan types and
//!   fetch reports.
//!
//! ## Rule of thumb
//! Domain types are data-only: no filesystem/network side effects.
//!
//! ## Compatibility note
//! These structs define the `--json` output of every command and the shape
//! of the image mapping file read at render time.

pub mod models;

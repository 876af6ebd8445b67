//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `photos.rs` — photo search/download client behind the `ImageSearch` seam.
//! - `resolver.rs` — three-tier search plan (contextual → message → generic).
//! - `materializer.rs` — placeholder mapping and live download batch.
//! - `storage.rs` — image file naming/writes and mapping file persistence.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Network access only happens through `ImageSearch`.
//! - Per-entry failures are reported, never propagated.
//! - Keep command handlers thin; delegate to services.

pub mod materializer;
pub mod output;
pub mod photos;
pub mod resolver;
pub mod storage;

#[cfg(test)]
pub(crate) mod testing;

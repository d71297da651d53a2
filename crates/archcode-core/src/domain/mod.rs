//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! platform or probe implementation. All operations here are total
//! functions; the only "failure" concept is the strict decode error.

mod arch;

// Re-export architecture types at the domain level for convenience
pub use arch::{ArchCode, UnknownArchCode};

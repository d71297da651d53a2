//! Port definitions (trait abstractions) for external collaborators.
//!
//! Ports define the interfaces the core domain expects from adapters.
//! They contain no implementation details and use only domain types.

pub mod arch_probe;

pub use arch_probe::ArchProbePort;

#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod detector;
pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use detector::ArchDetector;
pub use domain::{ArchCode, UnknownArchCode};
pub use ports::ArchProbePort;

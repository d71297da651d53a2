#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unsafe_code)]

pub mod probe;

// Re-export the probe and the zero-argument detection entry points
pub use probe::{BuildTargetProbe, arch_code, arch_name};

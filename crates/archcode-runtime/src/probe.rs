//! Build-target probe implementation.
//!
//! This module provides the runtime side of the `ArchProbePort` contract:
//! the raw architecture code is answered from compiler-provided target
//! constants, the Rust equivalent of a native probe shim built with
//! per-architecture preprocessor guards.

use std::sync::Arc;

use archcode_core::{ArchCode, ArchDetector, ArchProbePort};
use tracing::debug;

/// Probe backed by compile-time target facts.
///
/// Reports the architecture the binary was compiled for, which for this
/// crate's purposes is the architecture the process runs as. The answer is
/// fixed at build time, so the probe has no state and no failure path.
pub struct BuildTargetProbe;

impl BuildTargetProbe {
    /// Create a new build-target probe.
    pub fn new() -> Self {
        Self
    }
}

impl Default for BuildTargetProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl ArchProbePort for BuildTargetProbe {
    fn arch_code(&self) -> i32 {
        // Compile-time target facts: exactly one arm survives per target.
        if cfg!(target_arch = "x86_64") {
            ArchCode::X86_64.code()
        } else if cfg!(target_arch = "x86") {
            ArchCode::X86.code()
        } else if cfg!(target_arch = "arm") {
            ArchCode::Arm.code()
        } else if cfg!(target_arch = "aarch64") {
            ArchCode::Arm64.code()
        } else {
            ArchCode::Unknown.code()
        }
    }
}

/// The architecture code the running process was built for.
///
/// Zero-argument form wired to [`BuildTargetProbe`]; total and idempotent.
#[must_use]
pub fn arch_code() -> ArchCode {
    let detector = ArchDetector::new(Arc::new(BuildTargetProbe::new()));
    let code = detector.arch_code();
    debug!(
        code = code.code(),
        arch = %code.name(),
        "Detected build-target architecture"
    );
    code
}

/// The architecture display name the running process was built for.
///
/// One of `"x86_64"`, `"x86"`, `"ARM"`, `"ARM64"`, or
/// `"Unknown Architecture"`.
#[must_use]
pub fn arch_name() -> &'static str {
    arch_code().name()
}

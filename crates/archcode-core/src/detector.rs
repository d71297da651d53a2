//! Architecture detection service.
//!
//! Composes an [`ArchProbePort`] with the pure [`ArchCode`] mapping. The
//! detector is stateless apart from the injected probe: both queries are
//! total, synchronous, and safe to call from any thread.

use std::sync::Arc;

use crate::domain::ArchCode;
use crate::ports::ArchProbePort;

/// Detects the architecture the running process was built for.
///
/// The probe supplies the raw code; the detector owns the mapping to
/// [`ArchCode`] and its display name. Construct it over the adapter of
/// your choice (e.g., archcode-runtime's build-target probe, or a fixed
/// probe in tests).
pub struct ArchDetector {
    /// Probe supplying the raw architecture code.
    probe: Arc<dyn ArchProbePort>,
}

impl ArchDetector {
    /// Create a detector over the given probe.
    pub fn new(probe: Arc<dyn ArchProbePort>) -> Self {
        Self { probe }
    }

    /// The architecture code for the running process.
    ///
    /// Queries the probe once and maps the raw integer through
    /// [`ArchCode::from_code`]; an out-of-range probe value degrades to
    /// [`ArchCode::Unknown`] rather than failing.
    #[must_use]
    pub fn arch_code(&self) -> ArchCode {
        let raw = self.probe.arch_code();
        let code = ArchCode::from_code(raw);
        if code == ArchCode::Unknown && raw != ArchCode::Unknown.code() {
            tracing::debug!(
                code = raw,
                "Probe reported an unrecognized architecture code, mapping to Unknown"
            );
        }
        code
    }

    /// The architecture display name for the running process.
    ///
    /// One of `"x86_64"`, `"x86"`, `"ARM"`, `"ARM64"`, or
    /// `"Unknown Architecture"`; never empty.
    #[must_use]
    pub fn arch_name(&self) -> &'static str {
        self.arch_code().name()
    }
}

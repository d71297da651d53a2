//! Architecture probe port.
//!
//! This port abstracts the platform-specific mechanism that yields the raw
//! architecture code. Implementations live in adapters (e.g.,
//! archcode-runtime's build-target probe).
//!
//! # Design Notes
//!
//! - Core owns the trait and the [`ArchCode`](crate::domain::ArchCode)
//!   mapping (pure)
//! - Adapters own the probing mechanism (compiler constants, a native
//!   shim, a test fixture)
//! - Probes report the raw `i32`, not the enum: an out-of-range value must
//!   be representable so the mapping can degrade it to `Unknown`

/// Port for obtaining the raw architecture code.
///
/// The contract mirrors a native probe routine: zero inputs, no failure
/// path, no blocking. Implementations must always return a value; they are
/// not required to stay within the defined code range, since unrecognized
/// codes are handled downstream by [`ArchCode::from_code`].
///
/// [`ArchCode::from_code`]: crate::domain::ArchCode::from_code
///
/// # Example
///
/// ```
/// use archcode_core::{ArchCode, ArchProbePort};
///
/// struct Fixed(i32);
///
/// impl ArchProbePort for Fixed {
///     fn arch_code(&self) -> i32 {
///         self.0
///     }
/// }
///
/// fn describe(probe: &dyn ArchProbePort) -> &'static str {
///     ArchCode::from_code(probe.arch_code()).name()
/// }
///
/// assert_eq!(describe(&Fixed(1)), "x86_64");
/// assert_eq!(describe(&Fixed(99)), "Unknown Architecture");
/// ```
pub trait ArchProbePort: Send + Sync {
    /// The raw architecture code for the running process.
    ///
    /// Expected to be constant for the life of the process.
    fn arch_code(&self) -> i32;
}

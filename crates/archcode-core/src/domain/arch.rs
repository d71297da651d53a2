//! Architecture codes and their display names.
//!
//! The numeric side of the contract comes from the probe: probes report a
//! plain `i32`, and the five defined codes are pinned here as explicit
//! discriminants so they stay stable across refactors. Everything in this
//! module is a total function over that integer space.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// CPU instruction-set family reported by an architecture probe.
///
/// The discriminants are the raw codes of the probe contract and are part
/// of the public API; `Unknown` doubles as the sink for any code outside
/// the defined range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i32)]
pub enum ArchCode {
    /// Target could not be classified, or the probe reported an
    /// out-of-range code.
    Unknown = 0,
    /// 64-bit x86 (AMD64).
    X86_64 = 1,
    /// 32-bit x86 (i386/i686).
    X86 = 2,
    /// 32-bit ARM.
    Arm = 3,
    /// 64-bit ARM (AArch64).
    Arm64 = 4,
}

impl ArchCode {
    /// Map a raw probe code into an `ArchCode`.
    ///
    /// Total over all of `i32`: the five defined codes map to their
    /// variants, anything else degrades to [`ArchCode::Unknown`].
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            1 => Self::X86_64,
            2 => Self::X86,
            3 => Self::Arm,
            4 => Self::Arm64,
            _ => Self::Unknown,
        }
    }

    /// The raw integer code for this architecture.
    #[must_use]
    pub const fn code(&self) -> i32 {
        *self as i32
    }

    /// The display name for this architecture.
    ///
    /// Never empty; `Unknown` renders as `"Unknown Architecture"`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown Architecture",
            Self::X86_64 => "x86_64",
            Self::X86 => "x86",
            Self::Arm => "ARM",
            Self::Arm64 => "ARM64",
        }
    }
}

impl std::fmt::Display for ArchCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned by the strict [`TryFrom<i32>`] decode.
///
/// The total mapping ([`ArchCode::from_code`]) never fails; this exists for
/// callers that want an out-of-range probe value surfaced instead of
/// silently degraded to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unrecognized architecture code {0}")]
pub struct UnknownArchCode(pub i32);

impl TryFrom<i32> for ArchCode {
    type Error = UnknownArchCode;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match Self::from_code(code) {
            // 0 is the one code that legitimately decodes to Unknown
            Self::Unknown if code != Self::Unknown.code() => Err(UnknownArchCode(code)),
            arch => Ok(arch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defined_codes_map_to_exact_names() {
        assert_eq!(ArchCode::Unknown.name(), "Unknown Architecture");
        assert_eq!(ArchCode::X86_64.name(), "x86_64");
        assert_eq!(ArchCode::X86.name(), "x86");
        assert_eq!(ArchCode::Arm.name(), "ARM");
        assert_eq!(ArchCode::Arm64.name(), "ARM64");
    }

    #[test]
    fn test_discriminants_match_the_probe_contract() {
        assert_eq!(ArchCode::Unknown.code(), 0);
        assert_eq!(ArchCode::X86_64.code(), 1);
        assert_eq!(ArchCode::X86.code(), 2);
        assert_eq!(ArchCode::Arm.code(), 3);
        assert_eq!(ArchCode::Arm64.code(), 4);
    }

    #[test]
    fn test_from_code_round_trips_every_variant() {
        for arch in [
            ArchCode::Unknown,
            ArchCode::X86_64,
            ArchCode::X86,
            ArchCode::Arm,
            ArchCode::Arm64,
        ] {
            assert_eq!(ArchCode::from_code(arch.code()), arch);
        }
    }

    #[test]
    fn test_from_code_degrades_out_of_range_to_unknown() {
        for code in [5, 99, -1, i32::MIN, i32::MAX] {
            assert_eq!(ArchCode::from_code(code), ArchCode::Unknown);
            assert_eq!(ArchCode::from_code(code).name(), "Unknown Architecture");
        }
    }

    #[test]
    fn test_name_is_never_empty() {
        for code in -64..=64 {
            assert!(!ArchCode::from_code(code).name().is_empty());
        }
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(ArchCode::X86_64.to_string(), "x86_64");
        assert_eq!(ArchCode::Unknown.to_string(), "Unknown Architecture");
    }

    #[test]
    fn test_strict_decode_accepts_defined_codes() {
        assert_eq!(ArchCode::try_from(0), Ok(ArchCode::Unknown));
        assert_eq!(ArchCode::try_from(4), Ok(ArchCode::Arm64));
    }

    #[test]
    fn test_strict_decode_surfaces_out_of_range_codes() {
        assert_eq!(ArchCode::try_from(99), Err(UnknownArchCode(99)));
        let err = ArchCode::try_from(-7).unwrap_err();
        assert_eq!(err.0, -7);
        assert!(err.to_string().contains("-7"));
    }

    #[test]
    fn test_serde_uses_lowercase_variant_names() {
        let json = serde_json::to_string(&ArchCode::Arm64).expect("serialize");
        assert_eq!(json, "\"arm64\"");
        let back: ArchCode = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, ArchCode::Arm64);
    }
}

//! End-to-end tests for architecture detection over the default wiring.
//!
//! These run against whatever target the test binary was compiled for, so
//! most assertions are phrased as contract properties; the exact-name
//! checks are gated on the corresponding `target_arch`.

use std::sync::Arc;

use archcode_core::{ArchCode, ArchDetector};
use archcode_runtime::{BuildTargetProbe, arch_code, arch_name};

#[test]
fn test_detected_name_is_one_of_the_known_strings() {
    let name = arch_name();
    assert!(
        ["x86_64", "x86", "ARM", "ARM64", "Unknown Architecture"].contains(&name),
        "unexpected architecture name: {name}"
    );
}

#[test]
#[cfg(any(
    target_arch = "x86_64",
    target_arch = "x86",
    target_arch = "arm",
    target_arch = "aarch64"
))]
fn test_supported_targets_never_report_unknown() {
    assert_ne!(arch_name(), "Unknown Architecture");
    assert_ne!(arch_code(), ArchCode::Unknown);
}

#[test]
fn test_free_functions_agree_with_explicit_wiring() {
    let detector = ArchDetector::new(Arc::new(BuildTargetProbe::new()));
    assert_eq!(detector.arch_code(), arch_code());
    assert_eq!(detector.arch_name(), arch_name());
}

#[test]
fn test_code_and_name_stay_consistent() {
    let code = arch_code();
    assert_eq!(ArchCode::from_code(code.code()), code);
    assert_eq!(arch_name(), code.name());
}

#[test]
fn test_repeated_detection_is_stable() {
    let first = (arch_code(), arch_name());
    for _ in 0..8 {
        assert_eq!((arch_code(), arch_name()), first);
    }
}

//! Tests for the launch branch logic
//!
//! Exercises `AddressLauncher` against the recording fake, covering the
//! preferred/generic fallback and both failure paths.

use proptest::prelude::*;

use crate::core::error::{BridgeError, LaunchError};
use crate::launcher::{AddressLauncher, ProviderId, RecordingLauncher};

fn preferred() -> ProviderId {
    ProviderId::default()
}

#[test]
fn test_preferred_provider_resolvable_launches_it() {
    let recorder = RecordingLauncher::new().with_resolvable(preferred());
    let launcher = AddressLauncher::new(&recorder, preferred());

    launcher.open_map(Some("1600 Amphitheatre Pkwy")).unwrap();

    let calls = recorder.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].provider.as_ref(), Some(&preferred()));
    assert_eq!(calls[0].uri, "geo:0,0?q=1600%20Amphitheatre%20Pkwy");
}

#[test]
fn test_unresolvable_preferred_falls_back_to_generic() {
    let recorder = RecordingLauncher::new();
    let launcher = AddressLauncher::new(&recorder, preferred());

    launcher.open_map(Some("221B Baker Street")).unwrap();

    let calls = recorder.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].provider.is_none());
}

#[test]
fn test_preferred_launch_failure_surfaces() {
    let recorder = RecordingLauncher::new()
        .with_resolvable(preferred())
        .with_launch_failure("activity launch rejected");
    let launcher = AddressLauncher::new(&recorder, preferred());

    let err = launcher.open_map(Some("somewhere")).unwrap_err();
    assert!(matches!(err, BridgeError::Launch(_)));
    assert!(err.detail().unwrap().contains("activity launch rejected"));
    assert_eq!(recorder.launch_count(), 1);
}

#[test]
fn test_generic_launch_failure_surfaces_symmetrically() {
    // The fallback step is checked the same way as the preferred step.
    let recorder =
        RecordingLauncher::new().with_launch_failure("No Activity found to handle Intent");
    let launcher = AddressLauncher::new(&recorder, preferred());

    let err = launcher.open_map(Some("somewhere")).unwrap_err();
    assert!(matches!(err, BridgeError::Launch(_)));
    assert!(err
        .detail()
        .unwrap()
        .contains("No Activity found to handle Intent"));
    assert_eq!(recorder.launch_count(), 1);
}

#[test]
fn test_absent_address_launches_nothing() {
    let recorder = RecordingLauncher::new().with_resolvable(preferred());
    let launcher = AddressLauncher::new(&recorder, preferred());

    let err = launcher.open_map(None).unwrap_err();
    assert!(matches!(err, BridgeError::InvalidArgument));
    assert_eq!(recorder.launch_count(), 0);
}

#[test]
fn test_blank_address_launches_nothing() {
    let recorder = RecordingLauncher::new().with_resolvable(preferred());
    let launcher = AddressLauncher::new(&recorder, preferred());

    for address in ["", "   ", "\t\n"] {
        let err = launcher.open_map(Some(address)).unwrap_err();
        assert!(matches!(err, BridgeError::InvalidArgument));
    }
    assert_eq!(recorder.launch_count(), 0);
}

#[test]
fn test_fallback_disabled_reports_no_handler() {
    let recorder = RecordingLauncher::new();
    let config = crate::config::BridgeConfig {
        preferred_provider: preferred(),
        fallback_to_any: false,
    };
    let launcher = AddressLauncher::with_config(&recorder, &config);

    let err = launcher.open_map(Some("somewhere")).unwrap_err();
    assert!(matches!(
        err,
        BridgeError::Launch(LaunchError::NoHandler { .. })
    ));
    assert_eq!(recorder.launch_count(), 0);
}

proptest! {
    /// Exactly one launch call happens for any non-blank address, whether
    /// or not the preferred provider resolves.
    #[test]
    fn exactly_one_launch_per_valid_address(
        address in "[ -~]{1,60}",
        preferred_installed in any::<bool>(),
    ) {
        prop_assume!(!address.trim().is_empty());

        let mut recorder = RecordingLauncher::new();
        if preferred_installed {
            recorder = recorder.with_resolvable(preferred());
        }
        let launcher = AddressLauncher::new(&recorder, preferred());

        launcher.open_map(Some(address.as_str())).unwrap();

        let calls = recorder.calls();
        prop_assert_eq!(calls.len(), 1);
        prop_assert_eq!(calls[0].provider.is_some(), preferred_installed);
    }
}

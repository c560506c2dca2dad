use super::*;

#[test]
fn measures_straight_segments() {
    let a = PathArtifact::new("M0 0 L300 400 L300 1000").unwrap();
    let len = a.length().unwrap();
    assert!((len - 1100.0).abs() < 1e-6, "got {len}");
    assert_eq!(a.command_count(), 3);
}

#[test]
fn unparseable_data_is_kept_verbatim_without_length() {
    let a = PathArtifact::new("M10 10 L20").unwrap();
    assert_eq!(a.d(), "M10 10 L20");
    assert!(a.length().is_none());
}

#[test]
fn empty_data_is_a_synthesis_failure() {
    let err = PathArtifact::new("   ").unwrap_err();
    assert!(matches!(err, StudioError::Synthesis(_)));
}

#[test]
fn fingerprint_ignores_surrounding_whitespace() {
    let a = PathArtifact::new("M0 0 L1 1").unwrap();
    let b = PathArtifact::new("  M0 0 L1 1\n").unwrap();
    assert_eq!(a.fingerprint(), b.fingerprint());
    assert_eq!(a, b);
}

#[test]
fn curves_measure_longer_than_their_chord() {
    let a = PathArtifact::new("M0 500 C250 0 750 1000 1000 500").unwrap();
    assert!(a.length().unwrap() > 1000.0);
}

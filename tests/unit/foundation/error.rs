use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        StudioError::transport("x")
            .to_string()
            .contains("transport failure:")
    );
    assert!(
        StudioError::synthesis("x")
            .to_string()
            .contains("synthesis failure:")
    );
    assert!(
        StudioError::capture_denied("x")
            .to_string()
            .contains("capture denied:")
    );
    assert!(
        StudioError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        StudioError::export("x")
            .to_string()
            .contains("export error:")
    );
}

#[test]
fn user_messages_match_notification_kinds() {
    assert_eq!(
        StudioError::synthesis("empty").user_message(),
        "Path generation failed. Try a different complexity."
    );
    assert_eq!(
        StudioError::transport("503").user_message(),
        "AI Processing error. Try again."
    );
    assert_eq!(
        StudioError::capture_denied("camera").user_message(),
        "Camera access denied."
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = StudioError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

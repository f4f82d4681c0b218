use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        TraceError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        TraceError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(
        TraceError::from(PlaybackMisuse::EmptyTrace)
            .to_string()
            .contains("playback error:")
    );
}

#[test]
fn misuse_is_recoverable_from_error() {
    let err = TraceError::from(PlaybackMisuse::SteppingWhilePlaying);
    assert_eq!(err.misuse(), Some(PlaybackMisuse::SteppingWhilePlaying));
    assert_eq!(TraceError::validation("x").misuse(), None);
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = TraceError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

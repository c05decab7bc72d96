use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SlidecastError::validation("x")
            .to_string()
            .contains("invalid scene:")
    );
    assert!(
        SlidecastError::probe("x")
            .to_string()
            .contains("probe failure:")
    );
    assert!(
        SlidecastError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn encoder_error_reports_status_and_output() {
    let err = SlidecastError::Encoder {
        status: Some(1),
        output: "  Invalid filtergraph\n".to_owned(),
    };
    let msg = err.to_string();
    assert!(msg.contains("status 1"));
    assert!(msg.contains("Invalid filtergraph"));
    assert_eq!(err.diagnostic_output(), Some("  Invalid filtergraph\n"));

    let killed = SlidecastError::Encoder {
        status: None,
        output: String::new(),
    };
    assert!(killed.to_string().contains("status signal"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SlidecastError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
    assert!(err.diagnostic_output().is_none());
}

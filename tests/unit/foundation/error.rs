use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        JoineryError::duplicate_key(&'a')
            .to_string()
            .contains("duplicate scene key:")
    );
    assert!(
        JoineryError::unknown_key(&7u32)
            .to_string()
            .contains("unknown scene key:")
    );
    assert!(
        JoineryError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        JoineryError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn key_errors_render_the_key_with_debug() {
    let err = JoineryError::duplicate_key(&"node-3");
    assert_eq!(err.to_string(), "duplicate scene key: \"node-3\"");
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = JoineryError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PagecraftError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        PagecraftError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(
        PagecraftError::source("x")
            .to_string()
            .contains("page source error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PagecraftError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

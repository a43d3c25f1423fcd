use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PosterError::invalid("x")
            .to_string()
            .contains("invalid parameter:")
    );
    assert!(PosterError::render("x").to_string().contains("render error:"));
    assert!(
        PosterError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PosterError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn anyhow_converts_with_question_mark() {
    fn fails() -> PosterResult<()> {
        Err(anyhow::anyhow!("disk full"))?;
        Ok(())
    }
    let err = fails().unwrap_err();
    assert!(matches!(err, PosterError::Other(_)));
    assert!(err.to_string().contains("disk full"));
}

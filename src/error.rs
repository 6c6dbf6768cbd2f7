pub type ScorecardResult<T> = Result<T, ScorecardError>;

#[derive(thiserror::Error, Debug)]
pub enum ScorecardError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("font error: {0}")]
    Font(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScorecardError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            ScorecardError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(ScorecardError::font("x").to_string().contains("font error:"));
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = ScorecardError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}

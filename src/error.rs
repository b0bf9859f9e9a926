use thiserror::Error;

/// The only failures that reach a caller. Everything else the pipeline
/// normalizes silently.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// Style and industry are both blank. The model is never called.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The model answered with text that is not JSON at all
    #[error("upstream returned unparseable output: {0}")]
    UpstreamUnparseable(String),

    /// The model call itself failed
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(#[from] anyhow::Error),
}

impl PaletteError {
    /// Stable snake_case kind for API consumers
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::UpstreamUnparseable(_) => "upstream_unparseable",
            Self::UpstreamUnavailable(_) => "upstream_unavailable",
        }
    }

    pub fn http_status(&self) -> u16 {
        match self {
            Self::InvalidInput(_) => 400,
            Self::UpstreamUnparseable(_) => 502,
            Self::UpstreamUnavailable(_) => 500,
        }
    }

    /// Caller-facing message. Upstream detail stays in the logs.
    pub fn public_message(&self) -> String {
        match self {
            Self::InvalidInput(msg) => msg.clone(),
            Self::UpstreamUnparseable(_) => {
                "The model returned an unreadable palette, please try again".to_string()
            }
            Self::UpstreamUnavailable(_) => "Failed to generate palette".to_string(),
        }
    }

    /// Whether retrying the same request may succeed
    pub fn is_retryable(&self) -> bool {
        !matches!(self, Self::InvalidInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_and_statuses() {
        let invalid = PaletteError::InvalidInput("Enter a style or pick an industry".into());
        assert_eq!(invalid.kind(), "invalid_input");
        assert_eq!(invalid.http_status(), 400);
        assert_eq!(invalid.public_message(), "Enter a style or pick an industry");
        assert!(!invalid.is_retryable());

        let unparseable = PaletteError::UpstreamUnparseable("expected value".into());
        assert_eq!(unparseable.kind(), "upstream_unparseable");
        assert_eq!(unparseable.http_status(), 502);
        assert!(unparseable.is_retryable());

        let unavailable: PaletteError = anyhow::anyhow!("connection refused").into();
        assert_eq!(unavailable.kind(), "upstream_unavailable");
        assert_eq!(unavailable.http_status(), 500);
        assert_eq!(unavailable.public_message(), "Failed to generate palette");
        assert!(unavailable.to_string().contains("connection refused"));
    }
}

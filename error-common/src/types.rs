use thiserror::Error;

/// Simplified error enum for common use cases
#[derive(Error, Debug)]
pub enum PinPeopleError {
    /// Network communication errors
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Server configuration errors
    #[error("Server error: {0}")]
    ServerError(String),

    /// Database operation errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Wrapped external errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Pin People operations
pub type Result<T> = std::result::Result<T, PinPeopleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PinPeopleError::ConfigError("missing PINPEOPLE_JWT_SECRET".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: missing PINPEOPLE_JWT_SECRET"
        );
    }

    #[test]
    fn test_anyhow_wrap() {
        let err: PinPeopleError = anyhow::anyhow!("boom").into();
        assert_eq!(err.to_string(), "boom");
    }
}

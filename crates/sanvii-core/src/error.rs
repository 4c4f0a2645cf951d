use thiserror::Error;

/// Top-level error type for the Sanvii system.
///
/// Each variant wraps a subsystem-specific failure. Subsystem crates either
/// use these variants directly or convert their own error types via `From`
/// so that the `?` operator works across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SanviiError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Voice error: {0}")]
    Voice(String),

    #[error("Action error: {0}")]
    Action(String),

    #[error("Widget error: {0}")]
    Widget(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for SanviiError {
    fn from(err: toml::de::Error) -> Self {
        SanviiError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for SanviiError {
    fn from(err: toml::ser::Error) -> Self {
        SanviiError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for SanviiError {
    fn from(err: serde_json::Error) -> Self {
        SanviiError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Sanvii operations.
pub type Result<T> = std::result::Result<T, SanviiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SanviiError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");

        let err = SanviiError::Voice("synthesis unavailable".to_string());
        assert_eq!(err.to_string(), "Voice error: synthesis unavailable");

        let err = SanviiError::Action("bad scheme".to_string());
        assert_eq!(err.to_string(), "Action error: bad scheme");

        let err = SanviiError::Widget("invalid transition".to_string());
        assert_eq!(err.to_string(), "Widget error: invalid transition");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SanviiError = io_err.into();
        assert!(matches!(err, SanviiError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_from_toml_de() {
        let bad_toml = "invalid = [[[";
        let parsed: std::result::Result<toml::Value, _> = toml::from_str(bad_toml);
        let err: SanviiError = parsed.unwrap_err().into();
        assert!(matches!(err, SanviiError::Config(_)));
    }

    #[test]
    fn test_error_from_serde_json() {
        let bad_json = "{ invalid json }";
        let parsed: std::result::Result<serde_json::Value, _> = serde_json::from_str(bad_json);
        let err: SanviiError = parsed.unwrap_err().into();
        assert!(matches!(err, SanviiError::Serialization(_)));
    }

    #[test]
    fn test_result_type_with_question_mark() {
        fn inner() -> Result<String> {
            let io_result: std::result::Result<i32, std::io::Error> = Ok(42);
            let _value = io_result?;
            Ok("success".to_string())
        }

        assert_eq!(inner().unwrap(), "success");
    }
}

//! Error types for model and tool operations.

use thiserror::Error;

/// Errors that can occur while talking to the model or running tools.
#[derive(Debug, Error)]
pub enum BrainError {
    /// Missing or invalid configuration. Fatal at startup.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The request never reached the model provider.
    #[error("network error: {0}")]
    Network(String),

    /// The provider rejected or failed the request.
    #[error("processing failed: {0}")]
    ProcessingFailed(String),

    /// The provider answered with something we cannot use.
    #[error("invalid model response: {0}")]
    InvalidResponse(String),

    /// A local tool failed.
    #[error("tool execution failed: {0}")]
    ToolFailed(String),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = BrainError::Configuration("OPENAI_API_KEY not set".to_string());
        assert_eq!(err.to_string(), "configuration error: OPENAI_API_KEY not set");

        let err = BrainError::ToolFailed("Unsupported currency pair: USD to JPY".to_string());
        assert_eq!(
            err.to_string(),
            "tool execution failed: Unsupported currency pair: USD to JPY"
        );
    }

    #[test]
    fn test_from_serde_json() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: BrainError = parse_err.into();
        assert!(matches!(err, BrainError::Json(_)));
        assert!(err.to_string().starts_with("JSON error:"));
    }
}

//! Echo backend - answers with its own input.

use brain_core::{async_trait, BrainError, ModelBackend, ModelInput, ModelRequest, ModelTurn};

/// A backend that echoes the prompt back as the model's answer.
///
/// For conversation input the last user message is echoed. Useful for
/// testing request plumbing without any model.
#[derive(Debug, Clone, Default)]
pub struct EchoBackend {
    /// Optional prefix to add before the echo.
    prefix: Option<String>,
}

impl EchoBackend {
    /// Create a new EchoBackend with no prefix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new EchoBackend with a custom prefix.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mock_brain::EchoBackend;
    ///
    /// let backend = EchoBackend::with_prefix("Echo: ");
    /// // Will respond with "Echo: <prompt>"
    /// ```
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }
}

#[async_trait]
impl ModelBackend for EchoBackend {
    async fn respond(&self, request: ModelRequest) -> Result<ModelTurn, BrainError> {
        let text = match request.input {
            ModelInput::Text(prompt) => prompt,
            ModelInput::History(history) => history.last_user_text().unwrap_or_default().to_string(),
        };

        let response_text = match &self.prefix {
            Some(prefix) => format!("{}{}", prefix, text),
            None => text,
        };

        Ok(ModelTurn::Text(response_text))
    }

    fn name(&self) -> &str {
        "EchoBackend"
    }
}

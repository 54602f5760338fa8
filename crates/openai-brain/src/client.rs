//! ResponsesClient: ModelBackend implementation over the OpenAI Responses API.

use std::time::Duration;

use brain_core::{async_trait, BrainError, ModelBackend, ModelRequest, ModelTurn};
use reqwest::Client;
use tracing::{debug, info};

use crate::api_types::{ApiError, CreateResponseRequest, ResponseObject, ToolParam};
use crate::config::OpenAiBrainConfig;

/// HTTP client for the OpenAI Responses API.
///
/// Construction fails when no API key is configured, so a process holding
/// a `ResponsesClient` always has a credential.
pub struct ResponsesClient {
    client: Client,
    config: OpenAiBrainConfig,
}

impl ResponsesClient {
    /// Create a new client with the given configuration.
    pub fn new(config: OpenAiBrainConfig) -> Result<Self, BrainError> {
        if config.api_key.trim().is_empty() {
            return Err(BrainError::Configuration(
                "OPENAI_API_KEY not set".to_string(),
            ));
        }

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| BrainError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            "ResponsesClient initialized with model: {}, api_url: {}",
            config.model, config.api_url
        );

        Ok(Self { client, config })
    }

    /// Create a client from environment variables.
    ///
    /// See [`OpenAiBrainConfig::from_env`] for required environment variables.
    pub fn from_env() -> Result<Self, BrainError> {
        let config = OpenAiBrainConfig::from_env()?;
        Self::new(config)
    }

    /// Get the configuration.
    pub fn config(&self) -> &OpenAiBrainConfig {
        &self.config
    }

    /// Translate a provider-agnostic request into the wire request.
    pub(crate) fn build_request(&self, request: ModelRequest) -> CreateResponseRequest {
        CreateResponseRequest {
            model: self.config.model.clone(),
            input: request.input.into(),
            tools: request.tools.into_iter().map(ToolParam::from).collect(),
            text: request.text_format.map(Into::into),
            max_output_tokens: self.config.max_output_tokens,
            temperature: self.config.temperature,
        }
    }

    /// Make a create-response request to the API.
    async fn create_response(
        &self,
        request: CreateResponseRequest,
    ) -> Result<ResponseObject, BrainError> {
        let url = self.config.responses_url();

        debug!("Sending request to OpenAI API: {:?}", request);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| BrainError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(api_error(status.as_u16(), &error_text));
        }

        let body: ResponseObject = response
            .json()
            .await
            .map_err(|e| BrainError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        debug!("Received response from OpenAI API: {:?}", body);

        Ok(body)
    }
}

/// Build the error for a non-success status, preferring the provider's message.
fn api_error(status: u16, body: &str) -> BrainError {
    match serde_json::from_str::<ApiError>(body) {
        Ok(api_error) => BrainError::ProcessingFailed(format!(
            "API error ({}): {}",
            status, api_error.error.message
        )),
        Err(_) => BrainError::ProcessingFailed(format!("API error ({}): {}", status, body)),
    }
}

#[async_trait]
impl ModelBackend for ResponsesClient {
    async fn respond(&self, request: ModelRequest) -> Result<ModelTurn, BrainError> {
        let body = self.create_response(self.build_request(request)).await?;

        if let Some(ref usage) = body.usage {
            debug!(
                "Token usage - input: {}, output: {}, total: {}",
                usage.input_tokens, usage.output_tokens, usage.total_tokens
            );
        }

        body.into_turn()
    }

    fn name(&self) -> &str {
        "ResponsesClient"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brain_core::{ConversationHistory, HistoryItem, ToolSpec};
    use serde_json::json;

    fn client() -> ResponsesClient {
        let config = OpenAiBrainConfig::builder()
            .api_key("test-key")
            .model("gpt-test")
            .temperature(0.25)
            .build();
        ResponsesClient::new(config).unwrap()
    }

    #[test]
    fn test_new_requires_api_key() {
        let result = ResponsesClient::new(OpenAiBrainConfig::default());
        assert!(matches!(result, Err(BrainError::Configuration(_))));
    }

    #[test]
    fn test_new_with_timeout() {
        let config = OpenAiBrainConfig::builder()
            .api_key("test-key")
            .timeout_secs(5)
            .build();
        let client = ResponsesClient::new(config).unwrap();
        assert_eq!(client.config().timeout_secs, Some(5));
        assert_eq!(client.name(), "ResponsesClient");
    }

    #[test]
    fn test_build_request_uses_config() {
        let request = client().build_request(
            ModelRequest::history(ConversationHistory::new().with(HistoryItem::user("hi")))
                .with_tool(ToolSpec::WebSearch),
        );

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-test");
        assert_eq!(value["temperature"], 0.25);
        assert_eq!(value["tools"], json!([{"type": "web_search_preview"}]));
        assert_eq!(value["input"][0]["content"], "hi");
        assert!(value.get("text").is_none());
        assert!(value.get("max_output_tokens").is_none());
    }

    #[test]
    fn test_api_error_prefers_provider_message() {
        let err = api_error(
            401,
            r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#,
        );
        assert_eq!(
            err.to_string(),
            "processing failed: API error (401): Incorrect API key provided"
        );

        let err = api_error(502, "Bad Gateway");
        assert_eq!(err.to_string(), "processing failed: API error (502): Bad Gateway");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let config = OpenAiBrainConfig::builder()
            .api_key("test-key")
            .api_url("http://127.0.0.1:9")
            .timeout_secs(5)
            .build();
        let client = ResponsesClient::new(config).unwrap();

        let err = client
            .respond(ModelRequest::text("hello"))
            .await
            .unwrap_err();
        assert!(matches!(err, BrainError::Network(_)));
    }
}

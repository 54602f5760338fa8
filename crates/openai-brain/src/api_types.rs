//! OpenAI Responses API request and response types.

use brain_core::{
    BrainError, ConversationHistory, FunctionCall, JsonSchemaFormat, ModelInput, ModelTurn,
    ToolSpec,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for `POST /v1/responses`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateResponseRequest {
    /// Model to use
    pub model: String,
    /// Prompt text or conversation items
    pub input: ResponseInput,
    /// Tools the model may use
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<ToolParam>,
    /// Output text configuration (structured output)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextConfig>,
    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    /// Temperature for generation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// The `input` field: either a plain string or a list of items.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ResponseInput {
    Text(String),
    Items(ConversationHistory),
}

impl From<ModelInput> for ResponseInput {
    fn from(input: ModelInput) -> Self {
        match input {
            ModelInput::Text(text) => ResponseInput::Text(text),
            ModelInput::History(history) => ResponseInput::Items(history),
        }
    }
}

/// A tool definition in the request.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolParam {
    /// Hosted web search.
    WebSearchPreview,
    /// A function the model may ask us to call.
    Function {
        name: String,
        description: String,
        parameters: Value,
        strict: bool,
    },
}

impl From<ToolSpec> for ToolParam {
    fn from(spec: ToolSpec) -> Self {
        match spec {
            ToolSpec::WebSearch => ToolParam::WebSearchPreview,
            ToolSpec::Function(def) => ToolParam::Function {
                name: def.name,
                description: def.description,
                parameters: def.parameters,
                strict: def.strict,
            },
        }
    }
}

/// Output text configuration.
#[derive(Debug, Clone, Serialize)]
pub struct TextConfig {
    pub format: TextFormat,
}

/// Output text format.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextFormat {
    JsonSchema {
        name: String,
        schema: Value,
        strict: bool,
    },
}

impl From<JsonSchemaFormat> for TextConfig {
    fn from(format: JsonSchemaFormat) -> Self {
        TextConfig {
            format: TextFormat::JsonSchema {
                name: format.name,
                schema: format.schema,
                strict: format.strict,
            },
        }
    }
}

/// Response object returned by `POST /v1/responses`.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseObject {
    /// Response ID
    pub id: String,
    /// Model used
    #[serde(default)]
    pub model: String,
    /// Status: "completed", "failed", "incomplete", ...
    #[serde(default)]
    pub status: Option<String>,
    /// Error details when the response failed
    #[serde(default)]
    pub error: Option<ApiErrorDetails>,
    /// Output items, in order
    #[serde(default)]
    pub output: Vec<OutputItem>,
    /// Token usage
    #[serde(default)]
    pub usage: Option<Usage>,
}

/// One item of the response output.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutputItem {
    /// Assistant message with content parts.
    Message {
        #[serde(default)]
        content: Vec<ContentPart>,
    },
    /// Request to call a function.
    FunctionCall {
        call_id: String,
        name: String,
        arguments: String,
    },
    /// Anything else (web search calls, reasoning, ...).
    #[serde(other)]
    Other,
}

/// A content part of an output message.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    OutputText { text: String },
    Refusal { refusal: String },
    #[serde(other)]
    Other,
}

/// Token usage information.
#[derive(Debug, Clone, Deserialize)]
pub struct Usage {
    /// Input tokens
    pub input_tokens: u32,
    /// Output tokens
    pub output_tokens: u32,
    /// Total tokens
    pub total_tokens: u32,
}

/// API error response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    /// Error details
    pub error: ApiErrorDetails,
}

/// API error details.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetails {
    /// Error message
    pub message: String,
    /// Error type
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    /// Error code
    #[serde(default)]
    pub code: Option<String>,
}

impl ResponseObject {
    /// Concatenated text of every `output_text` part, in order.
    pub fn output_text(&self) -> String {
        let mut text = String::new();
        for item in &self.output {
            if let OutputItem::Message { content } = item {
                for part in content {
                    if let ContentPart::OutputText { text: part } = part {
                        text.push_str(part);
                    }
                }
            }
        }
        text
    }

    /// The first refusal message, if the model refused.
    pub fn refusal(&self) -> Option<&str> {
        self.output.iter().find_map(|item| match item {
            OutputItem::Message { content } => content.iter().find_map(|part| match part {
                ContentPart::Refusal { refusal } => Some(refusal.as_str()),
                _ => None,
            }),
            _ => None,
        })
    }

    /// Decode into a [`ModelTurn`].
    ///
    /// Only the first output item is inspected for a function call; any
    /// further function calls in the same response are ignored.
    pub fn into_turn(self) -> Result<ModelTurn, BrainError> {
        if let Some(error) = &self.error {
            return Err(BrainError::ProcessingFailed(format!(
                "response {} failed: {}",
                self.id, error.message
            )));
        }

        if self.status.as_deref() == Some("failed") {
            return Err(BrainError::ProcessingFailed(format!(
                "response {} failed",
                self.id
            )));
        }

        if let Some(OutputItem::FunctionCall {
            call_id,
            name,
            arguments,
        }) = self.output.first()
        {
            return Ok(ModelTurn::ToolCall(FunctionCall {
                call_id: call_id.clone(),
                name: name.clone(),
                arguments: arguments.clone(),
            }));
        }

        if let Some(refusal) = self.refusal() {
            return Err(BrainError::InvalidResponse(format!(
                "model refused: {}",
                refusal
            )));
        }

        Ok(ModelTurn::Text(self.output_text()))
    }
}

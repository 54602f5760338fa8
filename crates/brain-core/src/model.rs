//! Model request and response types, and the backend trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::BrainError;
use crate::history::ConversationHistory;
use crate::tools::ToolDefinition;

/// A function call requested by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    /// Identifier the function output must be sent back with.
    pub call_id: String,
    /// Name of the function to call.
    pub name: String,
    /// JSON-encoded arguments.
    pub arguments: String,
}

/// The model's answer, decoded once at the API boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelTurn {
    /// Final text output.
    Text(String),
    /// The model wants a function executed before it answers.
    ToolCall(FunctionCall),
}

impl ModelTurn {
    /// Take the text output, failing if the model asked for a tool instead.
    pub fn into_text(self) -> Result<String, BrainError> {
        match self {
            ModelTurn::Text(text) => Ok(text),
            ModelTurn::ToolCall(call) => Err(BrainError::InvalidResponse(format!(
                "expected text output, model requested tool '{}'",
                call.name
            ))),
        }
    }
}

/// What the model reads.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelInput {
    /// A single free-text prompt.
    Text(String),
    /// A full conversation.
    History(ConversationHistory),
}

/// A tool made available to the model.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolSpec {
    /// The provider's hosted web search.
    WebSearch,
    /// A local function the model may request.
    Function(ToolDefinition),
}

/// Constrain the model's output to a JSON schema.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonSchemaFormat {
    /// Schema name reported to the provider.
    pub name: String,
    /// The JSON schema itself.
    pub schema: Value,
    /// Whether the provider must follow the schema exactly.
    pub strict: bool,
}

impl JsonSchemaFormat {
    /// Create a strict schema format.
    pub fn strict(name: impl Into<String>, schema: Value) -> Self {
        Self {
            name: name.into(),
            schema,
            strict: true,
        }
    }
}

/// A single request to the model.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelRequest {
    pub input: ModelInput,
    pub tools: Vec<ToolSpec>,
    pub text_format: Option<JsonSchemaFormat>,
}

impl ModelRequest {
    /// Request with a free-text prompt.
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            input: ModelInput::Text(prompt.into()),
            tools: Vec::new(),
            text_format: None,
        }
    }

    /// Request with a conversation as input.
    pub fn history(history: ConversationHistory) -> Self {
        Self {
            input: ModelInput::History(history),
            tools: Vec::new(),
            text_format: None,
        }
    }

    /// Add a tool.
    pub fn with_tool(mut self, tool: ToolSpec) -> Self {
        self.tools.push(tool);
        self
    }

    /// Add several tools.
    pub fn with_tools(mut self, tools: impl IntoIterator<Item = ToolSpec>) -> Self {
        self.tools.extend(tools);
        self
    }

    /// Constrain the output to a JSON schema.
    pub fn with_json_schema(mut self, format: JsonSchemaFormat) -> Self {
        self.text_format = Some(format);
        self
    }
}

/// A model provider.
///
/// Implementations translate a [`ModelRequest`] into the provider's wire
/// format and decode the provider's answer into a [`ModelTurn`].
#[async_trait]
pub trait ModelBackend: Send + Sync {
    /// Send one request and wait for the model's turn.
    async fn respond(&self, request: ModelRequest) -> Result<ModelTurn, BrainError>;

    /// Name of this backend (for logging).
    fn name(&self) -> &str;
}

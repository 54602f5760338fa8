//! Tool execution support for model clients.
//!
//! This module provides the types a model client needs to hand a function
//! call over to local code and feed the result back to the model.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::error::BrainError;
use crate::model::FunctionCall;

/// Declaration of a function tool, as advertised to the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Function name the model uses to call the tool.
    pub name: String,
    /// What the tool does, in words the model can act on.
    pub description: String,
    /// JSON schema of the arguments object.
    pub parameters: Value,
    /// Whether the model must follow the schema exactly.
    pub strict: bool,
}

/// Result of a tool execution.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolResult {
    /// The tool call ID this result corresponds to.
    pub tool_call_id: String,
    /// The result content (will be sent back to the model).
    pub output: String,
}

impl ToolResult {
    /// Create a tool result.
    pub fn new(tool_call_id: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            tool_call_id: tool_call_id.into(),
            output: output.into(),
        }
    }
}

/// A request to execute a tool.
#[derive(Debug, Clone)]
pub struct ToolRequest {
    /// Unique ID for this tool call.
    pub id: String,
    /// Name of the tool to execute.
    pub name: String,
    /// Arguments as a JSON object.
    pub arguments: HashMap<String, Value>,
}

impl ToolRequest {
    /// Parse a function call's JSON arguments.
    pub fn from_call(call: &FunctionCall) -> Result<Self, serde_json::Error> {
        let arguments: HashMap<String, Value> = serde_json::from_str(&call.arguments)?;
        Ok(Self {
            id: call.call_id.clone(),
            name: call.name.clone(),
            arguments,
        })
    }

    /// Get a string argument by name.
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(|v| v.as_str())
    }
}

/// Trait for executing the local tools a model may call.
///
/// Errors abort the whole turn: there is no partial or fallback answer
/// when a tool fails.
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    /// Execute a tool and return the result.
    async fn execute(&self, request: ToolRequest) -> Result<ToolResult, BrainError>;

    /// Declarations of every tool this executor can run.
    fn definitions(&self) -> Vec<ToolDefinition>;

    /// Names of the tools this executor supports.
    fn supported_tools(&self) -> Vec<String> {
        self.definitions().into_iter().map(|d| d.name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(arguments: &str) -> FunctionCall {
        FunctionCall {
            call_id: "call-123".to_string(),
            name: "convert_currency".to_string(),
            arguments: arguments.to_string(),
        }
    }

    #[test]
    fn test_tool_request_parsing() {
        let request = ToolRequest::from_call(&call(
            r#"{"amount": 100, "from_currency": "USD", "to_currency": "EUR"}"#,
        ))
        .unwrap();

        assert_eq!(request.id, "call-123");
        assert_eq!(request.name, "convert_currency");
        assert_eq!(request.get_string("from_currency"), Some("USD"));
        assert_eq!(request.get_string("amount"), None);
        assert_eq!(request.arguments["amount"].as_f64(), Some(100.0));
    }

    #[test]
    fn test_tool_request_rejects_bad_json() {
        assert!(ToolRequest::from_call(&call("not json")).is_err());
        assert!(ToolRequest::from_call(&call("[1, 2]")).is_err());
    }

    struct NoopExecutor;

    #[async_trait]
    impl ToolExecutor for NoopExecutor {
        async fn execute(&self, request: ToolRequest) -> Result<ToolResult, BrainError> {
            Ok(ToolResult::new(request.id, "{}"))
        }

        fn definitions(&self) -> Vec<ToolDefinition> {
            vec![ToolDefinition {
                name: "noop".to_string(),
                description: "Does nothing".to_string(),
                parameters: serde_json::json!({"type": "object"}),
                strict: false,
            }]
        }
    }

    #[tokio::test]
    async fn test_supported_tools_from_definitions() {
        let executor = NoopExecutor;
        assert_eq!(executor.supported_tools(), vec!["noop".to_string()]);

        let result = executor
            .execute(ToolRequest::from_call(&call("{}")).unwrap())
            .await
            .unwrap();
        assert_eq!(result, ToolResult::new("call-123", "{}"));
    }
}

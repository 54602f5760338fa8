//! Name-indexed collection of tools.

use std::collections::HashMap;
use std::sync::Arc;

use brain_core::ToolDefinition;
use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::ToolError;
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// Tools available to the model, kept in registration order so the
/// declarations sent upstream are stable between requests.
#[derive(Default)]
pub struct ToolRegistry {
    tools: IndexMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tool, replacing any tool already registered under its name.
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        let name = tool.name().to_string();
        info!("Registering tool: {}", name);
        self.tools.insert(name, Arc::new(tool));
    }

    /// Function declarations for every registered tool.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .values()
            .map(|tool| ToolDefinition {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
                parameters: tool.parameters(),
                strict: tool.strict(),
            })
            .collect()
    }

    /// Run the named tool with already-decoded arguments.
    pub async fn execute(
        &self,
        name: &str,
        params: HashMap<String, Value>,
    ) -> Result<ToolOutput, ToolError> {
        let Some(tool) = self.tools.get(name) else {
            return Err(ToolError::NotFound(name.to_string()));
        };

        debug!("Running tool '{}' with args {:?}", name, params);
        let output = tool.execute(ToolArgs::new(params)).await?;
        debug!("Tool '{}' returned {}", name, output.content);

        Ok(output)
    }

    /// Run the named tool with a JSON object string of arguments, as the
    /// model sends them.
    pub async fn execute_json(&self, name: &str, args_json: &str) -> Result<ToolOutput, ToolError> {
        let params: HashMap<String, Value> = serde_json::from_str(args_json)?;
        self.execute(name, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;

    /// Doubles `amount`.
    struct Doubler;

    #[async_trait]
    impl Tool for Doubler {
        fn name(&self) -> &str {
            "double"
        }

        fn description(&self) -> &str {
            "Double an amount"
        }

        fn parameters(&self) -> Value {
            json!({
                "type": "object",
                "properties": {"amount": {"type": "number"}},
                "required": ["amount"],
                "additionalProperties": false
            })
        }

        async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
            let amount = args.get_f64("amount")?;
            Ok(ToolOutput::text((amount * 2.0).to_string()))
        }
    }

    fn registry() -> ToolRegistry {
        let mut registry = ToolRegistry::new();
        registry.register(Doubler);
        registry
    }

    #[test]
    fn test_definitions_in_registration_order() {
        let registry = registry();

        let defs = registry.definitions();
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].name, "double");
        assert_eq!(defs[0].description, "Double an amount");
        assert!(defs[0].strict);
        assert_eq!(defs[0].parameters["required"], json!(["amount"]));
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut registry = registry();
        registry.register(Doubler);
        assert_eq!(registry.definitions().len(), 1);
    }

    #[tokio::test]
    async fn test_execute_with_decoded_args() {
        let params = HashMap::from([("amount".to_string(), json!(21))]);
        let output = registry().execute("double", params).await.unwrap();
        assert_eq!(output.content, "42");
    }

    #[tokio::test]
    async fn test_execute_json() {
        let registry = registry();

        let output = registry.execute_json("double", r#"{"amount": 1.5}"#).await.unwrap();
        assert_eq!(output.content, "3");

        let err = registry.execute_json("double", "{amount").await.unwrap_err();
        assert!(matches!(err, ToolError::JsonError(_)));

        let err = registry.execute_json("double", "{}").await.unwrap_err();
        assert!(matches!(err, ToolError::MissingParameter(_)));
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let err = registry().execute("triple", HashMap::new()).await.unwrap_err();
        assert!(matches!(err, ToolError::NotFound(name) if name == "triple"));
    }
}

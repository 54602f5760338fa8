//! ToolExecutor implementation backed by ToolRegistry.

use async_trait::async_trait;
use brain_core::{BrainError, ToolDefinition, ToolExecutor, ToolRequest, ToolResult};
use tracing::{info, warn};

use crate::ToolRegistry;

/// Exposes a [`ToolRegistry`] to model clients as a [`ToolExecutor`].
pub struct RegistryToolExecutor {
    registry: ToolRegistry,
}

impl RegistryToolExecutor {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl ToolExecutor for RegistryToolExecutor {
    async fn execute(&self, request: ToolRequest) -> Result<ToolResult, BrainError> {
        info!("Executing tool '{}' (call {})", request.name, request.id);

        match self.registry.execute(&request.name, request.arguments).await {
            Ok(output) => Ok(ToolResult::new(request.id, output.content)),
            Err(e) => {
                warn!("Tool '{}' failed: {}", request.name, e);
                Err(BrainError::ToolFailed(e.to_string()))
            }
        }
    }

    fn definitions(&self) -> Vec<ToolDefinition> {
        self.registry.definitions()
    }
}

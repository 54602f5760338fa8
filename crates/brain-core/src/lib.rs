//! Core traits and types shared by the QA system crates.
//!
//! This crate provides the provider-agnostic interface between the HTTP
//! facade, the model client and the local tools. It defines:
//!
//! - [`ModelBackend`] - The trait every model client implements
//! - [`ModelRequest`] / [`ModelTurn`] - What goes to the model and what comes back
//! - [`ConversationHistory`] / [`HistoryItem`] - Request-scoped conversation records
//! - [`ToolExecutor`] - Trait for executing the local functions the model can call
//! - [`BrainError`] - Error types for model and tool operations
//!
//! # Example
//!
//! ```rust
//! use brain_core::{async_trait, BrainError, ModelBackend, ModelRequest, ModelTurn};
//!
//! struct FixedBackend;
//!
//! #[async_trait]
//! impl ModelBackend for FixedBackend {
//!     async fn respond(&self, _request: ModelRequest) -> Result<ModelTurn, BrainError> {
//!         Ok(ModelTurn::Text("Hello!".to_string()))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "FixedBackend"
//!     }
//! }
//! ```

mod error;
mod history;
mod model;
mod tools;

pub use error::BrainError;
pub use history::{ConversationHistory, HistoryItem, Role};
pub use model::{
    FunctionCall, JsonSchemaFormat, ModelBackend, ModelInput, ModelRequest, ModelTurn, ToolSpec,
};
pub use tools::{ToolDefinition, ToolExecutor, ToolRequest, ToolResult};

// Re-export async_trait for convenience
pub use async_trait::async_trait;

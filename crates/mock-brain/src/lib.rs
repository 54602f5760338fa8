//! Mock model backends for the QA system.
//!
//! This crate provides mock implementations of the `ModelBackend` trait for testing:
//! - `EchoBackend` - Answers with the prompt (or last user message) it was given
//! - `ScriptedBackend` - Replays a fixed sequence of turns and records every request
//!
//! For real model calls, use the `openai-brain` crate instead.
//!
//! # Example
//!
//! ```rust
//! use mock_brain::{FunctionCall, ModelBackend, ModelRequest, ModelTurn, ScriptedBackend};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mock_brain::BrainError> {
//!     let backend = ScriptedBackend::new()
//!         .then_tool_call("call_1", "convert_currency", r#"{"amount": 1}"#)
//!         .then_text("Done.");
//!
//!     let first = backend.respond(ModelRequest::text("hi")).await?;
//!     assert!(matches!(first, ModelTurn::ToolCall(FunctionCall { .. })));
//!
//!     let second = backend.respond(ModelRequest::text("again")).await?;
//!     assert_eq!(second, ModelTurn::Text("Done.".to_string()));
//!     Ok(())
//! }
//! ```

mod echo;
mod scripted;

// Re-export brain-core types for convenience
pub use brain_core::{
    async_trait, BrainError, ConversationHistory, FunctionCall, HistoryItem, ModelBackend,
    ModelInput, ModelRequest, ModelTurn,
};

// Export mock implementations
pub use echo::EchoBackend;
pub use scripted::{ScriptedBackend, ScriptedTurn};

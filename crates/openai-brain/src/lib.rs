//! OpenAI Responses API brain for the QA system.
//!
//! This crate provides:
//!
//! - [`ResponsesClient`] - A [`ModelBackend`] that calls `POST /v1/responses`
//! - [`QaBrain`] - The three query modes: web-search answers, a currency
//!   assistant with one local tool call per turn, and structured product
//!   extraction
//! - [`ProductRecord`] - The structured extraction result and its schema
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use agent_tools::{default_registry, RegistryToolExecutor};
//! use openai_brain::{QaBrain, ResponsesClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = Arc::new(ResponsesClient::from_env()?);
//!     let tools = Arc::new(RegistryToolExecutor::new(default_registry()));
//!     let brain = QaBrain::new(backend, tools);
//!
//!     let answer = brain.answer("Who won the 2022 World Cup?").await?;
//!     println!("{}", answer);
//!     Ok(())
//! }
//! ```
//!
//! # Configuration
//!
//! See [`OpenAiBrainConfig::from_env`] for the environment variables read.

mod api_types;
mod brain;
mod client;
mod config;
mod product;

pub use brain::{preview, CurrencyReply, QaBrain};
pub use client::ResponsesClient;
pub use config::{OpenAiBrainConfig, OpenAiBrainConfigBuilder, DEFAULT_API_URL, DEFAULT_MODEL};
pub use product::{product_schema, Pricing, ProductRecord, PRODUCT_SCHEMA_NAME};

// Re-export brain-core types for convenience
pub use brain_core::{
    BrainError, ConversationHistory, HistoryItem, ModelBackend, ModelRequest, ModelTurn,
    ToolExecutor,
};

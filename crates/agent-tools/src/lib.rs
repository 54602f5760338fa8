//! Tool registry and local tool implementations for the QA system.
//!
//! This crate provides a `ToolRegistry` for registering and executing the
//! local functions a model may call mid-conversation, and a
//! [`RegistryToolExecutor`] adapter that exposes the registry as a
//! brain-core `ToolExecutor`.
//!
//! # Built-in Tools
//!
//! - [`CurrencyConverter`] - Converts between USD, EUR, GBP, AUD and CAD
//!   using a fixed mock exchange rate table.
//!
//! # Example
//!
//! ```rust
//! use agent_tools::default_registry;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let registry = default_registry();
//!
//!     let result = registry
//!         .execute_json(
//!             "convert_currency",
//!             r#"{"amount": 100, "from_currency": "USD", "to_currency": "EUR"}"#,
//!         )
//!         .await
//!         .unwrap();
//!
//!     assert_eq!(
//!         result.content,
//!         r#"{"amount":95.0,"from_currency":"USD","to_currency":"EUR"}"#
//!     );
//! }
//! ```

mod error;
mod executor;
mod registry;
mod tool;
pub mod tools;

pub use error::ToolError;
pub use executor::RegistryToolExecutor;
pub use registry::ToolRegistry;
pub use tool::{Tool, ToolArgs, ToolOutput};
pub use tools::{convert_currency, exchange_rate, Conversion, CurrencyConverter};

// Re-export async_trait for convenience
pub use async_trait::async_trait;

/// Create a new registry with all built-in tools registered.
pub fn default_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(CurrencyConverter::new());
    registry
}

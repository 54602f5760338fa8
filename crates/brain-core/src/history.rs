//! Request-scoped conversation history.
//!
//! A [`ConversationHistory`] is an ordered list of [`HistoryItem`]s that is
//! sent to the model as its input. Items serialize to the model API's input
//! item shape, so the history can be forwarded without conversion.
//!
//! Histories are values: appending consumes the history and returns a new
//! one, so a caller-supplied history is never changed behind its back.

use serde::{Deserialize, Serialize};

use crate::model::FunctionCall;

/// Author of a role message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
    Developer,
}

/// A single record in the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HistoryItem {
    /// A plain text message.
    Message {
        role: Role,
        content: String,
    },
    /// A function call requested by the model.
    FunctionCall {
        call_id: String,
        name: String,
        /// JSON-encoded arguments, exactly as produced by the model.
        arguments: String,
    },
    /// The result of a function call, fed back to the model.
    FunctionCallOutput {
        call_id: String,
        output: String,
    },
}

impl HistoryItem {
    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::Message {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::Message {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    /// Record a function call the model asked for.
    pub fn function_call(call: &FunctionCall) -> Self {
        Self::FunctionCall {
            call_id: call.call_id.clone(),
            name: call.name.clone(),
            arguments: call.arguments.clone(),
        }
    }

    /// Record the output of a function call.
    pub fn function_call_output(call_id: impl Into<String>, output: impl Into<String>) -> Self {
        Self::FunctionCallOutput {
            call_id: call_id.into(),
            output: output.into(),
        }
    }

    /// Whether this item is a tool-invocation record.
    pub fn is_tool_record(&self) -> bool {
        matches!(self, Self::FunctionCall { .. } | Self::FunctionCallOutput { .. })
    }
}

/// Ordered, append-only conversation history.
///
/// # Example
///
/// ```rust
/// use brain_core::{ConversationHistory, HistoryItem};
///
/// let history = ConversationHistory::new();
/// let next = history.clone().with(HistoryItem::user("Hello"));
///
/// assert!(history.is_empty());
/// assert_eq!(next.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationHistory {
    items: Vec<HistoryItem>,
}

impl ConversationHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new history with `item` appended.
    pub fn with(mut self, item: HistoryItem) -> Self {
        self.items.push(item);
        self
    }

    /// The items in order.
    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the history has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The most recent item, if any.
    pub fn last(&self) -> Option<&HistoryItem> {
        self.items.last()
    }

    /// Text of the most recent user message, if any.
    pub fn last_user_text(&self) -> Option<&str> {
        self.items.iter().rev().find_map(|item| match item {
            HistoryItem::Message {
                role: Role::User,
                content,
            } => Some(content.as_str()),
            _ => None,
        })
    }
}

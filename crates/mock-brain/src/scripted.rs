//! Scripted backend - replays canned turns and records requests.

use std::collections::VecDeque;

use brain_core::{async_trait, BrainError, FunctionCall, ModelBackend, ModelRequest, ModelTurn};
use tokio::sync::Mutex;

/// One canned answer.
#[derive(Debug, Clone)]
pub enum ScriptedTurn {
    /// Answer with this turn.
    Reply(ModelTurn),
    /// Fail the call with `BrainError::ProcessingFailed`.
    Fail(String),
}

/// A backend that answers from a fixed script.
///
/// Each call pops the next scripted turn. Every request is recorded so
/// tests can inspect exactly what would have been sent to the provider.
/// Calling past the end of the script is an error.
#[derive(Debug, Default)]
pub struct ScriptedBackend {
    script: Mutex<VecDeque<ScriptedTurn>>,
    requests: Mutex<Vec<ModelRequest>>,
}

impl ScriptedBackend {
    /// Create a backend with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend from a list of turns.
    pub fn from_turns(turns: impl IntoIterator<Item = ScriptedTurn>) -> Self {
        Self {
            script: Mutex::new(turns.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Append a text answer to the script.
    pub fn then_text(self, text: impl Into<String>) -> Self {
        self.then(ScriptedTurn::Reply(ModelTurn::Text(text.into())))
    }

    /// Append a function call to the script.
    pub fn then_tool_call(
        self,
        call_id: impl Into<String>,
        name: impl Into<String>,
        arguments: impl Into<String>,
    ) -> Self {
        self.then(ScriptedTurn::Reply(ModelTurn::ToolCall(FunctionCall {
            call_id: call_id.into(),
            name: name.into(),
            arguments: arguments.into(),
        })))
    }

    /// Append a failure to the script.
    pub fn then_fail(self, message: impl Into<String>) -> Self {
        self.then(ScriptedTurn::Fail(message.into()))
    }

    fn then(mut self, turn: ScriptedTurn) -> Self {
        self.script.get_mut().push_back(turn);
        self
    }

    /// All requests received so far, in order.
    pub async fn requests(&self) -> Vec<ModelRequest> {
        self.requests.lock().await.clone()
    }

    /// Number of calls made so far.
    pub async fn call_count(&self) -> usize {
        self.requests.lock().await.len()
    }

    /// Number of scripted turns not yet consumed.
    pub async fn remaining(&self) -> usize {
        self.script.lock().await.len()
    }
}

#[async_trait]
impl ModelBackend for ScriptedBackend {
    async fn respond(&self, request: ModelRequest) -> Result<ModelTurn, BrainError> {
        self.requests.lock().await.push(request);

        match self.script.lock().await.pop_front() {
            Some(ScriptedTurn::Reply(turn)) => Ok(turn),
            Some(ScriptedTurn::Fail(message)) => Err(BrainError::ProcessingFailed(message)),
            None => Err(BrainError::ProcessingFailed(
                "scripted backend has no more turns".to_string(),
            )),
        }
    }

    fn name(&self) -> &str {
        "ScriptedBackend"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replays_in_order() {
        let backend = ScriptedBackend::new()
            .then_text("one")
            .then_fail("boom")
            .then_text("three");

        assert_eq!(
            backend.respond(ModelRequest::text("a")).await.unwrap(),
            ModelTurn::Text("one".to_string())
        );

        let err = backend.respond(ModelRequest::text("b")).await.unwrap_err();
        assert_eq!(err.to_string(), "processing failed: boom");

        assert_eq!(backend.remaining().await, 1);
        assert_eq!(
            backend.respond(ModelRequest::text("c")).await.unwrap(),
            ModelTurn::Text("three".to_string())
        );
    }

    #[tokio::test]
    async fn test_records_requests() {
        let backend = ScriptedBackend::new().then_text("ok");
        backend.respond(ModelRequest::text("recorded")).await.unwrap();

        let requests = backend.requests().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0], ModelRequest::text("recorded"));
        assert_eq!(backend.call_count().await, 1);
    }

    #[tokio::test]
    async fn test_exhausted_script_fails() {
        let backend = ScriptedBackend::from_turns(Vec::new());
        let err = backend.respond(ModelRequest::text("x")).await.unwrap_err();
        assert!(matches!(err, BrainError::ProcessingFailed(_)));
        assert_eq!(backend.call_count().await, 1);
    }

    #[tokio::test]
    async fn test_tool_call_turn() {
        let backend = ScriptedBackend::new().then_tool_call("call_9", "convert_currency", "{}");
        let turn = backend.respond(ModelRequest::text("x")).await.unwrap();
        match turn {
            ModelTurn::ToolCall(call) => {
                assert_eq!(call.call_id, "call_9");
                assert_eq!(call.name, "convert_currency");
            }
            other => panic!("Expected tool call, got {:?}", other),
        }
    }
}

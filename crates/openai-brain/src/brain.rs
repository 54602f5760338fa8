//! QaBrain: the three query modes on top of a model backend.

use std::sync::Arc;

use brain_core::{
    BrainError, ConversationHistory, FunctionCall, HistoryItem, ModelBackend, ModelRequest,
    ModelTurn, ToolExecutor, ToolRequest, ToolSpec,
};
use tracing::{error, info};

use crate::product::{extraction_prompt, product_format, ProductRecord};

/// Number of characters of user input included in log lines.
const LOG_PREVIEW_CHARS: usize = 50;

/// Answer and updated history from a currency query.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyReply {
    /// Final text from the model.
    pub answer: String,
    /// Input history plus the records appended during this turn.
    pub history: ConversationHistory,
}

/// Question-answering front end over a [`ModelBackend`].
///
/// Holds no per-request state: every call builds its own request and,
/// for currency queries, its own history.
#[derive(Clone)]
pub struct QaBrain {
    backend: Arc<dyn ModelBackend>,
    tools: Arc<dyn ToolExecutor>,
}

impl QaBrain {
    /// Create a brain from a model backend and the tools it may call.
    pub fn new(backend: Arc<dyn ModelBackend>, tools: Arc<dyn ToolExecutor>) -> Self {
        info!(
            "QaBrain initialized with backend: {}, tools: {:?}",
            backend.name(),
            tools.supported_tools()
        );
        Self { backend, tools }
    }

    /// Answer a free-text question with web search enabled.
    pub async fn answer(&self, question: &str) -> Result<String, BrainError> {
        let request = ModelRequest::text(question).with_tool(ToolSpec::WebSearch);

        let answer = self
            .backend
            .respond(request)
            .await
            .and_then(ModelTurn::into_text)
            .inspect_err(|e| error!("Error generating answer: {}", e))?;

        info!("Generated answer for question: {}...", preview(question));
        Ok(answer)
    }

    /// Answer a currency question, letting the model call the conversion tool once.
    ///
    /// `history` is not modified; the returned [`CurrencyReply`] carries a new
    /// history with the user message and, if a tool ran, the function call and
    /// its output appended in that order. The final answer itself is not
    /// appended.
    ///
    /// Only one tool call per turn is handled: the first output item decides,
    /// and a tool call in the second response fails the turn.
    pub async fn currency_assistant(
        &self,
        message: &str,
        history: &ConversationHistory,
    ) -> Result<CurrencyReply, BrainError> {
        let history = history.clone().with(HistoryItem::user(message));
        let tools: Vec<ToolSpec> = self
            .tools
            .definitions()
            .into_iter()
            .map(ToolSpec::Function)
            .collect();

        let first = self
            .backend
            .respond(ModelRequest::history(history.clone()).with_tools(tools.clone()))
            .await
            .inspect_err(|e| error!("Error in initial model call: {}", e))?;

        let call = match first {
            ModelTurn::Text(answer) => {
                info!("Generated direct answer for question: {}...", preview(message));
                return Ok(CurrencyReply { answer, history });
            }
            ModelTurn::ToolCall(call) => call,
        };

        let output = self
            .run_tool(&call)
            .await
            .inspect_err(|e| error!("Error processing tool call: {}", e))?;

        let history = history
            .with(HistoryItem::function_call(&call))
            .with(HistoryItem::function_call_output(&call.call_id, output));

        let answer = self
            .backend
            .respond(ModelRequest::history(history.clone()).with_tools(tools))
            .await
            .and_then(ModelTurn::into_text)
            .inspect_err(|e| error!("Error in final model call: {}", e))?;

        info!("Generated currency answer for question: {}...", preview(message));
        Ok(CurrencyReply { answer, history })
    }

    /// Extract a structured product record from a free-text description.
    pub async fn extract_product(&self, description: &str) -> Result<ProductRecord, BrainError> {
        let request =
            ModelRequest::text(extraction_prompt(description)).with_json_schema(product_format());

        let record = self
            .backend
            .respond(request)
            .await
            .and_then(ModelTurn::into_text)
            .and_then(|text| serde_json::from_str::<ProductRecord>(&text).map_err(BrainError::from))
            .inspect_err(|e| error!("Error extracting product info: {}", e))?;

        info!("Extracted product info from description: {}...", preview(description));
        Ok(record)
    }

    async fn run_tool(&self, call: &FunctionCall) -> Result<String, BrainError> {
        let request = ToolRequest::from_call(call)?;
        let result = self.tools.execute(request).await?;
        Ok(result.output)
    }
}

/// First characters of `text`, for log lines.
pub fn preview(text: &str) -> String {
    text.chars().take(LOG_PREVIEW_CHARS).collect()
}

//! Currency assistant with the local conversion tool.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use brain_core::ConversationHistory;
use openai_brain::preview;
use tracing::info;

use crate::error::Result;
use crate::routes::query::{AnswerResponse, QuestionParams};
use crate::state::AppState;

/// `POST /currency/?question=...`
///
/// Each request starts from an empty conversation.
pub async fn currency(
    State(state): State<AppState>,
    params: std::result::Result<Query<QuestionParams>, QueryRejection>,
) -> Result<Json<AnswerResponse>> {
    let Query(QuestionParams { question }) = params?;
    info!("Received currency question: {}...", preview(&question));

    let reply = state
        .brain
        .currency_assistant(&question, &ConversationHistory::new())
        .await?;

    Ok(Json(AnswerResponse {
        question,
        answer: reply.answer,
    }))
}

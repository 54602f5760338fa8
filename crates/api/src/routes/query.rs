//! Web-search question answering.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use openai_brain::preview;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::state::AppState;

/// `?question=` parameter shared by the question endpoints.
#[derive(Debug, Deserialize)]
pub struct QuestionParams {
    pub question: String,
}

/// Successful answer to a question.
#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub question: String,
    pub answer: String,
}

/// `GET /query/?question=...`
pub async fn query(
    State(state): State<AppState>,
    params: std::result::Result<Query<QuestionParams>, QueryRejection>,
) -> Result<Json<AnswerResponse>> {
    let Query(QuestionParams { question }) = params?;
    info!("Received query: {}...", preview(&question));

    let answer = state.brain.answer(&question).await?;

    Ok(Json(AnswerResponse { question, answer }))
}

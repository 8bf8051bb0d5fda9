//! Axum route handlers for the Answer API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::exchange::InterviewExchange;
use crate::models::profile::ProfileFields;
use crate::profile::assemble;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    #[serde(default)]
    pub profile: ProfileFields,
    /// Absent is treated like blank and rejected by the handler.
    #[serde(default)]
    pub question: String,
}

/// POST /api/v1/answers
///
/// Assembles the profile, asks the completion service once, and returns the pair.
pub async fn handle_generate_answer(
    State(state): State<AppState>,
    Json(request): Json<AnswerRequest>,
) -> Result<Json<InterviewExchange>, AppError> {
    if request.question.trim().is_empty() {
        return Err(AppError::Validation("question cannot be empty".to_string()));
    }

    let profile = assemble(&request.profile);
    let answer = state.generator.generate(&request.question, &profile).await?;

    Ok(Json(InterviewExchange {
        question: request.question,
        answer,
    }))
}

//! Axum route handlers for the Export API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::exchange::{ExportedDocument, InterviewExchange};
use crate::state::AppState;

/// POST /api/v1/exports
///
/// Writes the pair to a timestamped PDF in the export directory and returns its name.
pub async fn handle_export(
    State(state): State<AppState>,
    Json(exchange): Json<InterviewExchange>,
) -> Result<Json<ExportedDocument>, AppError> {
    if exchange.question.trim().is_empty() {
        return Err(AppError::Validation("question cannot be empty".to_string()));
    }
    if exchange.answer.trim().is_empty() {
        return Err(AppError::Validation("answer cannot be empty".to_string()));
    }

    let exporter = state.exporter.clone();
    let document = tokio::task::spawn_blocking(move || {
        exporter.export(&exchange.question, &exchange.answer)
    })
    .await
    .map_err(anyhow::Error::from)??;

    Ok(Json(document))
}

//! Axum route handlers for the Profile API.

use axum::Json;

use crate::models::profile::{ProfileFields, ProfileRecord};
use crate::profile::{assemble, defaults::default_fields};

/// GET /api/v1/profile/default
///
/// Returns the pre-filled form values.
pub async fn handle_default_profile() -> Json<ProfileFields> {
    Json(default_fields())
}

/// POST /api/v1/profile/assemble
///
/// Returns the record exactly as it will be embedded in the system prompt.
pub async fn handle_assemble(Json(fields): Json<ProfileFields>) -> Json<ProfileRecord> {
    Json(assemble(&fields))
}

pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::export::handlers::handle_export;
use crate::generation::handlers::handle_generate_answer;
use crate::profile::handlers::{handle_assemble, handle_default_profile};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/profile/default", get(handle_default_profile))
        .route("/api/v1/profile/assemble", post(handle_assemble))
        .route("/api/v1/answers", post(handle_generate_answer))
        .route("/api/v1/exports", post(handle_export))
        .with_state(state)
}

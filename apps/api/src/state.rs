use crate::export::AnswerExporter;
use crate::generation::AnswerGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Holds no per-user data; every request carries its own profile and question.
#[derive(Clone)]
pub struct AppState {
    /// Completion-backed generator. The service behind it is swappable for tests.
    pub generator: AnswerGenerator,
    /// PDF exporter bound to the export directory (the working directory in production).
    pub exporter: AnswerExporter,
}

//! Answer generation: profile + question -> one completion request -> answer text.
//!
//! Exactly one request per call. Failures come back as `GenerationError`
//! unchanged; nothing is retried and nothing is cached.

use std::sync::Arc;

use tracing::info;

use crate::generation::prompts::build_system_prompt;
use crate::llm_client::{CompletionService, GenerationError};
use crate::models::profile::ProfileRecord;

/// Generates interview answers through an injected completion service.
#[derive(Clone)]
pub struct AnswerGenerator {
    service: Arc<dyn CompletionService>,
}

impl AnswerGenerator {
    pub fn new(service: Arc<dyn CompletionService>) -> Self {
        Self { service }
    }

    /// Returns the first completion's text verbatim.
    ///
    /// `question` must be non-empty; handlers reject blank questions before calling.
    pub async fn generate(
        &self,
        question: &str,
        profile: &ProfileRecord,
    ) -> Result<String, GenerationError> {
        debug_assert!(!question.is_empty(), "caller must reject empty questions");

        let system = build_system_prompt(profile)?;
        let answer = self.service.complete(&system, question).await?;

        info!(
            "Generated answer: question_chars={}, answer_chars={}",
            question.chars().count(),
            answer.chars().count()
        );
        Ok(answer)
    }
}

//! Writes a question/answer pair to `interview_answer_<YYYYMMDD_HHMMSS>.pdf`.
//!
//! File names have one-second resolution: two exports in the same second map
//! to the same name and the second silently replaces the first.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::info;

use crate::export::{pdf::render_document, ExportError};
use crate::layout::{layout_text, PageConfig};
use crate::models::exchange::{ExportedDocument, InterviewExchange};

const FILENAME_PREFIX: &str = "interview_answer_";
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// `interview_answer_<YYYYMMDD_HHMMSS>.pdf` for the given instant.
pub fn export_filename(at: &DateTime<Local>) -> String {
    format!("{FILENAME_PREFIX}{}.pdf", at.format(TIMESTAMP_FORMAT))
}

#[derive(Debug, Clone)]
pub struct AnswerExporter {
    output_dir: PathBuf,
    page_config: PageConfig,
}

impl AnswerExporter {
    pub fn new(output_dir: impl Into<PathBuf>, page_config: PageConfig) -> Self {
        Self {
            output_dir: output_dir.into(),
            page_config,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Renders and writes the document, stamped with the current local time.
    pub fn export(&self, question: &str, answer: &str) -> Result<ExportedDocument, ExportError> {
        self.export_at(question, answer, Local::now())
    }

    pub fn export_at(
        &self,
        question: &str,
        answer: &str,
        at: DateTime<Local>,
    ) -> Result<ExportedDocument, ExportError> {
        let exchange = InterviewExchange {
            question: question.to_string(),
            answer: answer.to_string(),
        };
        let pages = layout_text(&exchange.document_text(), &self.page_config);
        let mut doc = render_document(&pages, &self.page_config)?;

        let filename = export_filename(&at);
        let path = self.output_dir.join(&filename);
        doc.save(&path)
            .map_err(|source| ExportError::Write { path: path.clone(), source })?;

        info!("Exported answer to {} ({} page(s))", path.display(), pages.len());
        Ok(ExportedDocument { filename })
    }
}

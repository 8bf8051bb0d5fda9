use serde::{Deserialize, Serialize};

/// A question and the answer generated for it during one interaction.
///
/// Missing keys deserialize to empty strings; the export handler rejects blanks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterviewExchange {
    pub question: String,
    pub answer: String,
}

impl InterviewExchange {
    /// Document body as written to the PDF.
    pub fn document_text(&self) -> String {
        format!("Question: {}\n\nAnswer: {}", self.question, self.answer)
    }
}

/// Result of a successful export: the file name written in the export directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedDocument {
    pub filename: String,
}

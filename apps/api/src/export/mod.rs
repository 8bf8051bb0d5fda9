// Question/answer export to a paginated PDF in the export directory.
// Rendering and the file write are blocking; handlers run them via spawn_blocking.

pub mod exporter;
pub mod handlers;
pub mod pdf;

use std::path::PathBuf;

use thiserror::Error;

pub use exporter::AnswerExporter;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF rendering failed: {0}")]
    Render(#[from] lopdf::Error),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

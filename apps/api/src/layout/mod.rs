// Text layout for exported documents: glyph metrics, word-wrap, pagination.
// Pure and synchronous; the exporter calls it from a blocking task.

pub mod flow;
pub mod font_metrics;

// Re-export the public API consumed by the exporter.
pub use flow::{layout_text, PageLines};
pub use font_metrics::{default_page_config, FontFamily, PageConfig};

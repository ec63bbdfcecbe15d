// Service exports
pub mod export;
pub mod gemini;

pub use export::{file_name, DocumentExporter, ExportCapability, ExportError, DOCX_MIME_TYPE, EXPORT_UNAVAILABLE_WARNING};
pub use gemini::{GeminiClient, GeminiError};

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("PDF parse error: {0}")]
    PdfParse(String),

    #[error("EPUB parse error: {0}")]
    EpubParse(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Empty document: {0}")]
    EmptyDocument(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Raw text pulled from some source, ready for the transformer.
pub struct LoadedDocument {
    pub text: String,
    pub source: String,
}

pub mod clipboard;
pub mod epub;
pub mod pdf;
pub mod text;

/// Load a document from a path, dispatching on the file extension.
/// Plain text is the default for extensionless and `.txt`/`.md` files.
pub fn load_path(path: &str) -> Result<LoadedDocument, LoadError> {
    let lower = path.to_ascii_lowercase();
    if lower.ends_with(".pdf") {
        pdf::load(path)
    } else if lower.ends_with(".epub") {
        epub::load(path)
    } else if !lower.contains('.')
        || lower.ends_with(".txt")
        || lower.ends_with(".text")
        || lower.ends_with(".md")
    {
        text::load(path)
    } else {
        Err(LoadError::UnsupportedFormat(path.to_string()))
    }
}

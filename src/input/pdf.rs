use super::{LoadError, LoadedDocument};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load text from a PDF file using the pdf-extract crate, so exercise text
/// can come straight out of a handout.
pub fn load(path: &str) -> Result<LoadedDocument, LoadError> {
    let path_ref = Path::new(path);

    if !path_ref.exists() {
        return Err(LoadError::FileNotFound(path_ref.to_path_buf()));
    }

    let mut file = File::open(path_ref).map_err(|e| LoadError::PdfParse(e.to_string()))?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)
        .map_err(|e| LoadError::PdfParse(e.to_string()))?;

    let text = pdf_extract::extract_text_from_mem(&buffer)
        .map_err(|e| LoadError::PdfParse(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(LoadError::EmptyDocument(path.to_string()));
    }

    Ok(LoadedDocument {
        text,
        source: format!("pdf:{}", path_ref.display()),
    })
}

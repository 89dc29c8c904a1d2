use super::{LoadError, LoadedDocument};
use std::path::Path;

/// Load a plain UTF-8 text file.
pub fn load(path: &str) -> Result<LoadedDocument, LoadError> {
    let path_ref = Path::new(path);

    if !path_ref.exists() {
        return Err(LoadError::FileNotFound(path_ref.to_path_buf()));
    }

    let content = std::fs::read_to_string(path_ref)?;

    if content.trim().is_empty() {
        return Err(LoadError::EmptyDocument(path.to_string()));
    }

    Ok(LoadedDocument {
        text: content,
        source: format!("text:{}", path),
    })
}

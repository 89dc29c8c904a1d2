use super::{LoadError, LoadedDocument};

/// Read the clipboard as a document source.
pub fn load() -> Result<LoadedDocument, LoadError> {
    let text = read()?;
    Ok(LoadedDocument {
        text,
        source: "clipboard".to_string(),
    })
}

/// Read the current clipboard text. An empty clipboard is an error so a
/// failed paste never blanks the editor.
pub fn read() -> Result<String, LoadError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))?;
    if text.trim().is_empty() {
        return Err(LoadError::Clipboard("Clipboard is empty".to_string()));
    }
    Ok(text)
}

/// Store text on the clipboard.
pub fn write(text: &str) -> Result<(), LoadError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| LoadError::Clipboard(e.to_string()))
}

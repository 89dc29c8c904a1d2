use super::{LoadError, LoadedDocument};
use std::path::Path;

/// Load text from an EPUB file using the epub crate. Chapters are
/// concatenated with blank lines between them.
pub fn load(path: &str) -> Result<LoadedDocument, LoadError> {
    let path_ref = Path::new(path);

    if !path_ref.exists() {
        return Err(LoadError::FileNotFound(path_ref.to_path_buf()));
    }

    let mut doc =
        epub::doc::EpubDoc::new(path_ref).map_err(|e| LoadError::EpubParse(e.to_string()))?;

    let num_pages = doc.get_num_pages();

    if num_pages == 0 {
        return Err(LoadError::EpubParse("No chapters found in EPUB".to_string()));
    }

    let mut content = String::new();

    for page_idx in 0..num_pages {
        if !doc.set_current_page(page_idx) {
            continue;
        }

        if let Some((chapter_html, _mime)) = doc.get_current_str() {
            let plain_text = extract_plain_text(&chapter_html);
            if !plain_text.is_empty() {
                if !content.is_empty() {
                    content.push_str("\n\n");
                }
                content.push_str(&plain_text);
            }
        }
    }

    if content.is_empty() {
        return Err(LoadError::EpubParse(
            "No extractable text content found in EPUB".to_string(),
        ));
    }

    Ok(LoadedDocument {
        text: content,
        source: format!("epub:{}", path_ref.display()),
    })
}

/// Extract plain text from HTML content by removing tags.
fn extract_plain_text(html: &str) -> String {
    let mut result = String::new();
    let mut in_tag = false;

    for c in html.chars() {
        if c == '<' {
            in_tag = true;
        } else if c == '>' {
            in_tag = false;
        } else if !in_tag {
            result.push(c);
        }
    }

    result
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

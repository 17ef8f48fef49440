// PDF TEXT EXTRACTION - Pure Rust via lopdf
//
// All parsing is the library's job. A page with no text content
// contributes an empty string, indistinguishable from a page whose
// text is empty.
use anyhow::Result;
use lopdf::Document;
use std::path::Path;

/// Extract the text of every page, concatenated in page order with no
/// separator between pages.
pub fn extract_document_text(path: &Path) -> Result<String> {
    let document = Document::load(path)?;

    let mut text = String::new();
    for (page_num, _object_id) in document.get_pages() {
        text.push_str(&document.extract_text(&[page_num])?);
    }

    Ok(text)
}

pub fn get_page_count(path: &Path) -> Result<usize> {
    let document = Document::load(path)?;
    Ok(document.get_pages().len())
}

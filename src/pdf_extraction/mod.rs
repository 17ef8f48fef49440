// PDF extraction module
pub mod basic;

pub use basic::{extract_document_text, get_page_count};

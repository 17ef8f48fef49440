// PDFDUMP - dump the text of every PDF in a directory to stdout
pub mod dump;
pub mod pdf_extraction;
pub mod scan;

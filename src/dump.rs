// The run loop: one printed block per matching file, failures reported
// inline without stopping the batch.
use anyhow::Result;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use crate::pdf_extraction;
use crate::scan;

const SEPARATOR: &str = "============================================================";

/// Dump every matching file in `dir` as a header/footer block on `out`.
///
/// Only a failure to list the directory (or to write to `out`) is
/// fatal. An unreadable or unparseable file becomes an `Error: ...`
/// body in its own block and the loop moves on.
pub fn dump_directory<W: Write>(out: &mut W, dir: &Path, ext: &str) -> Result<()> {
    let pdf_files = scan::find_pdfs_in_dir(dir, ext)?;
    log::debug!("{} matching files in {}", pdf_files.len(), dir.display());

    for pdf_file in &pdf_files {
        dump_file(out, pdf_file)?;
    }

    Ok(())
}

fn dump_file<W: Write>(out: &mut W, pdf_file: &Path) -> Result<()> {
    let name = pdf_file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    writeln!(out)?;
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "📄 ARCHIVO: {}", name)?;
    writeln!(out, "{}", SEPARATOR)?;

    let start = Instant::now();
    match pdf_extraction::extract_document_text(pdf_file) {
        Ok(text) => writeln!(out, "{}", text)?,
        Err(e) => writeln!(out, "Error: {}", e)?,
    }
    log::debug!("{} processed in {:?}", name, start.elapsed());

    writeln!(out)?;
    Ok(())
}

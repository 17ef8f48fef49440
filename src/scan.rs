// Directory scan - build the ordered file list once, up front
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Find all files with the given extension (case-insensitive, no dot)
/// directly inside `dir`, sorted by file name. Subdirectories are not
/// entered.
pub fn find_pdfs_in_dir(dir: &Path, ext: &str) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Cannot read directory {}", dir.display()))?;

    let mut pdf_files = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let path = entry.path();
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case(ext))
            .unwrap_or(false);
        if matches {
            pdf_files.push(path);
        }
    }

    pdf_files.sort();
    Ok(pdf_files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).unwrap();
    }

    #[test]
    fn empty_directory_yields_empty_list() {
        let dir = tempdir().unwrap();
        let files = find_pdfs_in_dir(dir.path(), "pdf").unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn files_come_back_in_filename_order() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "c.pdf");
        touch(dir.path(), "a.pdf");
        touch(dir.path(), "b.pdf");

        let files = find_pdfs_in_dir(dir.path(), "pdf").unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.pdf", "b.pdf", "c.pdf"]);
    }

    #[test]
    fn only_matching_extension_is_kept() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "report.pdf");
        touch(dir.path(), "REPORT2.PDF");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "pdf"); // no extension at all

        let files = find_pdfs_in_dir(dir.path(), "pdf").unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn subdirectories_are_skipped() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("nested.pdf")).unwrap();
        touch(dir.path(), "real.pdf");

        let files = find_pdfs_in_dir(dir.path(), "pdf").unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name().unwrap(), "real.pdf");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempdir().unwrap();
        let gone = dir.path().join("does-not-exist");
        assert!(find_pdfs_in_dir(&gone, "pdf").is_err());
    }
}

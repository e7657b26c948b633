//! Pipeline coordination for file processing.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::constants::EDF_EXTENSION;
use crate::error::Result;

/// Result of checking whether a file should be processed.
#[derive(Debug)]
pub enum ProcessCheck {
    /// File should be processed.
    Process,
    /// Skip - output already exists.
    SkipExists,
}

/// Determine the output directory for a file.
pub fn output_dir_for(input: &Path, explicit_output_dir: Option<&Path>) -> PathBuf {
    explicit_output_dir.map_or_else(
        || {
            input
                .parent()
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
        },
        Path::to_path_buf,
    )
}

/// The output stem for an input file (file name without extension).
pub fn output_stem_for(input: &Path) -> String {
    input.file_stem().map_or_else(
        || "output".to_string(),
        |s| s.to_string_lossy().into_owned(),
    )
}

/// Check if a file should be processed.
///
/// The first segment's output name (`stem_1.edf`) acts as the existence
/// marker: segment files are written in order, so its presence means a
/// previous run completed at least one segment.
pub fn should_process(input: &Path, output_dir: &Path, force: bool) -> ProcessCheck {
    if !force {
        let marker = output_dir.join(format!("{}_1.{EDF_EXTENSION}", output_stem_for(input)));
        if marker.exists() {
            return ProcessCheck::SkipExists;
        }
    }
    ProcessCheck::Process
}

/// Collect input files from paths (files and directories).
pub fn collect_input_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            if is_edf_file(path) {
                files.push(path.clone());
            }
        } else if path.is_dir() {
            collect_edf_files_recursive(path, &mut files)?;
        } else {
            warn!("Skipping non-existent path: {}", path.display());
        }
    }

    files.sort();
    Ok(files)
}

/// Recursively collect EDF files from a directory.
fn collect_edf_files_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            collect_edf_files_recursive(&path, files)?;
        } else if is_edf_file(&path) {
            files.push(path);
        }
    }

    Ok(())
}

/// Check if a file has the EDF extension.
fn is_edf_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(OsStr::new(EDF_EXTENSION)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_output_dir_for_with_explicit() {
        let input = Path::new("/data/scan.edf");
        let output = output_dir_for(input, Some(Path::new("/results")));
        assert_eq!(output, PathBuf::from("/results"));
    }

    #[test]
    fn test_output_dir_for_without_explicit() {
        let input = Path::new("/data/scan.edf");
        let output = output_dir_for(input, None);
        assert_eq!(output, PathBuf::from("/data"));
    }

    #[test]
    fn test_output_stem() {
        assert_eq!(output_stem_for(Path::new("/data/scan042.edf")), "scan042");
    }

    #[test]
    fn test_is_edf_file() {
        assert!(is_edf_file(Path::new("test.edf")));
        assert!(is_edf_file(Path::new("test.EDF")));
        assert!(!is_edf_file(Path::new("test.txt")));
        assert!(!is_edf_file(Path::new("edf")));
    }

    #[test]
    fn test_collect_input_files_recursive_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        std::fs::create_dir(&sub).unwrap();
        std::fs::write(dir.path().join("b.edf"), b"").unwrap();
        std::fs::write(sub.join("a.edf"), b"").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"").unwrap();

        let files = collect_input_files(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0] < files[1]);
    }

    #[test]
    fn test_should_process_skips_when_marker_exists() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("scan.edf");
        std::fs::write(&input, b"").unwrap();
        std::fs::write(dir.path().join("scan_1.edf"), b"").unwrap();

        assert!(matches!(
            should_process(&input, dir.path(), false),
            ProcessCheck::SkipExists
        ));
        assert!(matches!(
            should_process(&input, dir.path(), true),
            ProcessCheck::Process
        ));
    }
}

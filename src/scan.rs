//! Input discovery.
//!
//! Walks the input tree and yields the files worth trying to decode: regular
//! files with a `.jpg`, `.jpeg`, or `.png` extension (case-insensitive).
//! A symlink counts when its target is a regular file; symlinked directories
//! are not descended into. Everything else is passed over silently.
//!
//! The walk is lazy: [`discover`] returns an iterator, so files are found
//! one at a time as the caller processes them, and calling it again starts
//! a fresh walk. Entries are visited in file-name order within each
//! directory so runs are reproducible.
//!
//! Any error from the walk itself (unreadable root, unreadable
//! subdirectory) surfaces as a [`ScanError`] item; callers treat it as
//! fatal for the whole run.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Error walking the input directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Input is not a directory: {0}")]
    NotADirectory(PathBuf),
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// A candidate input file found under the input root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
}

/// Whether the path has one of the accepted image extensions.
pub fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Fail early if the input root is missing or is a plain file.
pub fn check_root(root: &Path) -> Result<(), ScanError> {
    if root.is_dir() {
        Ok(())
    } else if root.exists() {
        Err(ScanError::NotADirectory(root.to_path_buf()))
    } else {
        // Let walkdir produce the underlying IO error for a missing root
        WalkDir::new(root)
            .into_iter()
            .find_map(Result::err)
            .map_or(Ok(()), |e| Err(ScanError::Walk(e)))
    }
}

/// Lazily enumerate candidate image files under `root`.
pub fn discover(root: &Path) -> impl Iterator<Item = Result<SourceFile, ScanError>> + use<> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Err(e) => Some(Err(ScanError::Walk(e))),
            Ok(entry) if is_file_or_link_to_file(&entry) && has_image_extension(entry.path()) => {
                Some(Ok(SourceFile {
                    path: entry.into_path(),
                }))
            }
            Ok(_) => None,
        })
}

fn is_file_or_link_to_file(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

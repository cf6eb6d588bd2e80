//! Batch processing: the per-file pipeline and the run loop around it.
//!
//! ## Per-file pipeline
//!
//! ```text
//! read → decode → dispatch → fit to width → encode → mkdir -p → write
//! ```
//!
//! Dispatch uses the format detected from the file's content. JPEG and PNG
//! continue down the pipeline; anything else (a WebP renamed to `.jpg`, say)
//! stops there and is reported as skipped. Encoding happens before anything
//! touches the output tree, so a file that fails or is skipped leaves no
//! trace in the output directory.
//!
//! ## Errors
//!
//! - A [`ProcessError`] affects only its own file. The run loop records it as
//!   [`FileOutcome::Failed`] and moves on.
//! - A [`RunError`] (traversal failure, output root not creatable) stops the
//!   run.
//!
//! ## Output Structure
//!
//! ```text
//! input/                    output/
//! ├── photo.jpg        →    ├── photo.jpg        (≤ 1920 wide, ≤ budget)
//! ├── notes.txt             ├── trips/
//! └── trips/                │   └── icon.png     (lossless)
//!     └── icon.png     →
//! ```
//!
//! Files are processed one at a time, in walk order. Each file's reports are
//! sent on the optional channel as soon as the file is done.

use crate::config::ShrinkConfig;
use crate::imaging::{BackendError, ImageBackend, RustBackend, encode_as, fit_to_width};
use crate::scan::{self, ScanError, SourceFile};
use crate::types::ImageKind;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Error opening {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Error decoding {path}: {source}")]
    Decode {
        path: PathBuf,
        source: BackendError,
    },
    #[error("Error determining relative path for {0}")]
    RelativePath(PathBuf),
    #[error("Error creating output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Error compressing {path}: {source}")]
    Encode {
        path: PathBuf,
        source: BackendError,
    },
    #[error("Error writing output file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("Error creating output directory {path}: {source}")]
    OutputRoot {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// What happened to one input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    Written {
        output: String,
        kind: ImageKind,
        /// Decoded dimensions (width, height)
        original: (u32, u32),
        /// Written dimensions (width, height)
        dimensions: (u32, u32),
        bytes: u64,
        #[serde(skip_serializing_if = "Option::is_none")]
        quality: Option<u8>,
        met_budget: bool,
    },
    /// Decoded fine, but not a format we re-encode.
    Skipped { format: String },
    Failed { error: String },
}

/// Per-file entry of a run, sent as a progress event and kept in the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    /// Path relative to the input root, or the full path if that fails.
    pub source: String,
    #[serde(flatten)]
    pub outcome: FileOutcome,
}

/// Everything a run did, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub written: usize,
    pub skipped: usize,
    pub failed: usize,
    pub files: Vec<FileReport>,
}

impl RunSummary {
    pub fn push(&mut self, report: FileReport) {
        match report.outcome {
            FileOutcome::Written { .. } => self.written += 1,
            FileOutcome::Skipped { .. } => self.skipped += 1,
            FileOutcome::Failed { .. } => self.failed += 1,
        }
        self.files.push(report);
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Process every image under the configured input root.
pub fn run(config: &ShrinkConfig, events: Option<Sender<FileReport>>) -> Result<RunSummary, RunError> {
    run_with_backend(&RustBackend::new(), config, events)
}

/// Run with a specific backend (allows testing with mock).
pub fn run_with_backend(
    backend: &impl ImageBackend,
    config: &ShrinkConfig,
    events: Option<Sender<FileReport>>,
) -> Result<RunSummary, RunError> {
    scan::check_root(&config.input_dir)?;
    std::fs::create_dir_all(&config.output_dir).map_err(|source| RunError::OutputRoot {
        path: config.output_dir.clone(),
        source,
    })?;

    let mut summary = RunSummary::default();
    for source in scan::discover(&config.input_dir) {
        let source = source?;
        let outcome = match process_file(backend, &source, config) {
            Ok(outcome) => outcome,
            Err(e) => FileOutcome::Failed {
                error: e.to_string(),
            },
        };
        let report = FileReport {
            source: display_relative(&config.input_dir, &source.path),
            outcome,
        };
        if let Some(ref tx) = events {
            // A gone receiver only means nobody is printing
            tx.send(report.clone()).ok();
        }
        summary.push(report);
    }

    Ok(summary)
}

/// Run the pipeline for a single file.
///
/// Returns `Ok(Skipped)` for decodable non-JPEG/PNG content; every other
/// early exit is an error.
pub fn process_file(
    backend: &impl ImageBackend,
    source: &SourceFile,
    config: &ShrinkConfig,
) -> Result<FileOutcome, ProcessError> {
    let path = &source.path;
    let data = std::fs::read(path).map_err(|source| ProcessError::Read {
        path: path.clone(),
        source,
    })?;

    let decoded = backend.decode(&data).map_err(|source| ProcessError::Decode {
        path: path.clone(),
        source,
    })?;
    drop(data);

    let Some(kind) = ImageKind::from_format(decoded.format) else {
        return Ok(FileOutcome::Skipped {
            format: format!("{:?}", decoded.format),
        });
    };

    let original = (decoded.image.width(), decoded.image.height());
    let image = fit_to_width(backend, decoded.image, config.max_width);
    let dimensions = (image.width(), image.height());

    let output_path = output_path_for(&config.input_dir, &config.output_dir, path)?;

    let encoded =
        encode_as(backend, &image, kind, config.budget_bytes()).map_err(|source| {
            ProcessError::Encode {
                path: path.clone(),
                source,
            }
        })?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ProcessError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(&output_path, &encoded.bytes).map_err(|source| ProcessError::Write {
        path: output_path.clone(),
        source,
    })?;

    Ok(FileOutcome::Written {
        output: output_path.to_string_lossy().into_owned(),
        kind,
        original,
        dimensions,
        bytes: encoded.bytes.len() as u64,
        quality: encoded.quality.map(|q| q.value()),
        met_budget: encoded.met_budget,
    })
}

/// Mirror `path` from under `input_root` to under `output_root`.
pub fn output_path_for(
    input_root: &Path,
    output_root: &Path,
    path: &Path,
) -> Result<PathBuf, ProcessError> {
    let relative = path
        .strip_prefix(input_root)
        .map_err(|_| ProcessError::RelativePath(path.to_path_buf()))?;
    if relative.as_os_str().is_empty() {
        return Err(ProcessError::RelativePath(path.to_path_buf()));
    }
    Ok(output_root.join(relative))
}

fn display_relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}

//! CLI output formatting.
//!
//! Each report has a `format_*` function that returns lines (pure, no I/O,
//! unit tested) and `main` prints them. Every file follows the same
//! two-level pattern: its path relative to the input root as the header,
//! then indented context lines.
//!
//! ```text
//! ==> Shrinking photos → out (max width 1920px, JPEG budget 1000 KB)
//! trips/photo.jpg
//!     4000x3000 → 1920x1440
//!     jpeg q75: 498.2 KB
//! icon.png
//!     100x100
//!     png: 3.1 KB
//! broken.jpg
//!     error: Error decoding in/broken.jpg: Decode failed: ...
//! ==> Done: 2 written, 0 skipped, 1 failed
//! ```

use crate::config::ShrinkConfig;
use crate::process::{FileOutcome, FileReport, RunSummary};

/// Human-readable size in KB (1024 bytes), one decimal.
fn format_size(bytes: u64) -> String {
    format!("{:.1} KB", bytes as f64 / 1024.0)
}

fn format_dimensions((width, height): (u32, u32)) -> String {
    format!("{}x{}", width, height)
}

/// Header line printed before processing starts.
pub fn format_banner(config: &ShrinkConfig) -> String {
    format!(
        "==> Shrinking {} \u{2192} {} (max width {}px, JPEG budget {} KB)",
        config.input_dir.display(),
        config.output_dir.display(),
        config.max_width,
        config.target_size_kb
    )
}

/// Format the outcome of one file as display lines.
pub fn format_file_report(report: &FileReport) -> Vec<String> {
    let mut lines = vec![report.source.clone()];

    match &report.outcome {
        FileOutcome::Written {
            kind,
            original,
            dimensions,
            bytes,
            quality,
            met_budget,
            ..
        } => {
            if original == dimensions {
                lines.push(format!("    {}", format_dimensions(*dimensions)));
            } else {
                lines.push(format!(
                    "    {} \u{2192} {}",
                    format_dimensions(*original),
                    format_dimensions(*dimensions)
                ));
            }
            let encoding = match quality {
                Some(q) => format!("{} q{}", kind, q),
                None => kind.to_string(),
            };
            let over = if *met_budget { "" } else { " (over budget)" };
            lines.push(format!("    {}: {}{}", encoding, format_size(*bytes), over));
        }
        FileOutcome::Skipped { format } => {
            lines.push(format!("    skipped: unsupported format ({})", format));
        }
        FileOutcome::Failed { error } => {
            lines.push(format!("    error: {}", error));
        }
    }

    lines
}

/// Closing line with totals.
pub fn format_summary(summary: &RunSummary) -> String {
    format!(
        "==> Done: {} written, {} skipped, {} failed",
        summary.written, summary.skipped, summary.failed
    )
}

/// Print one file's report to stdout.
pub fn print_file_report(report: &FileReport) {
    for line in format_file_report(report) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ImageKind;
    use std::path::PathBuf;

    fn written(original: (u32, u32), dimensions: (u32, u32), met_budget: bool) -> FileReport {
        FileReport {
            source: "trips/photo.jpg".to_string(),
            outcome: FileOutcome::Written {
                output: "out/trips/photo.jpg".to_string(),
                kind: ImageKind::Jpeg,
                original,
                dimensions,
                bytes: 510_157,
                quality: Some(75),
                met_budget,
            },
        }
    }

    #[test]
    fn format_size_one_decimal() {
        assert_eq!(format_size(0), "0.0 KB");
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(510_157), "498.2 KB");
    }

    #[test]
    fn banner_shows_settings() {
        let config = ShrinkConfig {
            input_dir: PathBuf::from("photos"),
            output_dir: PathBuf::from("out"),
            target_size_kb: 500,
            max_width: 1280,
        };
        assert_eq!(
            format_banner(&config),
            "==> Shrinking photos \u{2192} out (max width 1280px, JPEG budget 500 KB)"
        );
    }

    #[test]
    fn resized_jpeg_lines() {
        let lines = format_file_report(&written((4000, 3000), (1920, 1440), true));
        assert_eq!(
            lines,
            vec![
                "trips/photo.jpg",
                "    4000x3000 \u{2192} 1920x1440",
                "    jpeg q75: 498.2 KB",
            ]
        );
    }

    #[test]
    fn unresized_image_shows_single_dimension() {
        let lines = format_file_report(&written((800, 600), (800, 600), true));
        assert_eq!(lines[1], "    800x600");
    }

    #[test]
    fn over_budget_is_flagged() {
        let lines = format_file_report(&written((800, 600), (800, 600), false));
        assert_eq!(lines[2], "    jpeg q75: 498.2 KB (over budget)");
    }

    #[test]
    fn png_has_no_quality() {
        let report = FileReport {
            source: "icon.png".to_string(),
            outcome: FileOutcome::Written {
                output: "out/icon.png".to_string(),
                kind: ImageKind::Png,
                original: (100, 100),
                dimensions: (100, 100),
                bytes: 3174,
                quality: None,
                met_budget: true,
            },
        };
        assert_eq!(
            format_file_report(&report),
            vec!["icon.png", "    100x100", "    png: 3.1 KB"]
        );
    }

    #[test]
    fn skipped_and_failed_lines() {
        let skipped = FileReport {
            source: "odd.jpg".to_string(),
            outcome: FileOutcome::Skipped {
                format: "WebP".to_string(),
            },
        };
        assert_eq!(
            format_file_report(&skipped)[1],
            "    skipped: unsupported format (WebP)"
        );

        let failed = FileReport {
            source: "broken.jpg".to_string(),
            outcome: FileOutcome::Failed {
                error: "Error decoding broken.jpg: bad".to_string(),
            },
        };
        assert_eq!(
            format_file_report(&failed),
            vec!["broken.jpg", "    error: Error decoding broken.jpg: bad"]
        );
    }

    #[test]
    fn summary_line_counts() {
        let summary = RunSummary {
            written: 3,
            skipped: 1,
            failed: 2,
            files: Vec::new(),
        };
        assert_eq!(
            format_summary(&summary),
            "==> Done: 3 written, 1 skipped, 2 failed"
        );
    }
}

//! Console output formatting for conversion runs.
//!
//! One line per processed file, in walk order, then a summary:
//!
//! ```text
//! images/a/cat.png → images_optimized/a/cat.jpg (+ thumb, + webp)
//! warning: skipping empty file images/b/stub.jpg
//! error: images/c/broken.jpg: failed to decode images/c/broken.jpg: ...
//!
//! Converted 9 images, skipped 1, 1 failures
//! ```
//!
//! Files ignored for their extension print nothing; an image tree is full
//! of sidecar files nobody wants reported.
//!
//! # Architecture
//!
//! Each event has a `format_*` function returning the line for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure,
//! with no I/O and no side effects.

use crate::process::{ConvertedFile, FileOutcome, FileRecord, RunSummary, SkipReason};
use std::path::Path;

// ============================================================================
// Per-file lines
// ============================================================================

/// Format the console line for one walked file, if it gets one.
///
/// Conversions show the hi-res output plus markers for the other artifacts,
/// empty files warn, failures name the error. Files ignored for their
/// extension return `None`.
pub fn format_file_record(record: &FileRecord) -> Option<String> {
    match &record.outcome {
        FileOutcome::Converted(converted) => Some(converted_line(&record.source, converted)),
        FileOutcome::Skipped(SkipReason::UnsupportedExtension) => None,
        FileOutcome::Skipped(SkipReason::EmptySource) => Some(format!(
            "warning: skipping empty file {}",
            record.source.display()
        )),
        FileOutcome::Failed(error) => {
            Some(format!("error: {}: {}", record.source.display(), error))
        }
    }
}

fn converted_line(source: &Path, converted: &ConvertedFile) -> String {
    let extras = if converted.alternate.is_some() {
        "(+ thumb, + webp)"
    } else {
        "(+ thumb)"
    };
    format!(
        "{} \u{2192} {} {}",
        source.display(),
        converted.hi_res.display(),
        extras
    )
}

/// Print one file's console line, if it gets one.
pub fn print_file_record(record: &FileRecord) {
    if let Some(line) = format_file_record(record) {
        println!("{}", line);
    }
}

// ============================================================================
// Run summary
// ============================================================================

/// Format the end-of-run summary line.
pub fn format_summary(summary: &RunSummary) -> String {
    format!(
        "Converted {} images, skipped {}, {} failures",
        summary.converted(),
        summary.skipped(),
        summary.failed()
    )
}

/// Print the end-of-run summary, separated from the per-file lines.
pub fn print_summary(summary: &RunSummary) {
    println!();
    println!("{}", format_summary(summary));
}

// ============================================================================
// Tests
// ============================================================================

//! Tree walking and per-file conversion.
//!
//! For each accepted source image the pipeline decodes, normalizes the color
//! mode, applies the width caps, and writes the derivatives into a mirrored
//! output tree.
//!
//! ## Output Structure
//!
//! ```text
//! images_optimized/
//! ├── summer/
//! │   ├── beach.jpg          # hi-res (max 1600px wide, q85, progressive)
//! │   └── beach.webp         # alternate (q80, from the hi-res pixels)
//! └── thumbs/
//!     └── summer/
//!         └── beach.jpg      # thumbnail (max 400px wide, q70)
//! ```
//!
//! ## Failure containment
//!
//! One bad file never aborts the batch. Every walked file gets an explicit
//! [`FileOutcome`] (converted, skipped, or failed with the error), collected
//! into a [`RunSummary`]. The only fatal errors are the ones that occur
//! before any per-file work: failing to create the output or thumbnail
//! roots.

use crate::config::ConvertConfig;
use crate::imaging::{
    CodecError, DecodedImage, Quality, downscale_to_width, encode_jpeg, encode_webp, load,
    normalize_mode,
};
use crate::output;
use crate::paths::{ArtifactKind, artifact_path, has_supported_extension};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Why a file was skipped rather than converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Extension not in the accepted list. Not an error; trees routinely
    /// hold sidecar files.
    UnsupportedExtension,
    /// Zero-byte source, almost always a truncated upload.
    EmptySource,
}

/// Paths written for one converted source image.
#[derive(Debug, Clone)]
pub struct ConvertedFile {
    pub hi_res: PathBuf,
    pub thumbnail: PathBuf,
    pub alternate: Option<PathBuf>,
}

/// What happened to one file encountered during the walk.
#[derive(Debug)]
pub enum FileOutcome {
    Converted(ConvertedFile),
    Skipped(SkipReason),
    Failed(ConvertError),
}

/// One walked file and its outcome.
#[derive(Debug)]
pub struct FileRecord {
    pub source: PathBuf,
    pub outcome: FileOutcome,
}

/// Everything a run did, in walk order.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub records: Vec<FileRecord>,
}

impl RunSummary {
    pub fn converted(&self) -> usize {
        self.count(|outcome| matches!(outcome, FileOutcome::Converted(_)))
    }

    pub fn skipped(&self) -> usize {
        self.count(|outcome| matches!(outcome, FileOutcome::Skipped(_)))
    }

    pub fn failed(&self) -> usize {
        self.count(|outcome| matches!(outcome, FileOutcome::Failed(_)))
    }

    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.records
            .iter()
            .filter(|record| pred(&record.outcome))
            .count()
    }
}

/// Convert one candidate file, writing every artifact it produces.
///
/// `relative` is the source path relative to the tree root; it decides where
/// outputs land. Skip checks run first: unsupported extensions and zero-byte
/// files produce no output. Everything after that is a real conversion
/// attempt whose errors are captured in the outcome, never propagated.
pub fn convert_file(source: &Path, relative: &Path, config: &ConvertConfig) -> FileOutcome {
    if !has_supported_extension(source, &config.extensions) {
        log::debug!("ignoring {}: unsupported extension", source.display());
        return FileOutcome::Skipped(SkipReason::UnsupportedExtension);
    }

    let size = match fs::metadata(source) {
        Ok(metadata) => metadata.len(),
        Err(error) => return FileOutcome::Failed(ConvertError::Io(error)),
    };
    if size == 0 {
        return FileOutcome::Skipped(SkipReason::EmptySource);
    }

    match try_convert(source, relative, config) {
        Ok(converted) => FileOutcome::Converted(converted),
        Err(error) => FileOutcome::Failed(error),
    }
}

/// The fallible part of a single-file conversion.
///
/// Outputs written before a failure are left in place; the next run
/// overwrites them.
fn try_convert(
    source: &Path,
    relative: &Path,
    config: &ConvertConfig,
) -> Result<ConvertedFile, ConvertError> {
    let DecodedImage { pixels, metadata } = load(source, !config.strip_metadata)?;
    let normalized = normalize_mode(pixels);

    let hi_res = artifact_path(
        &config.output_root,
        &config.thumb_subdir,
        relative,
        ArtifactKind::HiRes,
    );
    let thumbnail = artifact_path(
        &config.output_root,
        &config.thumb_subdir,
        relative,
        ArtifactKind::Thumbnail,
    );
    if let Some(parent) = hi_res.parent() {
        fs::create_dir_all(parent)?;
    }
    if let Some(parent) = thumbnail.parent() {
        fs::create_dir_all(parent)?;
    }

    // Both derivatives scale from the normalized original, not from each
    // other. Metadata, when kept, goes to both JPEG outputs.
    let hi_pixels = downscale_to_width(&normalized, config.max_width);
    encode_jpeg(
        &hi_pixels,
        &hi_res,
        Quality::new(config.jpeg_quality),
        &metadata,
    )?;

    let thumb_pixels = downscale_to_width(&normalized, config.thumb_width);
    encode_jpeg(
        &thumb_pixels,
        &thumbnail,
        Quality::new(config.thumb_quality),
        &metadata,
    )?;

    // The WebP alternate shares the hi-res pixels, never its own resize.
    let alternate = if config.make_webp {
        let path = artifact_path(
            &config.output_root,
            &config.thumb_subdir,
            relative,
            ArtifactKind::Alternate,
        );
        encode_webp(&hi_pixels, &path, Quality::new(config.webp_quality))?;
        Some(path)
    } else {
        None
    };

    Ok(ConvertedFile {
        hi_res,
        thumbnail,
        alternate,
    })
}

/// Walk the source tree and convert everything under it.
///
/// Files are processed one at a time in walk order, each printing its
/// console line as it completes. A missing source root is not an error; the
/// walk just finds nothing. The returned summary lists every file touched.
pub fn run(config: &ConvertConfig) -> Result<RunSummary, ConvertError> {
    fs::create_dir_all(&config.output_root)?;
    fs::create_dir_all(config.output_root.join(&config.thumb_subdir))?;

    let mut summary = RunSummary::default();
    for entry in WalkDir::new(&config.source_root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                log::debug!("walk error under {}: {error}", config.source_root.display());
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let source = entry.path();
        let Ok(relative) = source.strip_prefix(&config.source_root) else {
            continue;
        };

        let record = FileRecord {
            source: source.to_path_buf(),
            outcome: convert_file(source, relative, config),
        };
        output::print_file_record(&record);
        summary.records.push(record);
    }
    Ok(summary)
}

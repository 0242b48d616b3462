//! Output path conventions for converted artifacts.
//!
//! A source file's path relative to the tree root decides where every
//! derivative lands. The rules live here as pure functions so they can be
//! tested without touching the filesystem.

use std::path::{Path, PathBuf};

/// The artifacts a single source image can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Width-capped JPEG mirroring the source tree.
    HiRes,
    /// Small JPEG under the thumbnail subdirectory.
    Thumbnail,
    /// WebP alternate next to the hi-res JPEG.
    Alternate,
}

/// Compute the output path for one artifact of a source image.
///
/// `relative` is the source path relative to the tree root. Hi-res and
/// alternate outputs mirror it directly under `output_root`; thumbnails
/// mirror it under `output_root/<thumb_subdir>`. Only the final extension is
/// rewritten, so `trips/my.photo.png` becomes `trips/my.photo.jpg`.
pub fn artifact_path(
    output_root: &Path,
    thumb_subdir: &str,
    relative: &Path,
    kind: ArtifactKind,
) -> PathBuf {
    let (base, extension) = match kind {
        ArtifactKind::HiRes => (output_root.to_path_buf(), "jpg"),
        ArtifactKind::Thumbnail => (output_root.join(thumb_subdir), "jpg"),
        ArtifactKind::Alternate => (output_root.to_path_buf(), "webp"),
    };
    base.join(relative).with_extension(extension)
}

/// Check whether a file name carries one of the convertible extensions.
///
/// Matching is ASCII case-insensitive, so `IMG_0042.JPG` qualifies when
/// `jpg` is listed.
pub fn has_supported_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|known| ext.eq_ignore_ascii_case(known)))
}

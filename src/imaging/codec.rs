//! Decoding and encoding for the conversion pipeline.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode (JPEG, PNG)** | `image` with content-based format sniffing |
//! | **EXIF / ICC extraction** | `image::ImageDecoder` metadata accessors |
//! | **Encode JPEG** | `jpeg-encoder` (progressive, optimized Huffman, 4:2:0) |
//! | **Encode WebP** | `webp` (libwebp, compression method 6) |
//!
//! JPEG output goes through `jpeg-encoder` rather than the `image` crate
//! because the derivatives require progressive scan order and optimized
//! entropy coding, which the built-in encoder does not produce.

use super::params::Quality;
use image::{DynamicImage, ImageDecoder, ImageReader};
use jpeg_encoder::{ColorType, SamplingFactor};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("JPEG encode failed for {path}: {source}")]
    JpegEncode {
        path: PathBuf,
        source: jpeg_encoder::EncodingError,
    },

    #[error("WebP encode failed for {path}: {reason}")]
    WebpEncode { path: PathBuf, reason: String },

    #[error("{path} is {width}x{height}, beyond the 65535-pixel JPEG limit")]
    TooLarge {
        path: PathBuf,
        width: u32,
        height: u32,
    },
}

impl CodecError {
    fn decode(path: &Path) -> impl FnOnce(image::ImageError) -> Self {
        let path = path.to_path_buf();
        move |source| CodecError::Decode { path, source }
    }
}

/// EXIF and ICC payloads carried alongside decoded pixels so they can be
/// re-attached to outputs.
#[derive(Debug, Clone, Default)]
pub struct ImageMetadata {
    /// Raw TIFF-structured EXIF blob, without the JPEG APP1 identifier.
    pub exif: Option<Vec<u8>>,
    /// Raw ICC color profile.
    pub icc_profile: Option<Vec<u8>>,
}

impl ImageMetadata {
    pub fn is_empty(&self) -> bool {
        self.exif.is_none() && self.icc_profile.is_none()
    }
}

/// A decoded source image: pixel data plus whatever metadata the container
/// carried.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub pixels: DynamicImage,
    pub metadata: ImageMetadata,
}

/// Load and decode an image from disk.
///
/// The container format is sniffed from file content, not the extension, so
/// a PNG renamed to `.jpg` still decodes. With `keep_metadata` set, EXIF and
/// ICC payloads are extracted for later re-attachment; otherwise outputs
/// carry pixels only. Metadata extraction is best-effort: a malformed EXIF
/// segment never fails the decode.
pub fn load(path: &Path, keep_metadata: bool) -> Result<DecodedImage, CodecError> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let mut decoder = reader.into_decoder().map_err(CodecError::decode(path))?;

    let metadata = if keep_metadata {
        ImageMetadata {
            exif: decoder.exif_metadata().ok().flatten(),
            icc_profile: decoder.icc_profile().ok().flatten(),
        }
    } else {
        ImageMetadata::default()
    };

    let pixels = DynamicImage::from_decoder(decoder).map_err(CodecError::decode(path))?;
    Ok(DecodedImage { pixels, metadata })
}

/// Encode as progressive JPEG with optimized Huffman tables and 4:2:0 chroma
/// subsampling.
///
/// RGBA input is accepted; the encoder drops the alpha channel. Metadata
/// payloads, when present, are written as APP1 (EXIF) and APP2 (ICC)
/// segments. Images wider or taller than 65535 pixels cannot be represented
/// in JPEG and are rejected.
pub fn encode_jpeg(
    img: &DynamicImage,
    path: &Path,
    quality: Quality,
    metadata: &ImageMetadata,
) -> Result<(), CodecError> {
    let (width, height) = (img.width(), img.height());
    let (Ok(w), Ok(h)) = (u16::try_from(width), u16::try_from(height)) else {
        return Err(CodecError::TooLarge {
            path: path.to_path_buf(),
            width,
            height,
        });
    };

    let encode_err = |source| CodecError::JpegEncode {
        path: path.to_path_buf(),
        source,
    };

    let mut encoder =
        jpeg_encoder::Encoder::new_file(path, quality.value() as u8).map_err(encode_err)?;
    encoder.set_progressive(true);
    encoder.set_optimized_huffman_tables(true);
    encoder.set_sampling_factor(SamplingFactor::F_2_2);

    if let Some(icc) = &metadata.icc_profile {
        encoder.add_icc_profile(icc).map_err(encode_err)?;
    }
    if let Some(exif) = &metadata.exif {
        encoder
            .add_app_segment(1, &exif_app1_payload(exif))
            .map_err(encode_err)?;
    }

    match img {
        DynamicImage::ImageRgb8(buf) => encoder.encode(buf.as_raw(), w, h, ColorType::Rgb),
        DynamicImage::ImageRgba8(buf) => encoder.encode(buf.as_raw(), w, h, ColorType::Rgba),
        other => {
            let rgb = other.to_rgb8();
            encoder.encode(rgb.as_raw(), w, h, ColorType::Rgb)
        }
    }
    .map_err(encode_err)
}

/// EXIF lives in an APP1 segment prefixed with an identifier; decoders hand
/// back the bare TIFF blob, so the prefix is restored here.
fn exif_app1_payload(exif: &[u8]) -> Vec<u8> {
    let mut payload = Vec::with_capacity(exif.len() + 6);
    payload.extend_from_slice(b"Exif\0\0");
    payload.extend_from_slice(exif);
    payload
}

/// Encode as lossy WebP at maximum compression effort (method 6).
///
/// WebP outputs never carry metadata; they are alternates served next to the
/// JPEG, not archival copies.
pub fn encode_webp(img: &DynamicImage, path: &Path, quality: Quality) -> Result<(), CodecError> {
    let encode_err = |reason: String| CodecError::WebpEncode {
        path: path.to_path_buf(),
        reason,
    };

    let mut config = webp::WebPConfig::new()
        .map_err(|_| encode_err("libwebp rejected the encoder configuration".to_string()))?;
    config.quality = quality.value() as f32;
    config.method = 6;

    let (width, height) = (img.width(), img.height());
    let encoded = match img {
        DynamicImage::ImageRgb8(buf) => {
            webp::Encoder::from_rgb(buf.as_raw(), width, height).encode_advanced(&config)
        }
        DynamicImage::ImageRgba8(buf) => {
            webp::Encoder::from_rgba(buf.as_raw(), width, height).encode_advanced(&config)
        }
        other => {
            let rgb = other.to_rgb8();
            webp::Encoder::from_rgb(rgb.as_raw(), width, height).encode_advanced(&config)
        }
    }
    .map_err(|error| encode_err(format!("{error:?}")))?;

    fs::write(path, &*encoded)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

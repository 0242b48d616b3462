//! Image pipeline primitives: decoding, pixel transforms, and encoders.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode (JPEG, PNG)** | `image` with content sniffing |
//! | **Normalize mode** | `DynamicImage` conversions to RGB/RGBA |
//! | **Downscale** | Lanczos3 via `image::imageops` |
//! | **Encode JPEG** | `jpeg-encoder` (progressive, 4:2:0) |
//! | **Encode WebP** | `webp` (method 6) |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Params**: Encoder quality handling
//! - **Operations**: Pixel-buffer transforms between decode and encode
//! - **Codec**: Disk I/O, metadata extraction, and the actual encoders

mod calculations;
pub mod codec;
pub mod operations;
mod params;

pub use calculations::fit_to_width;
pub use codec::{CodecError, DecodedImage, ImageMetadata, encode_jpeg, encode_webp, load};
pub use operations::{downscale_to_width, normalize_mode};
pub use params::Quality;

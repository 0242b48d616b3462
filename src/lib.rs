//! # webready
//!
//! A batch converter that turns a directory tree of photos into web-ready
//! derivatives. Point it at a tree of JPEGs and PNGs and it writes, for each
//! one, a width-capped progressive JPEG, a small thumbnail for blur-up
//! placeholders, and optionally a WebP alternate, all mirrored into an
//! output tree. A one-shot offline build step, not a service.
//!
//! # Architecture: One Pass, Three Artifacts
//!
//! ```text
//! walk source tree
//!   per file: decode, normalize color mode, resize, encode
//!     ├── images_optimized/rel/path.jpg          hi-res (max 1600px, q85)
//!     ├── images_optimized/rel/path.webp         alternate (q80, optional)
//!     └── images_optimized/thumbs/rel/path.jpg   thumbnail (max 400px, q70)
//! ```
//!
//! The pass is strictly sequential and stateless: there is no manifest or
//! cache, and no skip-if-exists check. Every run reprocesses every file,
//! which keeps the mental model trivial and the output tree always
//! consistent with the source.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`process`] | Tree walk, per-file pipeline, outcome bookkeeping |
//! | [`imaging`] | Decode, normalize, resize, and encode primitives |
//! | [`paths`] | Pure path mapping from source to the three artifact kinds |
//! | [`config`] | TOML config loading, stock defaults, validation |
//! | [`output`] | Console line formatting for runs |
//!
//! # Design Decisions
//!
//! ## Failure Containment as Data
//!
//! One corrupt photo must never kill a thousand-file batch. Instead of a
//! catch-all handler, every walked file produces an explicit
//! [`process::FileOutcome`] (converted, skipped with a reason, or failed
//! with the error), and the driver aggregates them into a
//! [`process::RunSummary`]. The failure taxonomy is visible in the type
//! system and directly testable.
//!
//! ## Progressive JPEG via `jpeg-encoder`
//!
//! Decoding uses the `image` crate, but JPEG output goes through the
//! dedicated `jpeg-encoder` crate: the web derivatives want progressive scan
//! order, optimized Huffman tables, and 4:2:0 chroma subsampling, none of
//! which the `image` crate's baseline encoder produces. WebP output uses the
//! `webp` libwebp bindings for the same reason: the advanced encoder config
//! (compression method 6) is only exposed there.
//!
//! ## Mirrored Trees, No Manifest
//!
//! Output paths are a pure function of (output root, relative source path,
//! artifact kind), implemented in [`paths`]. Consumers locate derivatives by
//! recomputing the convention; there is no index file to generate or let
//! drift out of date.
//!
//! ## Metadata as a Side Channel
//!
//! Decoded pixel buffers carry no container metadata, so stripping (the
//! default) means simply not extracting it. With `--keep-metadata`, EXIF and
//! ICC payloads are pulled out during decode and re-attached to both JPEG
//! outputs. WebP alternates never carry metadata; they sit next to a JPEG
//! that does.

pub mod config;
pub mod imaging;
pub mod output;
pub mod paths;
pub mod process;

#[cfg(test)]
pub(crate) mod test_helpers;

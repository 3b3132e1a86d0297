//! High-level, ergonomic library API: convert an image file or in-memory
//! bytes into a preview and a packed MONO_VLSB bitmap. Prefer these
//! entrypoints over the low-level processing modules when embedding tobitmap.
use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::core::params::ConvertParams;
use crate::core::processing::pack::PackedBitmap;
use crate::core::processing::pipeline::process_raster;
use crate::core::processing::preview::GrayPreview;
use crate::error::{Error, Result};
use crate::io::writers::framebuf::{FramebufLiteral, framebuf_name, write_framebuf_literal};
use crate::io::writers::png::write_gray16_png;
use crate::io::{ImageBackend, StandardBackend};

/// Result of in-memory conversion
#[derive(Debug, Clone)]
pub struct ConvertedBitmap {
    /// Identifier used for the emitted literal
    pub name: String,
    pub preview: GrayPreview,
    pub packed: PackedBitmap,
}

impl ConvertedBitmap {
    pub fn width(&self) -> usize {
        self.packed.width
    }

    pub fn height(&self) -> usize {
        self.packed.height
    }

    /// Full `framebuf.FrameBuffer(...)` source text
    pub fn literal(&self) -> String {
        FramebufLiteral {
            name: &self.name,
            packed: &self.packed,
        }
        .to_string()
    }
}

/// Convert already-loaded image bytes with the given backend (no disk I/O)
pub fn convert_bytes_with<B: ImageBackend + ?Sized>(
    backend: &B,
    name: &str,
    bytes: &[u8],
    params: &ConvertParams,
) -> Result<ConvertedBitmap> {
    let raster = backend.decode(bytes)?;
    let thresholded = process_raster(backend, raster, params)?;
    Ok(ConvertedBitmap {
        name: name.to_string(),
        preview: thresholded.preview,
        packed: thresholded.packed,
    })
}

/// Read and convert an image file to in-memory buffers (no output files)
pub fn convert_to_buffer(input: &Path, params: &ConvertParams) -> Result<ConvertedBitmap> {
    convert_to_buffer_with(&StandardBackend, input, params)
}

pub fn convert_to_buffer_with<B: ImageBackend + ?Sized>(
    backend: &B,
    input: &Path,
    params: &ConvertParams,
) -> Result<ConvertedBitmap> {
    let bytes = fs::read(input).map_err(|source| Error::Open {
        path: input.to_path_buf(),
        source,
    })?;
    convert_bytes_with(backend, &framebuf_name(input), &bytes, params)
}

/// Convert `input`, write the preview PNG to `output`, then write the
/// literal to `out`. Nothing reaches `out` unless the preview was written.
pub fn convert_file(
    input: &Path,
    output: &Path,
    params: &ConvertParams,
    out: &mut dyn Write,
) -> Result<ConvertedBitmap> {
    convert_file_with(&StandardBackend, input, output, params, out)
}

pub fn convert_file_with<B: ImageBackend + ?Sized>(
    backend: &B,
    input: &Path,
    output: &Path,
    params: &ConvertParams,
    out: &mut dyn Write,
) -> Result<ConvertedBitmap> {
    let converted = convert_to_buffer_with(backend, input, params)?;

    write_gray16_png(backend, output, &converted.preview)?;
    info!(
        "Wrote {}x{} preview to {:?}",
        converted.width(),
        converted.height(),
        output
    );

    write_framebuf_literal(out, &converted.name, &converted.packed)?;
    Ok(converted)
}

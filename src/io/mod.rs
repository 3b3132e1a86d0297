//! I/O layer: decoding input bytes into a `Raster` and writing the two
//! outputs (preview PNG and framebuffer literal). Codec and resampler sit
//! behind `ImageBackend` so the threshold/pack core never touches them.
use std::io::Write;

use crate::core::processing::preview::GrayPreview;
use crate::core::processing::resize;
use crate::core::raster::Raster;
use crate::error::Result;
use crate::types::ResizeBox;

pub mod reader;
pub mod writers;

pub use reader::decode_raster;

/// Decode, resize-to-fit and encode capabilities used by the pipeline.
pub trait ImageBackend {
    /// Decode image bytes; the format is detected from content.
    fn decode(&self, bytes: &[u8]) -> Result<Raster>;

    /// Shrink to fit `bounds` keeping the aspect ratio; never upscales.
    fn resize_to_fit(&self, raster: &Raster, bounds: ResizeBox) -> Result<Raster>;

    /// Serialize the preview losslessly.
    fn encode_preview(&self, preview: &GrayPreview, out: &mut dyn Write) -> Result<()>;
}

/// `image` for decoding and PNG encoding, `fast_image_resize` for resampling.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardBackend;

impl ImageBackend for StandardBackend {
    fn decode(&self, bytes: &[u8]) -> Result<Raster> {
        decode_raster(bytes)
    }

    fn resize_to_fit(&self, raster: &Raster, bounds: ResizeBox) -> Result<Raster> {
        resize::resize_to_fit(raster, bounds)
    }

    fn encode_preview(&self, preview: &GrayPreview, out: &mut dyn Write) -> Result<()> {
        writers::png::encode_gray16_png(preview, out)
    }
}

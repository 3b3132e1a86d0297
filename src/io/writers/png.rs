use image::codecs::png::PngEncoder;
use image::{ImageBuffer, Luma};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::processing::preview::GrayPreview;
use crate::error::{Error, Result};
use crate::io::ImageBackend;

pub fn encode_gray16_png(preview: &GrayPreview, out: &mut dyn Write) -> Result<()> {
    let buffer: ImageBuffer<Luma<u16>, Vec<u16>> = ImageBuffer::from_raw(
        preview.width as u32,
        preview.height as u32,
        preview.pixels.clone(),
    )
    .ok_or_else(|| Error::InvalidArgument {
        arg: "preview",
        value: format!(
            "{} samples for a {}x{} image",
            preview.pixels.len(),
            preview.width,
            preview.height
        ),
    })?;
    buffer
        .write_with_encoder(PngEncoder::new(out))
        .map_err(Error::Encode)
}

/// Create `output` and encode the preview into it through `backend`.
pub fn write_gray16_png<B: ImageBackend + ?Sized>(
    backend: &B,
    output: &Path,
    preview: &GrayPreview,
) -> Result<()> {
    let file = File::create(output).map_err(|source| Error::Create {
        path: output.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    backend.encode_preview(preview, &mut writer)?;
    writer.flush()?;
    Ok(())
}

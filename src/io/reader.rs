use image::DynamicImage;
use tracing::info;

use crate::core::raster::Raster;
use crate::error::{Error, Result};
use crate::types::Rgba64;

/// Decode any registered format, sniffing it from the leading bytes.
pub fn decode_raster(bytes: &[u8]) -> Result<Raster> {
    let image = image::load_from_memory(bytes).map_err(Error::Decode)?;
    info!(
        "Decoded {}x{} image ({:?})",
        image.width(),
        image.height(),
        image.color()
    );
    raster_from_image(&image)
}

/// Widen to 16-bit RGBA and premultiply by alpha.
pub fn raster_from_image(image: &DynamicImage) -> Result<Raster> {
    let rgba = image.to_rgba16();
    let (cols, rows) = rgba.dimensions();
    let pixels = rgba
        .pixels()
        .map(|p| {
            let [r, g, b, a] = p.0;
            Rgba64::from_straight(r, g, b, a)
        })
        .collect();
    Raster::from_pixels(cols as usize, rows as usize, pixels)
}

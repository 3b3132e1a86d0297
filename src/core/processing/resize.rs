use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use tracing::info;

use crate::core::raster::Raster;
use crate::error::{Error, Result};
use crate::types::{ResizeBox, Rgba64};

/// Target dimensions for fitting `width`x`height` into `bounds` with the
/// aspect ratio kept. None when the image already fits; never upscales.
pub fn fit_dimensions(width: u32, height: u32, bounds: ResizeBox) -> Option<(u32, u32)> {
    let ResizeBox {
        max_width,
        max_height,
    } = bounds;

    if max_width >= width && max_height >= height {
        return None;
    }

    let (mut new_width, mut new_height) = (width, height);
    if width > max_width {
        new_height = ((u64::from(height) * u64::from(max_width)) / u64::from(width)).max(1) as u32;
        new_width = max_width;
    }
    if new_height > max_height {
        new_width =
            ((u64::from(new_width) * u64::from(max_height)) / u64::from(new_height)).max(1) as u32;
        new_height = max_height;
    }
    Some((new_width, new_height))
}

pub fn resize_rgba64_image(
    raster: &Raster,
    target_cols: u32,
    target_rows: u32,
) -> Result<Raster> {
    // Samples are premultiplied already
    let resize_options = ResizeOptions::new()
        .resize_alg(ResizeAlg::Convolution(FilterType::Mitchell))
        .use_alpha(false);
    let mut resizer = Resizer::new();

    let mut src_bytes = Vec::with_capacity(raster.width() * raster.height() * 8);
    for px in raster.pixels().iter() {
        for v in [px.r, px.g, px.b, px.a] {
            src_bytes.extend_from_slice(&v.to_ne_bytes());
        }
    }

    let src_image = Image::from_vec_u8(
        raster.width() as u32,
        raster.height() as u32,
        src_bytes,
        PixelType::U16x4,
    )
    .map_err(Error::resize)?;
    let mut dst_image = Image::new(target_cols, target_rows, PixelType::U16x4);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::resize)?;

    let pixels = dst_image
        .into_vec()
        .chunks_exact(8)
        .map(|c| {
            Rgba64::new(
                u16::from_ne_bytes([c[0], c[1]]),
                u16::from_ne_bytes([c[2], c[3]]),
                u16::from_ne_bytes([c[4], c[5]]),
                u16::from_ne_bytes([c[6], c[7]]),
            )
        })
        .collect();
    Raster::from_pixels(target_cols as usize, target_rows as usize, pixels)
}

/// Thumbnail resize: shrink to fit `bounds`, or return the raster unchanged.
pub fn resize_to_fit(raster: &Raster, bounds: ResizeBox) -> Result<Raster> {
    let (cols, rows) = (raster.width() as u32, raster.height() as u32);
    match fit_dimensions(cols, rows, bounds) {
        Some((new_cols, new_rows)) => {
            info!(
                "Original size: {}x{}, New size: {}x{}",
                cols, rows, new_cols, new_rows
            );
            resize_rgba64_image(raster, new_cols, new_rows)
        }
        None => {
            info!(
                "Image {}x{} already fits within {}x{}, keeping original dimensions",
                cols, rows, bounds.max_width, bounds.max_height
            );
            Ok(raster.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(w: u32, h: u32) -> ResizeBox {
        ResizeBox::new(w, h).unwrap()
    }

    #[test]
    fn fitting_image_is_left_alone() {
        assert_eq!(fit_dimensions(8, 8, bounds(16, 16)), None);
        assert_eq!(fit_dimensions(16, 16, bounds(16, 16)), None);
    }

    #[test]
    fn wide_image_is_bounded_by_width() {
        assert_eq!(fit_dimensions(100, 50, bounds(10, 10)), Some((10, 5)));
    }

    #[test]
    fn tall_image_is_bounded_by_height() {
        assert_eq!(fit_dimensions(50, 100, bounds(10, 10)), Some((5, 10)));
        assert_eq!(fit_dimensions(20, 5, bounds(100, 2)), Some((8, 2)));
    }

    #[test]
    fn extreme_aspect_keeps_at_least_one_pixel() {
        assert_eq!(fit_dimensions(1000, 1, bounds(10, 10)), Some((10, 1)));
        assert_eq!(fit_dimensions(1, 1000, bounds(10, 10)), Some((1, 10)));
    }

    #[test]
    fn resize_shrinks_into_box() {
        let white = Rgba64::new(0xffff, 0xffff, 0xffff, 0xffff);
        let raster = Raster::filled(32, 16, white);
        let resized = resize_to_fit(&raster, bounds(16, 16)).unwrap();
        assert_eq!((resized.width(), resized.height()), (16, 8));
        assert!(resized.pixels().iter().all(|px| px.a > 0xff00 && px.r > 0xff00));
    }

    #[test]
    fn resize_passthrough_is_identical() {
        let raster = Raster::filled(4, 4, Rgba64::gray(0x1234));
        assert_eq!(resize_to_fit(&raster, bounds(4, 8)).unwrap(), raster);
    }
}

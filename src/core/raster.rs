//! In-memory pixel grid produced by decoding and consumed by every later stage.
use ndarray::Array2;

use crate::error::{Error, Result};
use crate::types::Rgba64;

/// Decoded image, stored row-major as `[[row, col]]` premultiplied pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    pixels: Array2<Rgba64>,
}

impl Raster {
    pub fn filled(width: usize, height: usize, pixel: Rgba64) -> Self {
        Self {
            pixels: Array2::from_elem((height, width), pixel),
        }
    }

    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Rgba64>) -> Result<Self> {
        let len = pixels.len();
        let pixels = Array2::from_shape_vec((height, width), pixels).map_err(|_| {
            Error::InvalidArgument {
                arg: "pixels",
                value: format!("{} pixels for a {}x{} raster", len, width, height),
            }
        })?;
        Ok(Self { pixels })
    }

    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// Pixel at column `x`, row `y`; reads outside the grid return a transparent pixel.
    pub fn get(&self, x: usize, y: usize) -> Rgba64 {
        self.pixels
            .get((y, x))
            .copied()
            .unwrap_or(Rgba64::TRANSPARENT)
    }

    pub fn set(&mut self, x: usize, y: usize, pixel: Rgba64) {
        if let Some(slot) = self.pixels.get_mut((y, x)) {
            *slot = pixel;
        }
    }

    pub fn pixels(&self) -> &Array2<Rgba64> {
        &self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_reads_are_transparent() {
        let raster = Raster::filled(2, 3, Rgba64::gray(0xffff));
        assert_eq!(raster.width(), 2);
        assert_eq!(raster.height(), 3);
        assert_eq!(raster.get(1, 2), Rgba64::gray(0xffff));
        assert_eq!(raster.get(2, 0), Rgba64::TRANSPARENT);
        assert_eq!(raster.get(0, 3), Rgba64::TRANSPARENT);
    }

    #[test]
    fn from_pixels_is_row_major() {
        let pixels = vec![
            Rgba64::gray(1),
            Rgba64::gray(2),
            Rgba64::gray(3),
            Rgba64::gray(4),
            Rgba64::gray(5),
            Rgba64::gray(6),
        ];
        let raster = Raster::from_pixels(3, 2, pixels).unwrap();
        assert_eq!(raster.get(2, 0), Rgba64::gray(3));
        assert_eq!(raster.get(0, 1), Rgba64::gray(4));
    }

    #[test]
    fn from_pixels_rejects_length_mismatch() {
        let err = Raster::from_pixels(4, 4, vec![Rgba64::TRANSPARENT; 3]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { arg: "pixels", .. }));
    }
}

use crate::core::processing::threshold::BitPlane;

pub const PREVIEW_ON: u16 = u16::MAX;
pub const PREVIEW_OFF: u16 = 0;

/// Two-tone 16-bit grayscale image mirroring a bit plane pixel for pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayPreview {
    pub width: usize,
    pub height: usize,
    /// Row-major luma samples, either `PREVIEW_OFF` or `PREVIEW_ON`
    pub pixels: Vec<u16>,
}

impl GrayPreview {
    pub fn from_bits(plane: &BitPlane) -> Self {
        let (width, height) = (plane.width(), plane.height());
        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                pixels.push(if plane.get(x, y) { PREVIEW_ON } else { PREVIEW_OFF });
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u16> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }
}

use ndarray::Array2;
use tracing::debug;

use crate::core::params::ConvertParams;
use crate::core::raster::Raster;
use crate::types::{Channel, Rgba64};

/// Channel values used for the threshold decision.
///
/// The pixel is first converted to 16-bit gray, which reads back as
/// `(y, y, y, 0xffff)`. When that reads back black in r, g and b, all four
/// values come from the original pixel instead. Alpha-only and indexed
/// sources lose their information in the gray conversion and rely on this.
pub fn sampled_rgba(pixel: Rgba64) -> Rgba64 {
    let converted = Rgba64::gray(pixel.luminance());
    if converted.r == 0 && converted.g == 0 && converted.b == 0 {
        pixel
    } else {
        converted
    }
}

/// Hard cutoff on one channel. No rounding, no dithering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholder {
    pub channel: Channel,
    pub level: u32,
}

impl Thresholder {
    pub fn new(channel: Channel, level: u32) -> Self {
        Self { channel, level }
    }

    pub fn is_set(&self, pixel: Rgba64) -> bool {
        u32::from(sampled_rgba(pixel).channel(self.channel)) > self.level
    }
}

impl From<&ConvertParams> for Thresholder {
    fn from(params: &ConvertParams) -> Self {
        Self::new(params.channel, params.level)
    }
}

/// One bit per source pixel, same dimensions as the raster it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct BitPlane {
    bits: Array2<bool>,
}

impl BitPlane {
    pub fn from_raster(raster: &Raster, thresholder: &Thresholder) -> Self {
        let bits = raster.pixels().map(|&px| thresholder.is_set(px));
        let plane = Self { bits };
        debug!(
            "Thresholded {}x{} on channel {} at level {}: {} bits set",
            plane.width(),
            plane.height(),
            thresholder.channel,
            thresholder.level,
            plane.count_set()
        );
        plane
    }

    pub fn width(&self) -> usize {
        self.bits.ncols()
    }

    pub fn height(&self) -> usize {
        self.bits.nrows()
    }

    /// Bit at column `x`, row `y`; anything outside the plane is clear.
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.bits.get((y, x)).copied().unwrap_or(false)
    }

    pub fn count_set(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }
}

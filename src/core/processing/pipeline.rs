use tracing::info;

use crate::core::params::ConvertParams;
use crate::core::processing::pack::{PackedBitmap, pack_vertical_lsb};
use crate::core::processing::preview::GrayPreview;
use crate::core::processing::threshold::{BitPlane, Thresholder};
use crate::core::raster::Raster;
use crate::error::Result;
use crate::io::ImageBackend;

/// Both emitter inputs, derived from a single bit plane.
#[derive(Debug, Clone)]
pub struct Thresholded {
    pub bits: BitPlane,
    pub preview: GrayPreview,
    pub packed: PackedBitmap,
}

pub fn threshold_raster(raster: &Raster, params: &ConvertParams) -> Thresholded {
    let bits = BitPlane::from_raster(raster, &Thresholder::from(params));
    let preview = GrayPreview::from_bits(&bits);
    let packed = pack_vertical_lsb(&bits);
    Thresholded {
        bits,
        preview,
        packed,
    }
}

/// Optional resize followed by thresholding.
pub fn process_raster<B: ImageBackend + ?Sized>(
    backend: &B,
    raster: Raster,
    params: &ConvertParams,
) -> Result<Thresholded> {
    let raster = match params.resize {
        Some(bounds) => {
            info!(
                "Fitting image into {}x{}",
                bounds.max_width, bounds.max_height
            );
            backend.resize_to_fit(&raster, bounds)?
        }
        None => raster,
    };
    Ok(threshold_raster(&raster, params))
}

//! Core processing building blocks: the decoded raster, run parameters,
//! thresholding, bit packing, preview generation, and resize. These are
//! internal primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
pub mod raster;

use serde::{Deserialize, Serialize};

use crate::types::{Channel, ResizeBox};

/// Default cutoff: the midpoint of the 16-bit channel scale.
pub const DEFAULT_LEVEL: u32 = 32767;

/// Conversion parameters, built once at startup and passed down explicitly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertParams {
    pub channel: Channel,
    /// A channel value strictly above this level produces a set bit
    pub level: u32,
    /// Box to fit the image into; None means no resize
    pub resize: Option<ResizeBox>,
}

impl Default for ConvertParams {
    fn default() -> Self {
        Self {
            channel: Channel::Alpha,
            level: DEFAULT_LEVEL,
            resize: None,
        }
    }
}

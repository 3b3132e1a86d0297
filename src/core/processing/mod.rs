pub mod pack;
pub mod pipeline;
pub mod preview;
pub mod resize;
pub mod threshold;

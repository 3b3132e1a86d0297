pub mod framebuf;
pub mod png;

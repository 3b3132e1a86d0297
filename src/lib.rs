#![doc = r#"
tobitmap — turn a raster image into a 1-bit framebuffer literal for microcontrollers.

The conversion is a straight pipeline: decode an image (format sniffed from content),
optionally shrink it to fit a bounding box, threshold one color channel against a
16-bit level, and emit two artifacts:

- a two-tone 16-bit grayscale preview PNG of the thresholded result, and
- MicroPython source declaring a `framebuf.FrameBuffer` in `MONO_VLSB` layout
  (each byte covers 8 vertically stacked pixels of one column, bit 0 on top).

Quick start: convert a file
---------------------------
```rust,no_run
use std::path::Path;
use tobitmap::{convert_file, Channel, ConvertParams, ResizeBox};

fn main() -> tobitmap::Result<()> {
    let params = ConvertParams {
        channel: Channel::Alpha,
        level: 32767,
        resize: Some(ResizeBox::new(128, 64)?),
    };
    let stdout = std::io::stdout();
    convert_file(
        Path::new("logo.png"),
        Path::new("out.png"),
        &params,
        &mut stdout.lock(),
    )?;
    Ok(())
}
```

Convert in-memory
-----------------
```rust,no_run
use std::path::Path;
use tobitmap::{convert_to_buffer, ConvertParams};

fn main() -> tobitmap::Result<()> {
    let bitmap = convert_to_buffer(Path::new("logo.png"), &ConvertParams::default())?;
    println!("{} bytes for {}x{}", bitmap.packed.bytes.len(), bitmap.width(), bitmap.height());
    print!("{}", bitmap.literal());
    Ok(())
}
```

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — thresholding, packing, preview and resize primitives.
- [`io`] — the `ImageBackend` seam, decoding and output writers.
- [`types`] — `Channel`, `Rgba64`, `ResizeBox`.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::{ConvertParams, DEFAULT_LEVEL};
pub use crate::core::processing::pack::PackedBitmap;
pub use crate::core::processing::preview::GrayPreview;
pub use crate::core::processing::threshold::{BitPlane, Thresholder};
pub use crate::core::raster::Raster;
pub use error::{Error, Result};
pub use types::{Channel, ResizeBox, Rgba64};

// Backends
pub use io::{ImageBackend, StandardBackend};

// High-level API re-exports
pub use api::{
    ConvertedBitmap, convert_bytes_with, convert_file, convert_file_with, convert_to_buffer,
    convert_to_buffer_with,
};

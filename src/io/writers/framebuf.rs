//! MicroPython `framebuf.FrameBuffer` literal for the packed bitmap.
use std::fmt;
use std::io::{self, Write};
use std::path::Path;

use crate::core::processing::pack::PackedBitmap;

pub const FORMAT_TAG: &str = "framebuf.MONO_VLSB";

/// Variable name for the literal: the input's file name minus its last
/// extension. Not sanitized, so odd file names give invalid identifiers.
pub fn framebuf_name(input: &Path) -> String {
    input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Renders as `name = framebuf.FrameBuffer(bytearray([...]), w, h, framebuf.MONO_VLSB)`
/// with one line of bytes per 8-row block.
pub struct FramebufLiteral<'a> {
    pub name: &'a str,
    pub packed: &'a PackedBitmap,
}

impl fmt::Display for FramebufLiteral<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let packed = self.packed;
        write!(f, "{} = framebuf.FrameBuffer(bytearray([", self.name)?;
        for block in 0..packed.blocks() {
            for byte in packed.bytes.iter().skip(block * packed.width).take(packed.width) {
                write!(f, "0x{:02x}, ", byte)?;
            }
            writeln!(f)?;
        }
        writeln!(
            f,
            "]), {}, {}, {})",
            packed.width, packed.height, FORMAT_TAG
        )
    }
}

pub fn write_framebuf_literal<W: Write + ?Sized>(
    out: &mut W,
    name: &str,
    packed: &PackedBitmap,
) -> io::Result<()> {
    write!(out, "{}", FramebufLiteral { name, packed })?;
    out.flush()
}

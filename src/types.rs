//! Shared types used across tobitmap.
//! Includes the `Channel` selector, the 16-bit premultiplied `Rgba64` pixel,
//! and the `ResizeBox` bounding box.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Color channel compared against the threshold level.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum Channel {
    #[value(name = "r")]
    #[serde(rename = "r")]
    Red,
    #[value(name = "g")]
    #[serde(rename = "g")]
    Green,
    #[value(name = "b")]
    #[serde(rename = "b")]
    Blue,
    #[value(name = "a")]
    #[serde(rename = "a")]
    Alpha,
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Channel::Red => "r",
            Channel::Green => "g",
            Channel::Blue => "b",
            Channel::Alpha => "a",
        };
        write!(f, "{}", s)
    }
}

/// 16-bit RGBA pixel with alpha-premultiplied color components.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Rgba64 {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

impl Rgba64 {
    pub const TRANSPARENT: Rgba64 = Rgba64 { r: 0, g: 0, b: 0, a: 0 };

    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }

    /// Build from straight (non-premultiplied) 16-bit components.
    pub fn from_straight(r: u16, g: u16, b: u16, a: u16) -> Self {
        let premul = |c: u16| (u32::from(c) * u32::from(a) / 0xffff) as u16;
        Self {
            r: premul(r),
            g: premul(g),
            b: premul(b),
            a,
        }
    }

    /// Build from straight 8-bit components, widening each sample by 257.
    pub fn from_straight8(r: u8, g: u8, b: u8, a: u8) -> Self {
        let widen = |c: u8| u16::from(c) * 257;
        Self::from_straight(widen(r), widen(g), widen(b), widen(a))
    }

    /// Gray pixel as read back after luminance conversion: opaque, r = g = b = y.
    pub const fn gray(y: u16) -> Self {
        Self { r: y, g: y, b: y, a: 0xffff }
    }

    /// 16-bit luminance with ITU-R BT.601 weights scaled to 1 << 16.
    pub fn luminance(&self) -> u16 {
        let y = (19595 * u32::from(self.r) + 38470 * u32::from(self.g) + 7471 * u32::from(self.b)
            + (1 << 15))
            >> 16;
        y as u16
    }

    pub fn channel(&self, channel: Channel) -> u16 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
            Channel::Alpha => self.a,
        }
    }
}

/// Bounding box a resized image must fit into.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ResizeBox {
    pub max_width: u32,
    pub max_height: u32,
}

impl ResizeBox {
    pub fn new(max_width: u32, max_height: u32) -> Result<Self> {
        if max_width == 0 {
            return Err(Error::ZeroSize { size: 0 });
        }
        if max_height == 0 {
            return Err(Error::ZeroSize { size: 0 });
        }
        Ok(Self {
            max_width,
            max_height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_and_black_luminance_extremes() {
        assert_eq!(Rgba64::new(0xffff, 0xffff, 0xffff, 0xffff).luminance(), 0xffff);
        assert_eq!(Rgba64::new(0, 0, 0, 0xffff).luminance(), 0);
    }

    #[test]
    fn straight_alpha_is_premultiplied() {
        let px = Rgba64::from_straight8(255, 128, 0, 0);
        assert_eq!(px, Rgba64::TRANSPARENT);

        let px = Rgba64::from_straight8(255, 255, 255, 255);
        assert_eq!(px, Rgba64::new(0xffff, 0xffff, 0xffff, 0xffff));

        let half = Rgba64::from_straight(0xffff, 0, 0, 0x8000);
        assert_eq!(half.r, 0x8000);
        assert_eq!(half.a, 0x8000);
    }

    #[test]
    fn channel_names_match_cli_values() {
        assert_eq!(Channel::Red.to_string(), "r");
        assert_eq!(Channel::Alpha.to_string(), "a");
        assert_eq!(Channel::from_str("g", false), Ok(Channel::Green));
    }

    #[test]
    fn zero_sized_box_is_rejected() {
        assert!(matches!(ResizeBox::new(0, 10), Err(Error::ZeroSize { .. })));
        assert!(matches!(ResizeBox::new(10, 0), Err(Error::ZeroSize { .. })));
        assert_eq!(
            ResizeBox::new(64, 32).ok(),
            Some(ResizeBox {
                max_width: 64,
                max_height: 32
            })
        );
    }
}

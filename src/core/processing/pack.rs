//! Vertical LSB-first (MONO_VLSB) packing of a bit plane.
use crate::core::processing::threshold::BitPlane;

/// Bytes ordered block by block (8 rows each, top to bottom), then column by
/// column. Bit `n` of a byte is row `8 * block + n` of its column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBitmap {
    pub width: usize,
    pub height: usize,
    pub bytes: Vec<u8>,
}

impl PackedBitmap {
    /// Number of 8-row blocks, i.e. bytes per column.
    pub fn blocks(&self) -> usize {
        self.height.div_ceil(8)
    }

    pub fn byte(&self, x: usize, block: usize) -> Option<u8> {
        if x >= self.width {
            return None;
        }
        self.bytes.get(block * self.width + x).copied()
    }
}

pub fn pack_vertical_lsb(plane: &BitPlane) -> PackedBitmap {
    let width = plane.width();
    let height = plane.height();
    let blocks = height.div_ceil(8);
    let mut bytes = Vec::with_capacity(blocks * width);

    for block in 0..blocks {
        for x in 0..width {
            let mut byte = 0u8;
            for bit in 0..8 {
                if plane.get(x, block * 8 + bit) {
                    byte |= 1 << bit;
                }
            }
            bytes.push(byte);
        }
    }

    PackedBitmap {
        width,
        height,
        bytes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::processing::threshold::Thresholder;
    use crate::core::raster::Raster;
    use crate::types::{Channel, Rgba64};

    const ON: Rgba64 = Rgba64::new(0xffff, 0xffff, 0xffff, 0xffff);

    fn plane_from(width: usize, height: usize, set: &[(usize, usize)]) -> BitPlane {
        let mut raster = Raster::filled(width, height, Rgba64::TRANSPARENT);
        for &(x, y) in set {
            raster.set(x, y, ON);
        }
        BitPlane::from_raster(&raster, &Thresholder::new(Channel::Alpha, 32767))
    }

    #[test]
    fn top_row_is_bit_zero() {
        let packed = pack_vertical_lsb(&plane_from(2, 8, &[(0, 0), (1, 7)]));
        assert_eq!(packed.bytes, vec![0x01, 0x80]);
    }

    #[test]
    fn partial_last_block_pads_with_clear_bits() {
        let packed = pack_vertical_lsb(&plane_from(3, 10, &[(0, 0), (1, 0), (2, 0), (0, 9), (2, 8)]));
        assert_eq!(packed.blocks(), 2);
        assert_eq!(packed.bytes, vec![0x01, 0x01, 0x01, 0x02, 0x00, 0x01]);
        assert_eq!(packed.byte(0, 1), Some(0x02));
        assert_eq!(packed.byte(3, 0), None);
    }

    #[test]
    fn each_byte_is_weighted_sum_of_its_column_bits() {
        let set: Vec<(usize, usize)> = (0..13).filter(|y| y % 3 != 1).map(|y| (y % 4, y)).collect();
        let plane = plane_from(4, 13, &set);
        let packed = pack_vertical_lsb(&plane);
        for block in 0..packed.blocks() {
            for x in 0..packed.width {
                let expected = (0..8).fold(0u8, |acc, by| {
                    acc | (u8::from(plane.get(x, block * 8 + by)) << by)
                });
                assert_eq!(packed.byte(x, block), Some(expected));
            }
        }
    }
}

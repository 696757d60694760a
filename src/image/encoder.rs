//! Image encoder
//!
//! Turns a square pixel grid into a palette plus bit-packed pixel indices.
//!
//! ## Packing Order
//! Indices are taken in row-major order. Each index is placed above the bits
//! already buffered, and the low 8 bits are emitted whenever a full byte is
//! available. For a 1-bit image this means pixel 0 lands in bit 0 of the
//! first byte:
//!
//! ```text
//! pixels:  p0 p1 p2 p3 p4 p5 p6 p7 | p8 ...
//! byte 0:  p7 p6 p5 p4 p3 p2 p1 p0   (msb .. lsb)
//! ```
//!
//! This order was matched against captured device traffic and must not be
//! swapped for a big-endian layout.

use crate::error::{Result, TimeboxError};
use super::palette::Palette;
use super::pixel::PixelGrid;

/// Edge length of the display
pub const GRID_SIZE: u32 = 16;

/// Cells on the display
pub const PIXEL_COUNT: usize = (GRID_SIZE * GRID_SIZE) as usize;

/// A still image in device format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub palette: Palette,
    pub pixels: Vec<u8>,
}

impl EncodedImage {
    pub fn palette_size(&self) -> usize {
        self.palette.len()
    }

    pub fn palette_bytes(&self) -> Vec<u8> {
        self.palette.to_bytes()
    }

    pub fn bit_width(&self) -> u32 {
        self.palette.bit_width()
    }
}

/// Encode a square grid, downsizing anything larger than 16x16
pub fn encode_image(grid: &PixelGrid) -> Result<EncodedImage> {
    if !grid.is_square() {
        return Err(TimeboxError::NonSquareImage {
            width: grid.width(),
            height: grid.height(),
        });
    }
    if grid.width() < GRID_SIZE {
        return Err(TimeboxError::ImageTooSmall { size: grid.width() });
    }

    let resized;
    let grid = if grid.width() > GRID_SIZE {
        tracing::trace!("Resizing {0}x{0} image to 16x16", grid.width());
        resized = grid.resized(GRID_SIZE, GRID_SIZE);
        &resized
    } else {
        grid
    };

    let mut palette = Palette::new();
    let mut indices = Vec::with_capacity(PIXEL_COUNT);
    for pixel in grid.pixels() {
        indices.push(palette.index_of_or_insert(pixel.to_rgb())?);
    }

    let bit_width = palette.bit_width();
    let pixels = pack_indices(&indices, bit_width);

    tracing::trace!(
        colors = palette.len(),
        bit_width,
        packed = pixels.len(),
        "Encoded image"
    );

    Ok(EncodedImage { palette, pixels })
}

/// Pack palette indices at `bit_width` bits each
///
/// Bits that do not fill a whole byte at the end are dropped. 256 indices
/// always fill whole bytes.
pub fn pack_indices(indices: &[u8], bit_width: u32) -> Vec<u8> {
    debug_assert!((1..=8).contains(&bit_width));

    let mut out = Vec::with_capacity((indices.len() * bit_width as usize).div_ceil(8));
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;

    for &idx in indices {
        debug_assert!((idx as u32) < (1 << bit_width));
        acc |= (idx as u32) << bits;
        bits += bit_width;
        if bits >= 8 {
            out.push(acc as u8);
            acc >>= 8;
            bits -= 8;
        }
    }

    out
}

/// Reverse [`pack_indices`], reading `count` indices
pub fn unpack_indices(bytes: &[u8], bit_width: u32, count: usize) -> Vec<u8> {
    debug_assert!((1..=8).contains(&bit_width));

    let mask = (1u32 << bit_width) - 1;
    let mut out = Vec::with_capacity(count);
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut input = bytes.iter();

    while out.len() < count {
        if bits < bit_width {
            match input.next() {
                Some(&byte) => {
                    acc |= (byte as u32) << bits;
                    bits += 8;
                }
                None => break,
            }
        }
        out.push((acc & mask) as u8);
        acc >>= bit_width;
        bits -= bit_width;
    }

    out
}

//! Pixel model
//!
//! Sources hand over either RGB or RGBA pixels. Alpha is dropped before a
//! color reaches the palette.

use crate::error::{Result, TimeboxError};

/// An opaque color as stored in the palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// A source pixel, with or without alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pixel {
    Rgb { r: u8, g: u8, b: u8 },
    Rgba { r: u8, g: u8, b: u8, a: u8 },
}

impl Pixel {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Pixel::Rgb { r, g, b }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Pixel::Rgba { r, g, b, a }
    }

    /// Normalize to RGB, discarding alpha
    pub fn to_rgb(self) -> Rgb {
        match self {
            Pixel::Rgb { r, g, b } | Pixel::Rgba { r, g, b, .. } => Rgb::new(r, g, b),
        }
    }
}

impl From<Rgb> for Pixel {
    fn from(c: Rgb) -> Self {
        Pixel::rgb(c.r, c.g, c.b)
    }
}

/// A rectangular, row-major grid of pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl PixelGrid {
    /// Wrap a row-major pixel buffer
    pub fn new(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(TimeboxError::Decode(format!(
                "{}x{} grid needs {} pixels, got {}",
                width,
                height,
                expected,
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A grid where every cell has the same color
    pub fn filled(width: u32, height: u32, pixel: Pixel) -> Self {
        Self {
            width,
            height,
            pixels: vec![pixel; width as usize * height as usize],
        }
    }

    /// Build a grid by evaluating `f(x, y)` for every cell
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Pixel) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Nearest-neighbour resample to `width` x `height`
    pub fn resized(&self, width: u32, height: u32) -> Self {
        if width == self.width && height == self.height {
            return self.clone();
        }
        let (src_w, src_h) = (self.width as u64, self.height as u64);
        Self::from_fn(width, height, |x, y| {
            let sx = (x as u64 * src_w / width as u64) as usize;
            let sy = (y as u64 * src_h / height as u64) as usize;
            self.pixels[sy * self.width as usize + sx]
        })
    }
}

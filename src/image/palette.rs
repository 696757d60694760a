//! Color palette
//!
//! Colors are numbered in order of first appearance. An index never changes
//! once assigned.

use std::collections::HashMap;

use crate::error::{Result, TimeboxError};
use super::pixel::Rgb;

/// Most colors a palette can index with one byte
pub const MAX_COLORS: usize = 256;

/// Ordered set of distinct colors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
    index: HashMap<Rgb, u8>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of `color`, appending it if unseen
    pub fn index_of_or_insert(&mut self, color: Rgb) -> Result<u8> {
        if let Some(&idx) = self.index.get(&color) {
            return Ok(idx);
        }
        if self.colors.len() >= MAX_COLORS {
            return Err(TimeboxError::PaletteTooLarge(self.colors.len() + 1));
        }
        let idx = self.colors.len() as u8;
        self.colors.push(color);
        self.index.insert(color, idx);
        Ok(idx)
    }

    pub fn index_of(&self, color: Rgb) -> Option<u8> {
        self.index.get(&color).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Bits needed per pixel index, never less than one
    pub fn bit_width(&self) -> u32 {
        bit_width(self.colors.len())
    }

    /// Flat `r g b r g b ...` encoding
    pub fn to_bytes(&self) -> Vec<u8> {
        self.colors.iter().flat_map(|c| c.to_array()).collect()
    }
}

/// `ceil(log2(colors))`, clamped to at least 1
pub fn bit_width(colors: usize) -> u32 {
    if colors <= 1 {
        1
    } else {
        usize::BITS - (colors - 1).leading_zeros()
    }
}

//! Image Module
//!
//! Converts pixel grids into the device's palette-indexed frame format.
//!
//! ## Responsibilities
//! - Normalize RGB/RGBA source pixels to RGB
//! - Build a first-occurrence palette
//! - Pack per-pixel palette indices at the minimum bit width
//! - Load grids from image files
//!
//! ## Encoded Layout
//! ```text
//! ┌──────────────────────────┬───────────────────────────────┐
//! │ Palette (3 * colors)     │ Pixels (32 * bit_width)       │
//! └──────────────────────────┴───────────────────────────────┘
//! ```

mod pixel;
mod palette;
mod encoder;
mod loader;

pub use pixel::{Pixel, PixelGrid, Rgb};
pub use palette::{bit_width, Palette, MAX_COLORS};
pub use encoder::{encode_image, pack_indices, unpack_indices, EncodedImage, GRID_SIZE, PIXEL_COUNT};
pub use loader::{grid_from_dynamic, FileImageLoader, ImageLoader};

//! Image sources
//!
//! Decoding of image files is delegated to the `image` crate. Loaders only
//! convert to [`PixelGrid`]; sizing is left to the encoder.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use ::image::codecs::gif::GifDecoder;
use ::image::{AnimationDecoder, DynamicImage, RgbaImage};

use crate::error::{Result, TimeboxError};
use super::pixel::{Pixel, PixelGrid};

/// Something that can produce pixel grids from a path
pub trait ImageLoader {
    /// Load a still image
    fn load(&self, path: &Path) -> Result<PixelGrid>;

    /// Load every frame of an animated image, in display order
    fn load_frames(&self, path: &Path) -> Result<Vec<PixelGrid>>;
}

/// Loads PNG stills and animated GIFs from disk
#[derive(Debug, Clone, Copy, Default)]
pub struct FileImageLoader;

impl ImageLoader for FileImageLoader {
    fn load(&self, path: &Path) -> Result<PixelGrid> {
        let img = ::image::open(path).map_err(|e| decode_error(path, e))?;
        Ok(grid_from_dynamic(&img))
    }

    fn load_frames(&self, path: &Path) -> Result<Vec<PixelGrid>> {
        let reader = BufReader::new(File::open(path)?);
        let decoder = GifDecoder::new(reader).map_err(|e| decode_error(path, e))?;
        let frames = decoder
            .into_frames()
            .collect_frames()
            .map_err(|e| decode_error(path, e))?;

        tracing::debug!("Decoded {} frames from {}", frames.len(), path.display());

        // GIF frames carry alpha, but the device has no notion of it
        Ok(frames
            .iter()
            .map(|frame| grid_from_rgba(frame.buffer(), false))
            .collect())
    }
}

fn decode_error(path: &Path, err: ::image::ImageError) -> TimeboxError {
    TimeboxError::Decode(format!("{}: {}", path.display(), err))
}

/// Convert a decoded image, keeping alpha only if the source had it
pub fn grid_from_dynamic(img: &DynamicImage) -> PixelGrid {
    if img.color().has_alpha() {
        grid_from_rgba(&img.to_rgba8(), true)
    } else {
        let rgb = img.to_rgb8();
        PixelGrid::from_fn(rgb.width(), rgb.height(), |x, y| {
            let [r, g, b] = rgb.get_pixel(x, y).0;
            Pixel::rgb(r, g, b)
        })
    }
}

fn grid_from_rgba(img: &RgbaImage, keep_alpha: bool) -> PixelGrid {
    PixelGrid::from_fn(img.width(), img.height(), |x, y| {
        let [r, g, b, a] = img.get_pixel(x, y).0;
        if keep_alpha {
            Pixel::rgba(r, g, b, a)
        } else {
            Pixel::rgb(r, g, b)
        }
    })
}

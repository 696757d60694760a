//! Frame assembly
//!
//! ```text
//! ┌──────┬──────────┬───────────┬──────┬────────┬──────────┬──────────┐
//! │ 0xAA │ Size (2) │ Time (2)  │ 0x00 │ Colors │ Palette  │ Pixels   │
//! └──────┴──────────┴───────────┴──────┴────────┴──────────┴──────────┘
//! ```
//!
//! `Size` covers the whole frame including its 7-byte header.

use bytes::{BufMut, BytesMut};

use crate::error::{Result, TimeboxError};
use crate::image::EncodedImage;

/// First byte of every frame
pub const FRAME_MARKER: u8 = 0xAA;

/// Marker, size, timecode, reserved byte and color count
pub const FRAME_HEADER_SIZE: usize = 7;

/// Leads the single frame of a DRAW_IMAGE payload
pub const STATIC_IMAGE_PREFIX: [u8; 4] = [0x00, 0x0A, 0x0A, 0x04];

/// One animation step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Offset of this frame from the start of the animation
    pub timecode_ms: u16,
    pub image: EncodedImage,
}

impl Frame {
    pub fn new(timecode_ms: u16, image: EncodedImage) -> Self {
        Self { timecode_ms, image }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        assemble_frame(self.timecode_ms, &self.image)
    }
}

/// Serialize an encoded image as a frame
pub fn assemble_frame(timecode_ms: u16, image: &EncodedImage) -> Result<Vec<u8>> {
    let colors = image.palette_size();
    // The color count is a single byte
    if colors > u8::MAX as usize {
        return Err(TimeboxError::PaletteTooLarge(colors));
    }

    let palette = image.palette_bytes();
    let frame_size = FRAME_HEADER_SIZE + palette.len() + image.pixels.len();
    if frame_size > u16::MAX as usize {
        return Err(TimeboxError::PayloadTooLarge(format!(
            "frame of {} bytes",
            frame_size
        )));
    }

    let mut frame = BytesMut::with_capacity(frame_size);
    frame.put_u8(FRAME_MARKER);
    frame.put_u16_le(frame_size as u16);
    frame.put_u16_le(timecode_ms);
    frame.put_u8(0x00);
    frame.put_u8(colors as u8);
    frame.put_slice(&palette);
    frame.put_slice(&image.pixels);

    Ok(frame.to_vec())
}

/// Payload of a DRAW_IMAGE command: fixed prefix plus one frame at time 0
pub fn static_image_payload(image: &EncodedImage) -> Result<Vec<u8>> {
    let frame = assemble_frame(0, image)?;
    let mut payload = Vec::with_capacity(STATIC_IMAGE_PREFIX.len() + frame.len());
    payload.extend_from_slice(&STATIC_IMAGE_PREFIX);
    payload.extend_from_slice(&frame);
    Ok(payload)
}

/// Assign timecodes `0, speed, 2 * speed, ...` to a sequence of images
///
/// The timecode is a 16-bit field and wraps.
pub fn sequence_frames(images: Vec<EncodedImage>, speed_ms: u16) -> Vec<Frame> {
    let mut timecode: u16 = 0;
    images
        .into_iter()
        .map(|image| {
            let frame = Frame::new(timecode, image);
            timecode = timecode.wrapping_add(speed_ms);
            frame
        })
        .collect()
}

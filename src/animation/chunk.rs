//! Animation chunking
//!
//! All frames are concatenated into one buffer, which is then sliced into
//! fixed-size pieces. Every piece repeats the size of the whole buffer and
//! carries its own index.
//!
//! ```text
//! ┌───────────┬───────────┬───────────────────────────┐
//! │ Total (2) │ Index (1) │ Data (<= chunk size)      │
//! └───────────┴───────────┴───────────────────────────┘
//! ```

use crate::error::{Result, TimeboxError};
use super::frame::Frame;

/// Animation bytes per ANIMATION_CHUNK command
pub const DEFAULT_CHUNK_SIZE: usize = 200;

/// Total size and index
pub const CHUNK_HEADER_SIZE: usize = 3;

/// Largest chunk count addressable by the index byte
pub const MAX_CHUNKS: usize = u8::MAX as usize + 1;

/// One transport-sized slice of an animation buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Length of the full animation buffer, identical for every chunk
    pub total_size: u16,
    pub index: u8,
    pub data: Vec<u8>,
}

impl Chunk {
    /// Command arguments for this chunk
    pub fn to_payload(&self) -> Vec<u8> {
        let mut payload = Vec::with_capacity(CHUNK_HEADER_SIZE + self.data.len());
        payload.extend_from_slice(&self.total_size.to_le_bytes());
        payload.push(self.index);
        payload.extend_from_slice(&self.data);
        payload
    }
}

/// Concatenate assembled frames into one animation buffer
pub fn animation_buffer(frames: &[Frame]) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    for frame in frames {
        buffer.extend_from_slice(&frame.to_bytes()?);
    }
    Ok(buffer)
}

/// Assemble frames and split them into chunks
pub fn chunk_animation(frames: &[Frame], chunk_size: usize) -> Result<Vec<Chunk>> {
    let buffer = animation_buffer(frames)?;
    chunk_buffer(&buffer, chunk_size)
}

/// Split an animation buffer into chunks of `chunk_size` bytes
///
/// The last chunk may be shorter. An empty buffer yields no chunks.
pub fn chunk_buffer(buffer: &[u8], chunk_size: usize) -> Result<Vec<Chunk>> {
    if chunk_size == 0 {
        return Err(TimeboxError::Config("chunk size must be non-zero".to_string()));
    }
    if buffer.len() > u16::MAX as usize {
        return Err(TimeboxError::PayloadTooLarge(format!(
            "animation of {} bytes (max {})",
            buffer.len(),
            u16::MAX
        )));
    }
    let count = buffer.len().div_ceil(chunk_size);
    if count > MAX_CHUNKS {
        return Err(TimeboxError::PayloadTooLarge(format!(
            "animation needs {} chunks (max {})",
            count, MAX_CHUNKS
        )));
    }

    let total_size = buffer.len() as u16;
    Ok(buffer
        .chunks(chunk_size)
        .enumerate()
        .map(|(i, data)| Chunk {
            total_size,
            index: i as u8,
            data: data.to_vec(),
        })
        .collect())
}

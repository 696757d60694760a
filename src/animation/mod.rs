//! Animation Module
//!
//! Frames and the chunking of multi-frame sequences.
//!
//! ## Responsibilities
//! - Wrap encoded images in frame headers with timecodes
//! - Build the DRAW_IMAGE payload for a single still
//! - Split concatenated frames into ANIMATION_CHUNK payloads

mod frame;
mod chunk;

pub use frame::{
    assemble_frame, sequence_frames, static_image_payload, Frame, FRAME_HEADER_SIZE,
    FRAME_MARKER, STATIC_IMAGE_PREFIX,
};
pub use chunk::{
    animation_buffer, chunk_animation, chunk_buffer, Chunk, CHUNK_HEADER_SIZE,
    DEFAULT_CHUNK_SIZE, MAX_CHUNKS,
};

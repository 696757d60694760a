//! Error types for timebox
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using TimeboxError
pub type Result<T> = std::result::Result<T, TimeboxError>;

/// Unified error type for timebox operations
#[derive(Debug, Error)]
pub enum TimeboxError {
    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    #[error("Failed to connect to {addr}: {reason}")]
    Connect { addr: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not connected to device")]
    NotConnected,

    // -------------------------------------------------------------------------
    // Image Errors
    // -------------------------------------------------------------------------
    #[error("Image must be square, got {width}x{height}")]
    NonSquareImage { width: u32, height: u32 },

    #[error("Image is {size}x{size}, at least 16x16 is required")]
    ImageTooSmall { size: u32 },

    #[error("Image decode error: {0}")]
    Decode(String),

    #[error("Palette has {0} colors, the frame header holds at most 255")]
    PaletteTooLarge(usize),

    // -------------------------------------------------------------------------
    // Framing Errors
    // -------------------------------------------------------------------------
    #[error("Checksum mismatch: expected 0x{expected:04x}, got 0x{actual:04x}")]
    ChecksumMismatch { expected: u16, actual: u16 },

    #[error("Framing error: {0}")]
    Framing(String),

    #[error("Truncated escape sequence at end of stream")]
    TruncatedEscapeSequence,

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

//! # timebox
//!
//! Client-side protocol codec and transport for 16x16 Bluetooth LED matrix
//! displays:
//! - Framed messages with length, 16-bit checksum and reserved-byte escaping
//! - Palette-indexed, bit-packed image encoding
//! - Chunked multi-frame animations
//! - A blocking, single-owner device session
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Device                                │
//! │        (set_color, set_brightness, set_mode, draw_*)         │
//! └──────────┬──────────────────────────────────┬───────────────┘
//!            │                                  │
//!            ▼                                  │
//!   ┌─────────────────┐                         │
//!   │  Image Encoder  │  palette + packed bits  │
//!   └────────┬────────┘                         │
//!            ▼                                  │
//!   ┌─────────────────┐                         │
//!   │    Animation    │  frames + chunks        │
//!   └────────┬────────┘                         │
//!            ▼                                  ▼
//!   ┌─────────────────────────────────────────────────┐
//!   │                 Protocol Codec                   │
//!   │        (prefix, length, checksum, escaping)      │
//!   └────────────────────────┬────────────────────────┘
//!                            ▼
//!                   ┌─────────────────┐
//!                   │    Transport    │
//!                   └─────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod image;
pub mod animation;
pub mod transport;
pub mod observer;
pub mod device;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, TimeboxError};
pub use config::Config;
pub use device::Device;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of timebox
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

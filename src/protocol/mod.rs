//! Protocol Module
//!
//! Defines the wire protocol spoken to the display.
//!
//! ## Message Format
//! ```text
//! ┌────────┬──────────┬───────┬──────────┬──────────┬────────┐
//! │ 0x01   │ Len (2)  │ Cmd   │ Args     │ Sum (2)  │ 0x02   │
//! └────────┴──────────┴───────┴──────────┴──────────┴────────┘
//! ```
//!
//! ### Commands
//! - 0x44: DRAW_IMAGE      - Payload: 0x00 0x0A 0x0A 0x04 + frame (raw)
//! - 0x45: SET_MODE        - Payload: mode
//! - 0x49: ANIMATION_CHUNK - Payload: total (2) + index (1) + data (raw)
//! - 0x6f: SET_COLOR       - Payload: r g b
//! - 0x74: SET_BRIGHTNESS  - Payload: level
//!
//! ### Reserved Bytes
//! 0x01, 0x02 and 0x03 are escaped inside masked messages, see [`escape`].

mod command;
mod codec;
pub mod escape;

pub use command::{CommandType, Mode};
pub use codec::{
    checksum, decode, encode, Masking, Message, CHECKSUM_SIZE, HEADER_SIZE, MAX_ARGS_SIZE,
    PREFIX, SUFFIX,
};
pub use escape::{escape, unescape};

//! Reserved-byte escaping
//!
//! The framing bytes 0x01 (prefix) and 0x02 (suffix), and the escape byte
//! 0x03 itself, may not appear inside a masked message. Each occurrence is
//! replaced by the pair `[0x03, byte + 3]`. 0x00 is not reserved and passes
//! through untouched.
//!
//! ```text
//!   0x01  ->  0x03 0x04
//!   0x02  ->  0x03 0x05
//!   0x03  ->  0x03 0x06
//! ```

use crate::error::{Result, TimeboxError};

/// Escape introducer
pub const ESCAPE_BYTE: u8 = 0x03;

/// Added to a reserved byte to form the second byte of its escape pair
pub const ESCAPE_OFFSET: u8 = 3;

/// True for the bytes that must be escaped inside a masked message
#[inline]
pub fn is_reserved(byte: u8) -> bool {
    matches!(byte, 0x01..=0x03)
}

/// Escape reserved bytes, returning a new buffer
pub fn escape(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len() + bytes.len() / 4);
    escape_into(bytes, &mut out);
    out
}

/// Escape reserved bytes, appending to `out`
pub fn escape_into(bytes: &[u8], out: &mut Vec<u8>) {
    for &byte in bytes {
        if is_reserved(byte) {
            out.push(ESCAPE_BYTE);
            out.push(byte + ESCAPE_OFFSET);
        } else {
            out.push(byte);
        }
    }
}

/// Reverse [`escape`]
///
/// The byte following an escape introducer is taken as-is minus the offset;
/// it is not checked against the reserved range.
pub fn unescape(bytes: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut iter = bytes.iter().copied();

    while let Some(byte) = iter.next() {
        if byte == ESCAPE_BYTE {
            let next = iter.next().ok_or(TimeboxError::TruncatedEscapeSequence)?;
            out.push(next.wrapping_sub(ESCAPE_OFFSET));
        } else {
            out.push(byte);
        }
    }

    Ok(out)
}

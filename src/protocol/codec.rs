//! Message codec
//!
//! Encoding and decoding functions for the wire protocol.
//!
//! ## Wire Format
//! ```text
//! ┌────────┬────────┬────────┬───────┬──────────┬────────┬────────┬────────┐
//! │ 0x01   │ Len LO │ Len HI │ Cmd   │ Args ... │ Sum LO │ Sum HI │ 0x02   │
//! └────────┴────────┴────────┴───────┴──────────┴────────┴────────┴────────┘
//! ```
//!
//! - `Len` = args + 3 (command byte and the two checksum bytes), little-endian
//! - `Sum` = 16-bit wrapping sum of `Len LO .. Args`, little-endian
//! - Everything between prefix and suffix is escaped according to [`Masking`]

use bytes::{BufMut, BytesMut};

use crate::error::{Result, TimeboxError};
use super::escape::{escape_into, unescape};

/// Message start byte
pub const PREFIX: u8 = 0x01;

/// Message end byte
pub const SUFFIX: u8 = 0x02;

/// Length field (2) + command (1)
pub const HEADER_SIZE: usize = 3;

/// Checksum field
pub const CHECKSUM_SIZE: usize = 2;

/// Largest argument list whose length still fits the 16-bit length field
pub const MAX_ARGS_SIZE: usize = u16::MAX as usize - HEADER_SIZE;

/// Which part of a message gets reserved-byte escaping
///
/// Two firmware behaviours were observed: one escapes the checksum along
/// with the body, one leaves it raw. Image and animation payloads are never
/// escaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Masking {
    /// Nothing is escaped
    Raw,

    /// Length, command and args are escaped, the checksum is sent raw
    Body,

    /// Length, command, args and checksum are escaped
    #[default]
    Full,
}

/// A decoded message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub command: u8,
    pub args: Vec<u8>,
}

/// 16-bit wrapping byte sum
pub fn checksum(bytes: &[u8]) -> u16 {
    bytes
        .iter()
        .fold(0u16, |sum, &byte| sum.wrapping_add(byte as u16))
}

/// Encode a command and its arguments into a framed message
pub fn encode(command: u8, args: &[u8], masking: Masking) -> Result<Vec<u8>> {
    if args.len() > MAX_ARGS_SIZE {
        return Err(TimeboxError::PayloadTooLarge(format!(
            "{} argument bytes (max {})",
            args.len(),
            MAX_ARGS_SIZE
        )));
    }

    let final_size = (args.len() + HEADER_SIZE) as u16;

    let mut body = BytesMut::with_capacity(HEADER_SIZE + args.len() + CHECKSUM_SIZE);
    body.put_u16_le(final_size);
    body.put_u8(command);
    body.put_slice(args);

    let sum = checksum(&body);

    let mut message = Vec::with_capacity(body.len() * 2 + 4);
    message.push(PREFIX);
    match masking {
        Masking::Raw => {
            message.extend_from_slice(&body);
            message.extend_from_slice(&sum.to_le_bytes());
        }
        Masking::Body => {
            escape_into(&body, &mut message);
            message.extend_from_slice(&sum.to_le_bytes());
        }
        Masking::Full => {
            body.put_u16_le(sum);
            escape_into(&body, &mut message);
        }
    }
    message.push(SUFFIX);

    Ok(message)
}

/// Decode a framed message, verifying length and checksum
///
/// `masking` must match what the sender used.
pub fn decode(bytes: &[u8], masking: Masking) -> Result<Message> {
    if bytes.len() < 2 {
        return Err(TimeboxError::Framing(format!(
            "message of {} bytes cannot hold prefix and suffix",
            bytes.len()
        )));
    }
    if bytes[0] != PREFIX {
        return Err(TimeboxError::Framing(format!(
            "expected prefix 0x{:02x}, got 0x{:02x}",
            PREFIX, bytes[0]
        )));
    }
    let last = bytes[bytes.len() - 1];
    if last != SUFFIX {
        return Err(TimeboxError::Framing(format!(
            "expected suffix 0x{:02x}, got 0x{:02x}",
            SUFFIX, last
        )));
    }

    let inner = &bytes[1..bytes.len() - 1];
    let body = match masking {
        Masking::Raw => inner.to_vec(),
        Masking::Full => unescape(inner)?,
        Masking::Body => {
            if inner.len() < CHECKSUM_SIZE {
                return Err(TimeboxError::Framing("missing checksum".to_string()));
            }
            let (escaped, raw_sum) = inner.split_at(inner.len() - CHECKSUM_SIZE);
            let mut body = unescape(escaped)?;
            body.extend_from_slice(raw_sum);
            body
        }
    };

    if body.len() < HEADER_SIZE + CHECKSUM_SIZE {
        return Err(TimeboxError::Framing(format!(
            "body of {} bytes is shorter than header and checksum",
            body.len()
        )));
    }

    let (content, sum_bytes) = body.split_at(body.len() - CHECKSUM_SIZE);

    // The length field counts command, args and checksum, which is the
    // same number of bytes as length, command and args.
    let declared = u16::from_le_bytes([content[0], content[1]]) as usize;
    if declared != content.len() {
        return Err(TimeboxError::Framing(format!(
            "length field says {} bytes, message carries {}",
            declared,
            content.len()
        )));
    }

    let expected = u16::from_le_bytes([sum_bytes[0], sum_bytes[1]]);
    let actual = checksum(content);
    if expected != actual {
        return Err(TimeboxError::ChecksumMismatch { expected, actual });
    }

    Ok(Message {
        command: content[2],
        args: content[HEADER_SIZE..].to_vec(),
    })
}

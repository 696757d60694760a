//! Transport Module
//!
//! Byte-stream links to the device.
//!
//! ## Architecture
//! - One exclusively owned link per device session
//! - Blocking writes, bounded-timeout reads
//! - A read timeout is not an error: `receive` returns `Ok(None)`

use std::time::Duration;

use crate::error::Result;

mod tcp;
mod mock;

pub use tcp::TcpTransport;
pub use mock::MockTransport;

/// A connection to the device
pub trait Transport {
    /// Open the link
    fn connect(&mut self) -> Result<()>;

    /// Close the link. Closing an already closed link is not an error.
    fn disconnect(&mut self) -> Result<()>;

    /// Whether the peer still looks alive
    fn is_connected(&mut self) -> bool;

    /// Write all of `bytes`
    fn send(&mut self, bytes: &[u8]) -> Result<()>;

    /// Read up to `max_bytes`, waiting at most `timeout`
    ///
    /// Returns `Ok(None)` when nothing arrived in time. Any timeout set on
    /// the link beforehand is restored.
    fn receive(&mut self, max_bytes: usize, timeout: Duration) -> Result<Option<Vec<u8>>>;
}

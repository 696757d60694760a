//! Traffic observation
//!
//! A device reports every message it sends or receives to an observer
//! supplied at construction. The default observer does nothing.

/// Receives wire traffic notifications
pub trait TrafficObserver {
    fn on_send(&self, _bytes: &[u8]) {}

    fn on_receive(&self, _bytes: &[u8]) {}

    /// A response was expected but none arrived in time
    fn on_timeout(&self) {}
}

/// Ignores all traffic
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl TrafficObserver for NoopObserver {}

/// Logs hex dumps of all traffic at debug level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl TrafficObserver for TracingObserver {
    fn on_send(&self, bytes: &[u8]) {
        tracing::debug!("{}", hex_dump(bytes, "SEND"));
    }

    fn on_receive(&self, bytes: &[u8]) {
        tracing::debug!("{}", hex_dump(bytes, "RECV"));
    }

    fn on_timeout(&self) {
        tracing::debug!("[RECV]: no response received (timeout)");
    }
}

/// `[LABEL]: 01 05 00 6f (4 bytes)`
pub fn hex_dump(bytes: &[u8], label: &str) -> String {
    let hex = bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ");
    format!("[{}]: {} ({} bytes)", label, hex, bytes.len())
}

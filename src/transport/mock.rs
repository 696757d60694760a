//! In-memory transport
//!
//! Records every write and replays queued responses. Clones share state, so
//! a test can keep a handle after moving the transport into a device.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::error::{Result, TimeboxError};
use super::Transport;

#[derive(Debug, Default)]
struct MockState {
    connected: bool,
    refuse_connect: bool,
    connects: usize,
    disconnects: usize,
    sent: Vec<Vec<u8>>,
    responses: VecDeque<Vec<u8>>,
    timeouts: Vec<Duration>,
}

/// Scriptable transport for tests
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `connect` calls fail
    pub fn refuse_connect(&self, refuse: bool) {
        self.state.lock().refuse_connect = refuse;
    }

    /// Queue a response for the next `receive`
    pub fn push_response(&self, bytes: impl Into<Vec<u8>>) {
        self.state.lock().responses.push_back(bytes.into());
    }

    /// Every buffer passed to `send`, in order
    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.state.lock().sent.clone()
    }

    /// Timeouts passed to `receive`, in order
    pub fn receive_timeouts(&self) -> Vec<Duration> {
        self.state.lock().timeouts.clone()
    }

    pub fn connect_count(&self) -> usize {
        self.state.lock().connects
    }

    pub fn disconnect_count(&self) -> usize {
        self.state.lock().disconnects
    }

    pub fn connected(&self) -> bool {
        self.state.lock().connected
    }

    /// Simulate the device dropping the link
    pub fn drop_link(&self) {
        self.state.lock().connected = false;
    }
}

impl Transport for MockTransport {
    fn connect(&mut self) -> Result<()> {
        let mut state = self.state.lock();
        if state.refuse_connect {
            return Err(TimeboxError::Connect {
                addr: "mock".to_string(),
                reason: "connection refused".to_string(),
            });
        }
        state.connected = true;
        state.connects += 1;
        Ok(())
    }

    fn disconnect(&mut self) -> Result<()> {
        let mut state = self.state.lock();
        if state.connected {
            state.connected = false;
            state.disconnects += 1;
        }
        Ok(())
    }

    fn is_connected(&mut self) -> bool {
        self.state.lock().connected
    }

    fn send(&mut self, bytes: &[u8]) -> Result<()> {
        let mut state = self.state.lock();
        if !state.connected {
            return Err(TimeboxError::NotConnected);
        }
        state.sent.push(bytes.to_vec());
        Ok(())
    }

    fn receive(&mut self, max_bytes: usize, timeout: Duration) -> Result<Option<Vec<u8>>> {
        let mut state = self.state.lock();
        if !state.connected {
            return Err(TimeboxError::NotConnected);
        }
        state.timeouts.push(timeout);
        Ok(state.responses.pop_front().map(|mut bytes| {
            bytes.truncate(max_bytes);
            bytes
        }))
    }
}

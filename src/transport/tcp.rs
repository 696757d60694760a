//! TCP stream transport
//!
//! For devices reached through a stream bridge (an RFCOMM-to-TCP relay or
//! similar). The address must resolve as `host:port`; a bare Bluetooth MAC
//! is rejected at connect time.

use std::io::{ErrorKind, Read, Write};
use std::net::{Shutdown, SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use crate::error::{Result, TimeboxError};
use super::Transport;

/// Blocking TCP link
pub struct TcpTransport {
    /// Address to connect to
    addr: String,

    /// Open stream, if connected
    stream: Option<TcpStream>,
}

impl TcpTransport {
    pub fn new(addr: impl Into<String>) -> Self {
        Self {
            addr: addr.into(),
            stream: None,
        }
    }

    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// Read timeout currently set on the open stream
    pub fn read_timeout(&self) -> Result<Option<Duration>> {
        let stream = self.stream.as_ref().ok_or(TimeboxError::NotConnected)?;
        Ok(stream.read_timeout()?)
    }

    fn resolve(&self) -> Result<Vec<SocketAddr>> {
        let unreachable = |reason: String| TimeboxError::Connect {
            addr: self.addr.clone(),
            reason: format!("{} (expected host:port of the stream bridge)", reason),
        };

        let addrs: Vec<SocketAddr> = self
            .addr
            .to_socket_addrs()
            .map_err(|e| unreachable(e.to_string()))?
            .collect();
        if addrs.is_empty() {
            return Err(unreachable("address resolved to nothing".to_string()));
        }
        Ok(addrs)
    }

    fn stream(&mut self) -> Result<&mut TcpStream> {
        self.stream.as_mut().ok_or(TimeboxError::NotConnected)
    }
}

impl Transport for TcpTransport {
    fn connect(&mut self) -> Result<()> {
        let addrs = self.resolve()?;
        let stream = TcpStream::connect(&addrs[..]).map_err(|e| TimeboxError::Connect {
            addr: self.addr.clone(),
            reason: e.to_string(),
        })?;

        // Messages are small; don't let Nagle hold them back
        stream.set_nodelay(true)?;

        tracing::debug!("Connected to {}", self.addr);
        self.stream = Some(stream);
        Ok(())
    }

    fn disconnect(&mut self) -> Result<()> {
        if let Some(stream) = self.stream.take() {
            match stream.shutdown(Shutdown::Both) {
                Ok(()) => {}
                // Peer already went away
                Err(ref e) if e.kind() == ErrorKind::NotConnected => {}
                Err(e) => return Err(e.into()),
            }
            tracing::debug!("Disconnected from {}", self.addr);
        }
        Ok(())
    }

    fn is_connected(&mut self) -> bool {
        let Some(stream) = self.stream.as_ref() else {
            return false;
        };

        if stream.set_nonblocking(true).is_err() {
            return false;
        }
        let mut peeked = [0u8; 1];
        let result = stream.peek(&mut peeked);
        let restored = stream.set_nonblocking(false).is_ok();

        match result {
            // Orderly shutdown by the peer
            Ok(0) => false,
            Ok(_) => restored,
            Err(ref e) if e.kind() == ErrorKind::WouldBlock => restored,
            Err(_) => false,
        }
    }

    fn send(&mut self, bytes: &[u8]) -> Result<()> {
        let stream = self.stream()?;
        stream.write_all(bytes)?;
        stream.flush()?;
        Ok(())
    }

    fn receive(&mut self, max_bytes: usize, timeout: Duration) -> Result<Option<Vec<u8>>> {
        let stream = self.stream()?;

        let previous = stream.read_timeout()?;
        // A zero timeout is rejected by the socket layer
        stream.set_read_timeout(Some(timeout.max(Duration::from_millis(1))))?;

        let mut buf = vec![0u8; max_bytes];
        let result = stream.read(&mut buf);

        // Restore before looking at the result so every path leaves the
        // stream as we found it
        stream.set_read_timeout(previous)?;

        match result {
            Ok(0) => Err(TimeboxError::Io(std::io::Error::new(
                ErrorKind::UnexpectedEof,
                "device closed the connection",
            ))),
            Ok(n) => {
                buf.truncate(n);
                Ok(Some(buf))
            }
            // Unix reports WouldBlock, Windows TimedOut
            Err(ref e) if e.kind() == ErrorKind::WouldBlock || e.kind() == ErrorKind::TimedOut => {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

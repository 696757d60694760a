//! Device Module
//!
//! High-level commands for the display.
//!
//! ## Responsibilities
//! - Own the transport for the length of a session
//! - Honour the firmware's settle delay around connect/disconnect
//! - Pick the escape policy per command
//! - Encode images and animations before anything is written, so a bad
//!   input never leaves a half-sent sequence on the device

use std::path::Path;
use std::thread;
use std::time::Duration;

use crate::animation::{chunk_animation, sequence_frames, static_image_payload};
use crate::config::Config;
use crate::error::{Result, TimeboxError};
use crate::image::{encode_image, EncodedImage, FileImageLoader, ImageLoader, PixelGrid};
use crate::observer::{NoopObserver, TrafficObserver};
use crate::protocol::{encode, CommandType, Masking, Mode};
use crate::transport::Transport;

/// A display reached over `T`
///
/// ## Session Model
///
/// One owner, one command at a time. `connect` must succeed before any
/// send. Dropping a connected device closes the link (without the settle
/// delay).
pub struct Device<T: Transport> {
    /// Session configuration
    config: Config,

    /// Link to the device (exclusively owned)
    transport: T,

    /// Traffic logging capability
    observer: Box<dyn TrafficObserver>,

    /// Source of pixel grids for path-based drawing
    loader: Box<dyn ImageLoader>,

    /// Set once connect (including the settle delay) has completed
    connected: bool,
}

impl<T: Transport> Device<T> {
    /// Create a device over `transport`. Nothing is opened yet.
    pub fn new(transport: T, config: Config) -> Self {
        Self {
            config,
            transport,
            observer: Box::new(NoopObserver),
            loader: Box::new(FileImageLoader),
            connected: false,
        }
    }

    /// Report traffic to `observer`
    pub fn with_observer(mut self, observer: impl TrafficObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Load images through `loader`
    pub fn with_loader(mut self, loader: impl ImageLoader + 'static) -> Self {
        self.loader = Box::new(loader);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Open the link and wait for the firmware to settle
    pub fn connect(&mut self) -> Result<()> {
        self.config.validate()?;
        if self.connected {
            return Ok(());
        }

        tracing::info!("Connecting to {}", self.config.device_addr);
        self.transport.connect()?;
        settle(self.config.settle_delay());
        self.connected = true;
        Ok(())
    }

    /// Wait for pending output to drain, then close the link
    pub fn disconnect(&mut self) -> Result<()> {
        if !self.connected {
            return Ok(());
        }

        settle(self.config.settle_delay());
        self.connected = false;
        self.transport.disconnect()?;
        tracing::info!("Disconnected from {}", self.config.device_addr);
        Ok(())
    }

    /// Whether the session is open and the peer still answers
    pub fn is_connected(&mut self) -> bool {
        self.connected && self.transport.is_connected()
    }

    fn ensure_connected(&self) -> Result<()> {
        if self.connected {
            Ok(())
        } else {
            Err(TimeboxError::NotConnected)
        }
    }

    // =========================================================================
    // Raw I/O
    // =========================================================================

    /// Write bytes to the device as-is
    pub fn send_raw(&mut self, bytes: &[u8]) -> Result<()> {
        self.ensure_connected()?;
        self.observer.on_send(bytes);
        self.transport.send(bytes)
    }

    /// Wait up to `timeout` for a response
    ///
    /// `Ok(None)` means the device did not answer in time.
    pub fn recv_response(&mut self, timeout: Duration) -> Result<Option<Vec<u8>>> {
        self.ensure_connected()?;
        let response = self
            .transport
            .receive(self.config.response_buffer_size, timeout)?;

        match &response {
            Some(bytes) => self.observer.on_receive(bytes),
            None => self.observer.on_timeout(),
        }
        Ok(response)
    }

    /// Frame and send a command
    ///
    /// With `escape` the configured masking applies, otherwise the message
    /// goes out raw. With `expect_response` the call blocks for the
    /// configured response timeout.
    pub fn send(
        &mut self,
        command: u8,
        args: &[u8],
        expect_response: bool,
        escape: bool,
    ) -> Result<Option<Vec<u8>>> {
        let masking = if escape { self.config.masking } else { Masking::Raw };
        let message = encode(command, args, masking)?;
        self.send_raw(&message)?;

        if !expect_response {
            return Ok(None);
        }

        let response = self.recv_response(self.config.response_timeout())?;
        if response.is_none() {
            tracing::warn!("No acknowledgment for command 0x{:02x}", command);
        }
        Ok(response)
    }

    fn send_command(&mut self, command: CommandType, args: &[u8]) -> Result<()> {
        self.send(command as u8, args, false, command.is_masked())?;
        Ok(())
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Fill the display with one color
    pub fn set_color(&mut self, r: u8, g: u8, b: u8) -> Result<()> {
        tracing::debug!("Set color {:02x}{:02x}{:02x}", r, g, b);
        self.send_command(CommandType::SetColor, &[r, g, b])
    }

    pub fn set_brightness(&mut self, level: u8) -> Result<()> {
        tracing::debug!("Set brightness {}", level);
        self.send_command(CommandType::SetBrightness, &[level])
    }

    pub fn set_mode(&mut self, mode: Mode) -> Result<()> {
        tracing::debug!("Set mode {}", mode);
        self.send_command(CommandType::SetMode, &[mode as u8])
    }

    /// Show a still image
    pub fn draw_pixels(&mut self, grid: &PixelGrid) -> Result<()> {
        let image = encode_image(grid)?;
        self.draw_encoded(&image)
    }

    /// Show an already encoded still image
    pub fn draw_encoded(&mut self, image: &EncodedImage) -> Result<()> {
        let payload = static_image_payload(image)?;
        tracing::debug!(
            "Drawing image: {} colors, {} payload bytes",
            image.palette_size(),
            payload.len()
        );
        self.send_command(CommandType::DrawImage, &payload)
    }

    /// Load, encode and show an image file
    pub fn draw_image(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let grid = self.loader.load(path.as_ref())?;
        self.draw_pixels(&grid)
    }

    /// Play a sequence of grids, `speed_ms` apart
    pub fn draw_animation(&mut self, grids: &[PixelGrid], speed_ms: u16) -> Result<()> {
        let images = grids.iter().map(encode_image).collect::<Result<Vec<_>>>()?;
        let frames = sequence_frames(images, speed_ms);
        let chunks = chunk_animation(&frames, self.config.chunk_size)?;

        tracing::debug!(
            "Sending animation: {} frames in {} chunks",
            frames.len(),
            chunks.len()
        );

        for chunk in &chunks {
            self.send_command(CommandType::AnimationChunk, &chunk.to_payload())?;
        }
        Ok(())
    }

    /// Play a sequence of grids at the configured animation speed
    pub fn draw_frames(&mut self, grids: &[PixelGrid]) -> Result<()> {
        self.draw_animation(grids, self.config.animation_speed_ms)
    }

    /// Play image files as an animation, in the given order
    pub fn draw_animation_files<P: AsRef<Path>>(&mut self, paths: &[P], speed_ms: u16) -> Result<()> {
        let grids = paths
            .iter()
            .map(|p| self.loader.load(p.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        self.draw_animation(&grids, speed_ms)
    }

    /// Play every frame of an animated GIF
    pub fn draw_gif(&mut self, path: impl AsRef<Path>, speed_ms: u16) -> Result<()> {
        let grids = self.loader.load_frames(path.as_ref())?;
        self.draw_animation(&grids, speed_ms)
    }
}

impl<T: Transport> Drop for Device<T> {
    fn drop(&mut self) {
        if self.connected {
            self.connected = false;
            if let Err(e) = self.transport.disconnect() {
                tracing::warn!("Error closing link to {}: {}", self.config.device_addr, e);
            }
        }
    }
}

fn settle(delay: Duration) {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
}

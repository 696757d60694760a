//! Configuration for timebox
//!
//! Centralized configuration with sensible defaults.

use std::time::Duration;

use crate::error::{Result, TimeboxError};
use crate::protocol::Masking;

/// Main configuration for a device session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Connection Configuration
    // -------------------------------------------------------------------------
    /// Address of the device (or of the stream bridge in front of it)
    pub device_addr: String,

    /// Delay after connect and before disconnect (milliseconds).
    /// The firmware drops commands sent right after the link comes up.
    pub settle_delay_ms: u64,

    /// How long to wait for an acknowledgment (milliseconds)
    pub response_timeout_ms: u64,

    /// Max bytes read per acknowledgment
    pub response_buffer_size: usize,

    // -------------------------------------------------------------------------
    // Protocol Configuration
    // -------------------------------------------------------------------------
    /// Escape policy for commands that are sent masked
    pub masking: Masking,

    /// Animation buffer bytes per 0x49 chunk
    pub chunk_size: usize,

    /// Default delay between animation frames (milliseconds)
    pub animation_speed_ms: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            device_addr: String::new(),
            settle_delay_ms: 500,
            response_timeout_ms: 2000,
            response_buffer_size: 256,
            masking: Masking::Full,
            chunk_size: 200,
            animation_speed_ms: 100,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check that the config can drive a session
    pub fn validate(&self) -> Result<()> {
        if self.device_addr.trim().is_empty() {
            return Err(TimeboxError::Config("device address is required".to_string()));
        }
        if self.chunk_size == 0 {
            return Err(TimeboxError::Config("chunk size must be non-zero".to_string()));
        }
        if self.response_buffer_size == 0 {
            return Err(TimeboxError::Config(
                "response buffer size must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn response_timeout(&self) -> Duration {
        Duration::from_millis(self.response_timeout_ms)
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the device address
    pub fn device_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.device_addr = addr.into();
        self
    }

    /// Set the settle delay (in milliseconds)
    pub fn settle_delay_ms(mut self, ms: u64) -> Self {
        self.config.settle_delay_ms = ms;
        self
    }

    /// Set the acknowledgment timeout (in milliseconds)
    pub fn response_timeout_ms(mut self, ms: u64) -> Self {
        self.config.response_timeout_ms = ms;
        self
    }

    /// Set the acknowledgment read size (in bytes)
    pub fn response_buffer_size(mut self, size: usize) -> Self {
        self.config.response_buffer_size = size;
        self
    }

    /// Set the escape policy for masked commands
    pub fn masking(mut self, masking: Masking) -> Self {
        self.config.masking = masking;
        self
    }

    /// Set the animation chunk size (in bytes)
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.config.chunk_size = size;
        self
    }

    /// Set the default animation speed (in milliseconds per frame)
    pub fn animation_speed_ms(mut self, ms: u16) -> Self {
        self.config.animation_speed_ms = ms;
        self
    }

    /// Validate and return the config
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}

//! Command definitions
//!
//! Command bytes understood by the device and the display modes.

use std::fmt;
use std::str::FromStr;

use crate::error::TimeboxError;

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CommandType {
    SetMode = 0x45,
    DrawImage = 0x44,
    AnimationChunk = 0x49,
    SetColor = 0x6f,
    SetBrightness = 0x74,
}

impl CommandType {
    /// Whether the payload of this command is sent with reserved-byte escaping.
    ///
    /// Image data must reach the device raw, reserved bytes included.
    pub fn is_masked(self) -> bool {
        !matches!(self, CommandType::DrawImage | CommandType::AnimationChunk)
    }
}

impl TryFrom<u8> for CommandType {
    type Error = TimeboxError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte {
            0x45 => Ok(CommandType::SetMode),
            0x44 => Ok(CommandType::DrawImage),
            0x49 => Ok(CommandType::AnimationChunk),
            0x6f => Ok(CommandType::SetColor),
            0x74 => Ok(CommandType::SetBrightness),
            _ => Err(TimeboxError::Framing(format!(
                "Unknown command type: 0x{:02x}",
                byte
            ))),
        }
    }
}

/// Display modes selectable with [`CommandType::SetMode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Mode {
    Clock = 0,
    Temp = 1,
    Anim = 2,
    Graph = 3,
    Image = 4,
    Stopwatch = 5,
    Scoreboard = 6,
}

impl Mode {
    pub const ALL: [Mode; 7] = [
        Mode::Clock,
        Mode::Temp,
        Mode::Anim,
        Mode::Graph,
        Mode::Image,
        Mode::Stopwatch,
        Mode::Scoreboard,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Mode::Clock => "clock",
            Mode::Temp => "temp",
            Mode::Anim => "anim",
            Mode::Graph => "graph",
            Mode::Image => "image",
            Mode::Stopwatch => "stopwatch",
            Mode::Scoreboard => "scoreboard",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = TimeboxError;

    /// Accepts a mode name (case-insensitive) or its number
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<u8>() {
            return Mode::ALL
                .into_iter()
                .find(|m| *m as u8 == n)
                .ok_or_else(|| TimeboxError::Config(format!("Unknown mode number: {}", n)));
        }
        Mode::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| TimeboxError::Config(format!("Unknown mode: {}", s)))
    }
}

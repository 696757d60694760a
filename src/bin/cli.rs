//! timebox CLI
//!
//! Command-line interface for driving a display.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use timebox::observer::TracingObserver;
use timebox::protocol::{Masking, Mode};
use timebox::transport::TcpTransport;
use timebox::{Config, Device};
use tracing_subscriber::{fmt, EnvFilter};

/// timebox CLI
#[derive(Parser, Debug)]
#[command(name = "timebox-cli")]
#[command(about = "Drive a 16x16 Bluetooth LED matrix display")]
#[command(version)]
struct Args {
    /// Device address (host:port of the stream bridge)
    #[arg(short, long, env = "TIMEBOX_ADDR")]
    device: Option<String>,

    /// Delay after connect and before disconnect, in milliseconds
    #[arg(long, default_value = "500")]
    settle_ms: u64,

    /// Escape policy for masked commands
    #[arg(long, value_enum, default_value = "full")]
    masking: MaskingArg,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fill the display with one color
    Color {
        r: u8,
        g: u8,
        b: u8,
    },

    /// Set the brightness
    Brightness {
        level: u8,
    },

    /// Switch display mode (clock, temp, anim, graph, image, stopwatch, scoreboard)
    Mode {
        #[arg(value_parser = parse_mode)]
        mode: Mode,
    },

    /// Draw a still image
    Image {
        path: PathBuf,
    },

    /// Play image files as an animation
    Anim {
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Milliseconds between frames [default: 100]
        #[arg(short, long)]
        speed: Option<u16>,
    },

    /// Play an animated GIF
    Gif {
        path: PathBuf,

        /// Milliseconds between frames [default: 100]
        #[arg(short, long)]
        speed: Option<u16>,
    },

    /// Connect and report whether the device answers
    Ping,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MaskingArg {
    /// Escape the checksum along with the body
    Full,
    /// Leave the checksum raw
    Body,
}

impl From<MaskingArg> for Masking {
    fn from(arg: MaskingArg) -> Self {
        match arg {
            MaskingArg::Full => Masking::Full,
            MaskingArg::Body => Masking::Body,
        }
    }
}

fn parse_mode(s: &str) -> Result<Mode, String> {
    s.parse::<Mode>().map_err(|e| e.to_string())
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,timebox=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> timebox::Result<()> {
    let addr = args.device.unwrap_or_default();

    let config = Config::builder()
        .device_addr(&addr)
        .settle_delay_ms(args.settle_ms)
        .masking(args.masking.into())
        .build()?;

    let mut device = Device::new(TcpTransport::new(&addr), config).with_observer(TracingObserver);
    device.connect()?;
    let default_speed = device.config().animation_speed_ms;

    match args.command {
        Commands::Color { r, g, b } => device.set_color(r, g, b)?,
        Commands::Brightness { level } => device.set_brightness(level)?,
        Commands::Mode { mode } => device.set_mode(mode)?,
        Commands::Image { path } => device.draw_image(&path)?,
        Commands::Anim { paths, speed } => {
            device.draw_animation_files(&paths, speed.unwrap_or(default_speed))?
        }
        Commands::Gif { path, speed } => {
            device.draw_gif(&path, speed.unwrap_or(default_speed))?
        }
        Commands::Ping => {
            let alive = device.is_connected();
            tracing::info!("Device {} is {}", addr, if alive { "connected" } else { "not responding" });
        }
    }

    device.disconnect()
}

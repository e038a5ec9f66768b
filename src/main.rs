//! Sinegen - play a sine wave on the default audio output
//!
//! # Usage
//!
//! ```bash
//! # A4 at half scale until Enter is pressed
//! sinegen
//!
//! # 220 Hz, quieter, asking the device for 256-frame buffers
//! sinegen --frequency 220 --amplitude 0.2 --buffer-frames 256
//!
//! # Type new frequencies while it plays
//! sinegen --control
//! ```
//!
//! Set `RUST_LOG=debug` for stream lifecycle details.

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::Parser;
use sinegen::config::DEFAULT_FREQUENCY;
use sinegen::host::Session;
use sinegen::oscillators::DEFAULT_AMPLITUDE;
use sinegen::{FrequencyControl, OscillatorConfig, SineCallback};

/// Real-time sine generator
#[derive(Parser)]
#[command(name = "sinegen")]
#[command(about = "Play a sine wave on the default audio output")]
#[command(version)]
struct Cli {
    /// Frequency in Hz
    #[arg(short, long, default_value_t = DEFAULT_FREQUENCY, allow_negative_numbers = true)]
    frequency: f64,

    /// Peak amplitude in (0, 1]
    #[arg(short, long, default_value_t = DEFAULT_AMPLITUDE)]
    amplitude: f64,

    /// Session name used in log output
    #[arg(long, default_value = "SineGen")]
    name: String,

    /// Requested buffer size in frames (clamped to what the device supports)
    #[arg(long)]
    buffer_frames: Option<u32>,

    /// Read new frequencies from stdin while playing
    #[arg(long)]
    control: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = OscillatorConfig::default()
        .frequency(cli.frequency)
        .amplitude(cli.amplitude);

    let session = Session::open(&cli.name).context("could not open audio session")?;
    let sample_rate = session.sample_rate();
    config
        .validate(sample_rate)
        .context("invalid oscillator configuration")?;

    let port = session.register_output(cli.buffer_frames);

    if cli.control {
        let (control, reader) = FrequencyControl::new(config.frequency, sample_rate)
            .context("invalid oscillator configuration")?;
        let callback = SineCallback::with_control(config.build(), reader);
        let active = session
            .activate(port, callback)
            .context("could not activate audio stream")?;

        println!(
            "{} running at {:.0}Hz. Type a frequency and press Enter to change it, empty line to quit...",
            cli.name, config.frequency
        );
        for line in io::stdin().lock().lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                break;
            }
            match line.parse::<f64>() {
                Ok(frequency) => match control.try_set(frequency, active.sample_rate()) {
                    Ok(()) => log::info!("frequency: {:.2}Hz", frequency),
                    Err(e) => log::warn!("{}", e),
                },
                Err(e) => log::warn!("not a frequency: {:?} ({})", line, e),
            }
        }

        active.close();
    } else {
        let callback = SineCallback::new(config.build());
        let active = session
            .activate(port, callback)
            .context("could not activate audio stream")?;

        println!(
            "{} running at {:.0}Hz. Press Enter to quit...",
            cli.name, config.frequency
        );
        let mut line = String::new();
        io::stdin().read_line(&mut line)?;

        active.close();
    }

    log::info!("{}: stopped", cli.name);
    Ok(())
}

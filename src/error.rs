//! Startup error taxonomy.
//!
//! Every variant is raised before the stream is activated; the real-time
//! callback has no error path.

/// Errors raised while configuring or starting the generator.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid frequency {0} Hz: must be finite and non-negative")]
    InvalidFrequency(f64),

    #[error("invalid amplitude {0}: must be in (0, 1]")]
    InvalidAmplitude(f64),

    #[error("invalid sample rate {0} Hz: must be finite and positive")]
    InvalidSampleRate(f64),

    #[error("frequency {frequency} Hz is at or above the Nyquist limit of {nyquist} Hz")]
    AboveNyquist { frequency: f64, nyquist: f64 },

    #[error("audio host unavailable: {0}")]
    HostUnavailable(String),

    #[error("could not activate audio stream: {0}")]
    Activation(String),

    #[error("unsupported sample format: {0}")]
    UnsupportedSampleFormat(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

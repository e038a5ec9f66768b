//! Sinegen - a real-time sine oscillator for host audio callbacks
//!
//! The crate is split into an allocation-free numeric core (the phase
//! accumulating [`SineOscillator`] and the [`SineCallback`] adapter) and the
//! startup collaborators around it: configuration, errors and, behind the
//! `host` feature, a cpal-backed audio session.

pub mod callback;
pub mod config;
pub mod control;
pub mod error;
#[cfg(feature = "host")]
pub mod host;
pub mod oscillators;
pub mod signal;

// Re-export commonly used types at the crate root
pub use callback::{BufferCallback, ProcessStatus, SineCallback};
pub use config::OscillatorConfig;
pub use control::{FrequencyControl, FrequencyReader};
pub use error::{Error, Result};
pub use oscillators::{Oscillator, SineOscillator};
pub use signal::{Pitched, Signal};

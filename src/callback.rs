//! Real-time callback adapter.
//!
//! The host invokes a [`BufferCallback`] once per audio buffer. Implementations
//! run on the host's audio thread and must be deterministic, allocation-free
//! and lock-free: no logging, no blocking I/O, no waiting.

use crate::control::FrequencyReader;
use crate::oscillators::SineOscillator;
use crate::signal::{Pitched, nyquist};

/// Status returned to the host after each buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessStatus {
    /// Keep invoking the callback.
    Continue,
    /// The callback is finished; the host outputs silence from now on.
    Quit,
}

/// Per-buffer entry point implemented by anything the host can drive.
pub trait BufferCallback {
    /// Fill `output` (one mono sample per frame) at `sample_rate`.
    fn on_buffer(&mut self, sample_rate: f64, output: &mut [f64]) -> ProcessStatus;
}

/// Adapter bridging host buffers to a [`SineOscillator`].
///
/// Owns the oscillator outright. When built with a [`FrequencyReader`] the
/// target frequency is loaded once at the top of every buffer; otherwise the
/// oscillator's own fixed frequency is used.
#[derive(Debug)]
pub struct SineCallback {
    oscillator: SineOscillator,
    frequency: Option<FrequencyReader>,
}

impl SineCallback {
    pub fn new(oscillator: SineOscillator) -> Self {
        Self {
            oscillator,
            frequency: None,
        }
    }

    /// Adapter whose frequency follows a [`FrequencyControl`](crate::FrequencyControl).
    pub fn with_control(oscillator: SineOscillator, frequency: FrequencyReader) -> Self {
        Self {
            oscillator,
            frequency: Some(frequency),
        }
    }

    pub fn oscillator(&self) -> &SineOscillator {
        &self.oscillator
    }
}

impl BufferCallback for SineCallback {
    #[inline]
    fn on_buffer(&mut self, sample_rate: f64, output: &mut [f64]) -> ProcessStatus {
        let frequency = match &self.frequency {
            Some(reader) => reader.get(),
            None => self.oscillator.frequency(),
        };

        // A nonsense rate or frequency gets silence and leaves the phase
        // alone; NaN comparisons are false, so NaN lands here too
        let in_range = sample_rate.is_finite()
            && sample_rate > 0.0
            && frequency >= 0.0
            && frequency < nyquist(sample_rate);
        if !in_range {
            output.fill(0.0);
            return ProcessStatus::Continue;
        }

        self.oscillator.set_frequency(frequency);
        self.oscillator.generate(sample_rate, frequency, output);
        ProcessStatus::Continue
    }
}

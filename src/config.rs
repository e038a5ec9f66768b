//! Startup parameters for the oscillator.
//!
//! Values are fixed before the stream is activated. Validation needs the
//! host's sample rate, so it runs after the session is opened and before
//! the callback is registered.

use crate::error::{Error, Result};
use crate::oscillators::{DEFAULT_AMPLITUDE, SineOscillator};
use crate::signal::nyquist;

/// Frequency used when none is given (A4).
pub const DEFAULT_FREQUENCY: f64 = 440.0;

/// Oscillator startup parameters.
///
/// # Examples
///
/// ```
/// use sinegen::OscillatorConfig;
///
/// let config = OscillatorConfig::default().frequency(220.0);
/// assert!(config.validate(48_000.0).is_ok());
/// assert!(config.validate(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OscillatorConfig {
    /// Target frequency in Hz (default: 440.0)
    pub frequency: f64,
    /// Peak output magnitude (default: 0.5)
    pub amplitude: f64,
}

impl Default for OscillatorConfig {
    fn default() -> Self {
        Self {
            frequency: DEFAULT_FREQUENCY,
            amplitude: DEFAULT_AMPLITUDE,
        }
    }
}

impl OscillatorConfig {
    pub fn frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Checks the parameters against the host sample rate.
    ///
    /// Rejects a non-positive sample rate, a negative frequency, an amplitude
    /// outside `(0, 1]`, and any frequency at or above Nyquist.
    pub fn validate(&self, sample_rate: f64) -> Result<()> {
        validate_sample_rate(sample_rate)?;
        validate_frequency(self.frequency, sample_rate)?;
        if !(self.amplitude > 0.0 && self.amplitude <= 1.0) {
            return Err(Error::InvalidAmplitude(self.amplitude));
        }
        Ok(())
    }

    /// Builds an oscillator at phase zero from these parameters.
    pub fn build(&self) -> SineOscillator {
        SineOscillator::new(self.frequency).with_amplitude(self.amplitude)
    }
}

pub(crate) fn validate_sample_rate(sample_rate: f64) -> Result<()> {
    if sample_rate.is_finite() && sample_rate > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidSampleRate(sample_rate))
    }
}

/// Checks `frequency` is usable at `sample_rate`. The sample rate must
/// already be valid.
pub(crate) fn validate_frequency(frequency: f64, sample_rate: f64) -> Result<()> {
    if !(frequency.is_finite() && frequency >= 0.0) {
        return Err(Error::InvalidFrequency(frequency));
    }
    let nyquist = nyquist(sample_rate);
    if frequency >= nyquist {
        return Err(Error::AboveNyquist { frequency, nyquist });
    }
    Ok(())
}

//! Sine wave oscillator implementation.

use super::Oscillator;
use crate::signal::{Pitched, Signal, TAU};

/// Amplitude used when none is given; leaves 6 dB of headroom for mixing.
pub const DEFAULT_AMPLITUDE: f64 = 0.5;

/// A phase-accumulating sine oscillator.
///
/// The phase is kept in radians and wrapped back into `[0, 2π)` after every
/// sample, so precision does not degrade however long the oscillator runs.
/// Phase carries across calls, which makes splitting the output into host
/// buffers of any size transparent.
///
/// Generation never allocates, locks or fails; invalid sample rates and
/// frequencies must be rejected before the oscillator is driven (see
/// [`OscillatorConfig::validate`](crate::OscillatorConfig::validate)).
#[derive(Debug, Clone, PartialEq)]
pub struct SineOscillator {
    /// Current phase in radians, in `[0, 2π)`
    phase: f64,
    /// Target frequency in Hz
    frequency: f64,
    /// Peak output magnitude
    amplitude: f64,
}

impl SineOscillator {
    /// Creates a new sine oscillator at phase zero with the default amplitude.
    ///
    /// # Examples
    ///
    /// ```
    /// use sinegen::{Oscillator, SineOscillator};
    ///
    /// // A4 at half scale
    /// let osc = SineOscillator::new(440.0);
    /// assert_eq!(osc.phase(), 0.0);
    /// assert_eq!(osc.amplitude(), 0.5);
    /// ```
    pub fn new(frequency: f64) -> Self {
        Self {
            phase: 0.0,
            frequency,
            amplitude: DEFAULT_AMPLITUDE,
        }
    }

    /// Sets the peak output magnitude.
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Peak output magnitude.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Fills `out` with consecutive samples of a sine at `frequency`.
    ///
    /// The number of samples generated is `out.len()`; an empty slice leaves
    /// the phase untouched. The increment `2π * frequency / sample_rate` is
    /// recomputed for each sample, so a sample rate change between calls
    /// takes effect immediately.
    ///
    /// `sample_rate` must be positive and `frequency` below the Nyquist
    /// limit; neither is checked here.
    ///
    /// # Examples
    ///
    /// ```
    /// use sinegen::SineOscillator;
    ///
    /// let mut osc = SineOscillator::new(1.0);
    /// let mut out = [0.0; 4];
    /// osc.generate(4.0, 1.0, &mut out);
    ///
    /// let expected = [0.0, 0.5, 0.0, -0.5];
    /// for (got, want) in out.iter().zip(expected) {
    ///     assert!((got - want).abs() < 1e-12);
    /// }
    /// ```
    #[inline]
    pub fn generate(&mut self, sample_rate: f64, frequency: f64, out: &mut [f64]) {
        for sample in out.iter_mut() {
            *sample = self.amplitude * self.phase.sin();
            self.advance(TAU * frequency / sample_rate);
        }
    }

    /// Adds one increment and wraps. A single subtraction suffices because
    /// sub-Nyquist increments are always below `π`.
    #[inline(always)]
    fn advance(&mut self, increment: f64) {
        self.phase += increment;
        if self.phase >= TAU {
            self.phase -= TAU;
        }
    }
}

impl Default for SineOscillator {
    fn default() -> Self {
        Self::new(440.0)
    }
}

impl Signal for SineOscillator {
    fn next_sample(&mut self, sample_rate: f64) -> f64 {
        let sample = self.amplitude * self.phase.sin();
        self.advance(TAU * self.frequency / sample_rate);
        sample
    }

    fn process(&mut self, sample_rate: f64, buffer: &mut [f64]) {
        self.generate(sample_rate, self.frequency, buffer);
    }
}

impl Pitched for SineOscillator {
    fn set_frequency(&mut self, frequency: f64) {
        self.frequency = frequency;
    }

    fn frequency(&self) -> f64 {
        self.frequency
    }
}

impl Oscillator for SineOscillator {
    fn reset(&mut self) {
        self.phase = 0.0;
    }

    fn phase(&self) -> f64 {
        self.phase
    }
}

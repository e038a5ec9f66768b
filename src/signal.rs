//! Core signal processing traits.
//!
//! This module provides the `Signal` trait for anything that produces
//! samples at a host-supplied sample rate, and the `Pitched` trait for
//! anything with a controllable frequency.

/// One full cycle, in radians.
pub const TAU: f64 = std::f64::consts::TAU;

/// Highest frequency representable at `sample_rate` without aliasing.
#[inline]
pub fn nyquist(sample_rate: f64) -> f64 {
    sample_rate / 2.0
}

/// Common interface for sample generators driven by an audio host.
///
/// Unlike a fixed-rate synth graph, the sample rate here belongs to the host
/// and may only be known once a session is open, so it is passed on every
/// call rather than baked into the type.
///
/// The trait provides two operations:
/// - Single sample generation via `next_sample()`
/// - Batch processing via `process()`
pub trait Signal {
    /// Generates the next sample at the given sample rate.
    fn next_sample(&mut self, sample_rate: f64) -> f64;

    /// Generates `buffer.len()` samples into a buffer.
    ///
    /// Default implementation calls `next_sample()` for each element.
    /// Implementors may override this for more efficient batch processing.
    ///
    /// # Arguments
    ///
    /// * `sample_rate` - Host sample rate in Hz
    /// * `buffer` - Mutable slice to fill with samples
    fn process(&mut self, sample_rate: f64, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample(sample_rate);
        }
    }
}

/// Minimal trait for anything with a controllable pitch.
///
/// # Examples
///
/// ```
/// use sinegen::{Pitched, SineOscillator};
///
/// // Oscillators implement Pitched, so you need to import the trait
/// // to use its methods
/// let mut osc = SineOscillator::new(440.0);
/// assert_eq!(osc.frequency(), 440.0);
///
/// osc.set_frequency(880.0);
/// assert_eq!(osc.frequency(), 880.0);
/// ```
pub trait Pitched {
    /// Sets the frequency of the signal in Hz.
    fn set_frequency(&mut self, freq: f64);

    /// Gets the current frequency of the signal in Hz.
    fn frequency(&self) -> f64;
}

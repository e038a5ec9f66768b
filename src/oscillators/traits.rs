//! Core trait definitions for oscillators.

use crate::signal::Pitched;

/// Oscillators are pitched signals with additional state control.
///
/// This trait extends `Pitched` to add oscillator-specific functionality
/// like state reset. All oscillators have controllable frequency (via `Pitched`)
/// and can reset their internal state to initial conditions.
pub trait Oscillator: Pitched {
    /// Resets the oscillator to its initial state.
    ///
    /// This resets the phase to zero; frequency and amplitude are kept.
    fn reset(&mut self);

    /// Current phase in radians, always in `[0, 2π)`.
    fn phase(&self) -> f64;
}

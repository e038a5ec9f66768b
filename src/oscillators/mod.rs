//! Oscillator implementations.
//!
//! This module contains the `Oscillator` trait and the phase-accumulating
//! sine oscillator that drives the output stream.

mod sine;
mod traits;

pub use sine::{DEFAULT_AMPLITUDE, SineOscillator};
pub use traits::Oscillator;

//! Lock-free frequency handoff from a control thread to the audio callback.
//!
//! The frequency is stored as `f64` bits in an `AtomicU64` (there is no
//! `AtomicF64` in std). There is exactly one writer and one reader; the
//! reader loads once at the top of each buffer so a change never lands in
//! the middle of one.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use crate::config::{validate_frequency, validate_sample_rate};
use crate::error::Result;

/// Writer half, owned by a non-real-time thread.
#[derive(Debug)]
pub struct FrequencyControl {
    bits: Arc<AtomicU64>,
}

/// Reader half, owned by the real-time callback.
#[derive(Debug)]
pub struct FrequencyReader {
    bits: Arc<AtomicU64>,
}

impl FrequencyControl {
    /// Create a linked writer/reader pair holding `frequency`, which must be
    /// valid at `sample_rate`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sinegen::FrequencyControl;
    ///
    /// let (control, reader) = FrequencyControl::new(440.0, 48_000.0).unwrap();
    /// control.try_set(880.0, 48_000.0).unwrap();
    /// assert_eq!(reader.get(), 880.0);
    ///
    /// assert!(FrequencyControl::new(f64::NAN, 48_000.0).is_err());
    /// ```
    pub fn new(frequency: f64, sample_rate: f64) -> Result<(FrequencyControl, FrequencyReader)> {
        validate_sample_rate(sample_rate)?;
        validate_frequency(frequency, sample_rate)?;
        let bits = Arc::new(AtomicU64::new(frequency.to_bits()));
        Ok((
            FrequencyControl {
                bits: Arc::clone(&bits),
            },
            FrequencyReader { bits },
        ))
    }

    /// Publish a new frequency if it is valid at `sample_rate`.
    ///
    /// On error the previous frequency stays in effect.
    pub fn try_set(&self, frequency: f64, sample_rate: f64) -> Result<()> {
        validate_sample_rate(sample_rate)?;
        validate_frequency(frequency, sample_rate)?;
        self.store(frequency);
        Ok(())
    }

    /// Last published frequency.
    pub fn get(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Acquire))
    }

    pub(crate) fn store(&self, frequency: f64) {
        self.bits.store(frequency.to_bits(), Ordering::Release);
    }
}

impl FrequencyReader {
    /// Current target frequency. Wait-free; safe to call from the callback.
    #[inline]
    pub fn get(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Acquire))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::thread;

    #[test]
    fn test_initial_value() {
        let (control, reader) = FrequencyControl::new(440.0, 48_000.0).unwrap();
        assert_eq!(control.get(), 440.0);
        assert_eq!(reader.get(), 440.0);
    }

    #[test]
    fn test_new_rejects_invalid() {
        for frequency in [f64::NAN, f64::INFINITY, -440.0, 24_000.0, 100_000.0] {
            assert!(FrequencyControl::new(frequency, 48_000.0).is_err());
        }
        assert!(matches!(
            FrequencyControl::new(440.0, 0.0),
            Err(Error::InvalidSampleRate(_))
        ));
    }

    #[test]
    fn test_try_set_rejects_invalid() {
        let (control, reader) = FrequencyControl::new(440.0, 48_000.0).unwrap();

        assert!(matches!(
            control.try_set(30_000.0, 48_000.0),
            Err(Error::AboveNyquist { .. })
        ));
        assert!(matches!(
            control.try_set(-5.0, 48_000.0),
            Err(Error::InvalidFrequency(_))
        ));
        assert!(matches!(
            control.try_set(f64::NAN, 48_000.0),
            Err(Error::InvalidFrequency(_))
        ));
        assert!(matches!(
            control.try_set(440.0, f64::NAN),
            Err(Error::InvalidSampleRate(_))
        ));
        assert_eq!(reader.get(), 440.0);

        control.try_set(1_000.0, 48_000.0).unwrap();
        assert_eq!(reader.get(), 1_000.0);
    }

    #[test]
    fn test_reader_sees_published_values_while_writer_runs() {
        let (control, reader) = FrequencyControl::new(0.0, 48_000.0).unwrap();

        let writer = thread::spawn(move || {
            for hz in 1..=10_000 {
                control.try_set(hz as f64, 48_000.0).unwrap();
            }
        });

        let mut last = 0.0;
        while !writer.is_finished() {
            let seen = reader.get();
            // Only whole values 0..=10_000 are ever stored, in increasing order
            assert!(seen.fract() == 0.0 && (0.0..=10_000.0).contains(&seen));
            assert!(seen >= last, "went back from {last} to {seen}");
            last = seen;
        }
        writer.join().unwrap();

        assert_eq!(reader.get(), 10_000.0);
    }
}

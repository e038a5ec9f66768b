use sinegen::{BufferCallback, Oscillator, OscillatorConfig, SineCallback, SineOscillator};
use std::f64::consts::TAU;

const SAMPLE_RATE: f64 = 48_000.0;

fn in_phase_range(osc: &SineOscillator) -> bool {
    (0.0..TAU).contains(&osc.phase())
}

#[test]
fn test_generates_exactly_count_samples() {
    let mut osc = SineOscillator::new(440.0);
    for count in [0, 1, 2, 63, 64, 65, 512, 4096] {
        let mut out = vec![f64::NAN; count];
        osc.generate(SAMPLE_RATE, 440.0, &mut out);
        assert_eq!(out.len(), count);
        assert!(out.iter().all(|s| s.is_finite()));
    }
}

#[test]
fn test_samples_within_amplitude() {
    for amplitude in [0.1, 0.5, 1.0] {
        let mut osc = SineOscillator::new(997.0).with_amplitude(amplitude);
        let mut out = vec![0.0; 10_000];
        osc.generate(SAMPLE_RATE, 997.0, &mut out);
        assert!(out.iter().all(|s| (-amplitude..=amplitude).contains(s)));
        assert!(in_phase_range(&osc));
    }
}

#[test]
fn test_buffer_splitting_is_transparent() {
    let mut whole = SineOscillator::new(440.0);
    let mut single = vec![0.0; 1000];
    whole.generate(SAMPLE_RATE, 440.0, &mut single);

    let mut split = SineOscillator::new(440.0);
    let mut pieces = vec![0.0; 1000];
    for chunk in pieces.chunks_mut(100) {
        split.generate(SAMPLE_RATE, 440.0, chunk);
    }

    for (a, b) in single.iter().zip(&pieces) {
        assert!((a - b).abs() < 1e-12);
    }
    assert!((whole.phase() - split.phase()).abs() < 1e-12);
}

#[test]
fn test_zero_frequency_is_constant() {
    let mut osc = SineOscillator::new(0.0);
    let initial = osc.amplitude() * osc.phase().sin();
    let mut out = [1.0; 5];

    osc.generate(SAMPLE_RATE, 0.0, &mut out);

    assert!(out.iter().all(|&s| s == initial));
    assert_eq!(osc.phase(), 0.0);
}

#[test]
fn test_zero_count_is_empty_and_keeps_phase() {
    let mut osc = SineOscillator::new(440.0);
    osc.generate(SAMPLE_RATE, 440.0, &mut [0.0; 3]);
    let before = osc.phase();

    let mut out: Vec<f64> = Vec::new();
    osc.generate(SAMPLE_RATE, 440.0, &mut out);

    assert!(out.is_empty());
    assert_eq!(osc.phase(), before);
}

#[test]
fn test_quarter_cycle_known_values() {
    let mut osc = SineOscillator::new(1.0).with_amplitude(0.5);
    let mut out = [0.0; 4];

    osc.generate(4.0, 1.0, &mut out);

    for (got, want) in out.iter().zip([0.0, 0.5, 0.0, -0.5]) {
        assert!((got - want).abs() < 1e-9, "got {got}, want {want}");
    }
}

#[test]
fn test_long_run_stability() {
    let mut osc = SineOscillator::new(440.0);
    let mut block = [0.0; 1000];

    for _ in 0..10_000 {
        osc.generate(SAMPLE_RATE, 440.0, &mut block);
        assert!(block.iter().all(|s| (-0.5..=0.5).contains(s)));
        assert!(in_phase_range(&osc));
    }

    // 10^7 samples of 440 Hz at 48 kHz is 91 666 and two thirds cycles
    assert!((osc.phase() - TAU * 2.0 / 3.0).abs() < 1e-6);
}

#[test]
fn test_callback_from_config_streams_continuously() {
    let config = OscillatorConfig::default();
    config.validate(SAMPLE_RATE).unwrap();

    let mut callback = SineCallback::new(config.build());
    let mut reference = config.build();

    let mut expected = vec![0.0; 3 * 256];
    reference.generate(SAMPLE_RATE, config.frequency, &mut expected);

    let mut streamed = vec![0.0; 3 * 256];
    for buffer in streamed.chunks_mut(256) {
        callback.on_buffer(SAMPLE_RATE, buffer);
    }

    assert_eq!(streamed, expected);
}

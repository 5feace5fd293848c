//! Brass — additive harmonic stack, high-pass filter, and ADSR shaping.

use std::f64::consts::PI;

use crate::signal::time_axis;

use super::{AdsrEnvelope, Instrument, NoteSpec};

/// Relative amplitudes of the first 19 partials of the brass spectrum.
const PARTIAL_AMPLITUDES: [f64; 19] = [
    3.6, 2.825, 3.0, 2.688, 1.464, 1.520, 1.122, 0.940, 0.738, 0.495, 0.362, 0.237, 0.154, 0.154,
    0.101, 0.082, 0.054, 0.038, 0.036,
];

/// High-pass cutoff scales with pitch: RC = 1 / (π · f · HIGHPASS_FACTOR).
const HIGHPASS_FACTOR: f64 = 32.0;

/// Additive brass synthesizer.
///
/// Sums the fixed partial stack, strips the low-frequency buildup with a
/// single-pole high-pass, then shapes the result with a linear ADSR. Notes
/// shorter than attack + decay + release skip the envelope and come out as
/// the raw filtered stack.
pub struct Trumpet {
    envelope: AdsrEnvelope,
}

impl Trumpet {
    pub fn new() -> Self {
        Self {
            envelope: AdsrEnvelope {
                attack: 0.075,
                decay: 0.3,
                release: 0.2,
                peak: 0.1,
                sustain: 0.8,
            },
        }
    }
}

impl Default for Trumpet {
    fn default() -> Self {
        Self::new()
    }
}

impl Instrument for Trumpet {
    fn render(&self, spec: &NoteSpec) -> Vec<f32> {
        let stacked = harmonic_stack(spec);
        let filtered = high_pass(&stacked, spec.frequency(), spec.sample_rate());

        match self.envelope.build(spec.duration(), spec.sample_rate()) {
            Some(gain) => filtered
                .iter()
                .zip(gain.iter())
                .map(|(s, g)| (s * g) as f32)
                .collect(),
            None => filtered.iter().map(|&s| s as f32).collect(),
        }
    }

    fn name(&self) -> &str {
        "trumpet"
    }
}

/// Sum the partial stack: partial k (1-based) at amplitude
/// `PARTIAL_AMPLITUDES[k-1]` and frequency `k · f`.
fn harmonic_stack(spec: &NoteSpec) -> Vec<f64> {
    let time = time_axis(spec.duration(), spec.sample_rate());
    let mut samples = vec![0.0; spec.duration()];

    for (k, &amplitude) in PARTIAL_AMPLITUDES.iter().enumerate() {
        let omega = 2.0 * PI * spec.frequency() * (k + 1) as f64;
        for (sample, &t) in samples.iter_mut().zip(time.iter()) {
            *sample += amplitude * (omega * t).sin();
        }
    }

    samples
}

/// Single-pole IIR high-pass: `y[i] = α · (y[i-1] + x[i] - x[i-1])`,
/// seeded with `y[0] = x[0]`. The time constant tracks the note's pitch.
fn high_pass(input: &[f64], frequency: f64, sample_rate: u32) -> Vec<f64> {
    if input.is_empty() {
        return Vec::new();
    }

    let rc = 1.0 / (PI * frequency * HIGHPASS_FACTOR);
    let alpha = rc / (rc + 1.0 / sample_rate as f64);

    let mut output = Vec::with_capacity(input.len());
    output.push(input[0]);
    for i in 1..input.len() {
        let y = alpha * (output[i - 1] + input[i] - input[i - 1]);
        output.push(y);
    }
    output
}

//! Plucked string — Karplus-Strong synthesis over a filtered noise buffer.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;

use super::{DelayLine, Instrument, NoteSpec};

/// Samples the echo path holds before it starts feeding back.
const ECHO_CAPACITY: usize = 200;

/// Per-pass gain on the echoed sample.
const ECHO_DECAY: f64 = 0.999;

/// Plucked string via the Karplus-Strong algorithm.
///
/// A ring buffer sized to one pitch period is seeded with standard-normal
/// white noise, then recirculated through a two-tap moving-average filter.
/// A fixed 200-sample delay line blends a decayed echo back in, coloring
/// the string's natural decay with a secondary resonance.
pub struct AcousticGuitar {
    seed: u64,
}

impl AcousticGuitar {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl Instrument for AcousticGuitar {
    fn render(&self, spec: &NoteSpec) -> Vec<f32> {
        let period = (spec.sample_rate() as f64 / spec.frequency()).round() as usize;
        // Above the sample rate the ring degenerates to a single cell and
        // the averaging filter becomes a plain feedback loop.
        let period = period.max(1);

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut ring: Vec<f64> = (0..period).map(|_| rng.sample(StandardNormal)).collect();
        let mut last = ring[0];

        let mut echo = DelayLine::new(ECHO_CAPACITY);
        let mut cursor = 0;
        let mut output = Vec::with_capacity(spec.duration());

        for _ in 0..spec.duration() {
            let mut current = (last + ring[cursor]) / 2.0;

            if echo.is_full() {
                let delayed = echo.pop().unwrap_or(0.0) * ECHO_DECAY;
                current = (current + delayed) / 2.0;
            }

            output.push(current as f32);
            echo.push(current);
            ring[cursor] = current;
            last = current;

            cursor += 1;
            if cursor >= period {
                cursor = 0;
            }
        }

        output
    }

    fn name(&self) -> &str {
        "guitar"
    }
}

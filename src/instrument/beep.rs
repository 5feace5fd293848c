//! Pure tone — direct sinusoid evaluation.

use std::f64::consts::PI;

use crate::signal::time_axis;

use super::{Instrument, NoteSpec};

/// A plain sine wave at the requested frequency.
#[derive(Debug, Clone, Copy, Default)]
pub struct Beep;

impl Beep {
    pub fn new() -> Self {
        Self
    }
}

impl Instrument for Beep {
    fn render(&self, spec: &NoteSpec) -> Vec<f32> {
        let omega = 2.0 * PI * spec.frequency();
        time_axis(spec.duration(), spec.sample_rate())
            .into_iter()
            .map(|t| (omega * t).sin() as f32)
            .collect()
    }

    fn name(&self) -> &str {
        "beep"
    }
}

//! ADSR envelope generator — piecewise-linear gain curve over sample counts.

use crate::signal::linspace;

/// Attack-Decay-Sustain-Release envelope.
///
/// Attack, decay, and release are durations in seconds; `peak` is the gain
/// reached at the end of the attack and `sustain` the fraction of `peak`
/// held through the sustain plateau.
#[derive(Debug, Clone, Copy)]
pub struct AdsrEnvelope {
    pub attack: f64,
    pub decay: f64,
    pub release: f64,
    pub peak: f64,
    pub sustain: f64,
}

impl AdsrEnvelope {
    /// Build the full-length gain curve for a note of `duration` samples.
    ///
    /// Segment lengths in samples are truncated from the second durations.
    /// The sustain plateau absorbs whatever remains of `duration` after
    /// attack, decay, and release; if the note is too short to fit those
    /// three segments, no envelope applies and `None` is returned.
    pub fn build(&self, duration: usize, sample_rate: u32) -> Option<Vec<f64>> {
        let attack = (self.attack * sample_rate as f64) as usize;
        let decay = (self.decay * sample_rate as f64) as usize;
        let release = (self.release * sample_rate as f64) as usize;

        let sustain_len = duration.checked_sub(attack + decay + release)?;
        let sustain_gain = self.peak * self.sustain;

        let mut gain = Vec::with_capacity(duration);
        gain.extend(linspace(0.0, self.peak, attack));
        gain.extend(linspace(self.peak, sustain_gain, decay));
        gain.extend(std::iter::repeat(sustain_gain).take(sustain_len));
        gain.extend(linspace(sustain_gain, 0.0, release));
        Some(gain)
    }
}

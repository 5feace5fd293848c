//! Instruments — single-note generators sharing one render contract.

pub mod beep;
pub mod delay;
pub mod envelope;
pub mod guitar;
pub mod trumpet;

pub use beep::Beep;
pub use delay::DelayLine;
pub use envelope::AdsrEnvelope;
pub use guitar::AcousticGuitar;
pub use trumpet::Trumpet;

use std::str::FromStr;

/// Errors from building an invalid note request.
#[derive(Debug, Clone, PartialEq)]
pub enum NoteError {
    /// Frequency must be finite and strictly positive.
    InvalidFrequency(f64),
    /// Sample rate must be nonzero.
    ZeroSampleRate,
}

impl std::fmt::Display for NoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoteError::InvalidFrequency(hz) => write!(f, "invalid note frequency: {hz} Hz"),
            NoteError::ZeroSampleRate => write!(f, "sample rate must be nonzero"),
        }
    }
}

impl std::error::Error for NoteError {}

/// A validated request for one note: pitch, length, and output rate.
///
/// Construction rejects non-positive frequencies and a zero sample rate,
/// so every generator is total over a `NoteSpec`. The request is consumed
/// by a single render call; no state survives it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteSpec {
    frequency: f64,
    duration: usize,
    sample_rate: u32,
}

impl NoteSpec {
    /// Create a note request. `duration` is in samples.
    pub fn new(frequency: f64, duration: usize, sample_rate: u32) -> Result<Self, NoteError> {
        if !frequency.is_finite() || frequency <= 0.0 {
            return Err(NoteError::InvalidFrequency(frequency));
        }
        if sample_rate == 0 {
            return Err(NoteError::ZeroSampleRate);
        }
        Ok(Self {
            frequency,
            duration,
            sample_rate,
        })
    }

    /// Create a note request from a duration in seconds.
    pub fn from_seconds(frequency: f64, seconds: f64, sample_rate: u32) -> Result<Self, NoteError> {
        let duration = (seconds.max(0.0) * sample_rate as f64) as usize;
        Self::new(frequency, duration, sample_rate)
    }

    /// Pitch in Hz.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Length of the note in samples.
    pub fn duration(&self) -> usize {
        self.duration
    }

    /// Output sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
}

/// Common interface for all instruments.
///
/// Each instrument renders a validated note request into a mono sample
/// buffer of exactly `spec.duration()` samples.
pub trait Instrument {
    /// Render a single note as mono samples.
    fn render(&self, spec: &NoteSpec) -> Vec<f32>;

    /// Human-readable name for this instrument.
    fn name(&self) -> &str;
}

/// The closed set of available instruments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstrumentKind {
    Beep,
    AcousticGuitar,
    Trumpet,
}

impl InstrumentKind {
    /// All variants, in display order.
    pub const ALL: [InstrumentKind; 3] = [
        InstrumentKind::Beep,
        InstrumentKind::AcousticGuitar,
        InstrumentKind::Trumpet,
    ];

    /// Construct the instrument. `seed` drives noise-based generators and
    /// is ignored by the deterministic ones.
    pub fn build(self, seed: u64) -> Box<dyn Instrument> {
        match self {
            InstrumentKind::Beep => Box::new(Beep::new()),
            InstrumentKind::AcousticGuitar => Box::new(AcousticGuitar::new(seed)),
            InstrumentKind::Trumpet => Box::new(Trumpet::new()),
        }
    }
}

impl FromStr for InstrumentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "beep" => Ok(InstrumentKind::Beep),
            "guitar" => Ok(InstrumentKind::AcousticGuitar),
            "trumpet" => Ok(InstrumentKind::Trumpet),
            _ => Err(format!(
                "unknown instrument '{s}' (expected beep, guitar, or trumpet)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_accepts_valid_input() {
        let spec = NoteSpec::new(440.0, 44100, 44100).unwrap();
        assert_eq!(spec.frequency(), 440.0);
        assert_eq!(spec.duration(), 44100);
        assert_eq!(spec.sample_rate(), 44100);
    }

    #[test]
    fn spec_accepts_zero_duration() {
        assert!(NoteSpec::new(440.0, 0, 44100).is_ok());
    }

    #[test]
    fn spec_rejects_zero_frequency() {
        assert_eq!(
            NoteSpec::new(0.0, 100, 44100),
            Err(NoteError::InvalidFrequency(0.0))
        );
    }

    #[test]
    fn spec_rejects_negative_and_nan_frequency() {
        assert!(NoteSpec::new(-440.0, 100, 44100).is_err());
        assert!(NoteSpec::new(f64::NAN, 100, 44100).is_err());
        assert!(NoteSpec::new(f64::INFINITY, 100, 44100).is_err());
    }

    #[test]
    fn spec_rejects_zero_sample_rate() {
        assert_eq!(
            NoteSpec::new(440.0, 100, 0),
            Err(NoteError::ZeroSampleRate)
        );
    }

    #[test]
    fn from_seconds_converts() {
        let spec = NoteSpec::from_seconds(440.0, 2.0, 44100).unwrap();
        assert_eq!(spec.duration(), 88200);
    }

    #[test]
    fn from_seconds_clamps_negative_to_empty() {
        let spec = NoteSpec::from_seconds(440.0, -1.0, 44100).unwrap();
        assert_eq!(spec.duration(), 0);
    }

    #[test]
    fn kind_parses_from_str() {
        assert_eq!("beep".parse(), Ok(InstrumentKind::Beep));
        assert_eq!("GUITAR".parse(), Ok(InstrumentKind::AcousticGuitar));
        assert_eq!("Trumpet".parse(), Ok(InstrumentKind::Trumpet));
        assert!("theremin".parse::<InstrumentKind>().is_err());
    }

    #[test]
    fn kind_builds_named_instruments() {
        assert_eq!(InstrumentKind::Beep.build(0).name(), "beep");
        assert_eq!(InstrumentKind::AcousticGuitar.build(0).name(), "guitar");
        assert_eq!(InstrumentKind::Trumpet.build(0).name(), "trumpet");
    }

    #[test]
    fn error_display() {
        assert_eq!(
            NoteError::InvalidFrequency(0.0).to_string(),
            "invalid note frequency: 0 Hz"
        );
        assert_eq!(
            NoteError::ZeroSampleRate.to_string(),
            "sample rate must be nonzero"
        );
    }
}

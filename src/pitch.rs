//! Pitch helpers — note names, MIDI numbers, and equal-tempered frequencies.

/// Convert a MIDI note number to frequency in Hz.
///
/// Equal temperament with A4 (MIDI 69) = 440 Hz.
pub fn midi_to_freq(note: u8) -> f64 {
    440.0 * 2.0f64.powf((note as f64 - 69.0) / 12.0)
}

/// Parse a note name like `A4`, `C#3`, or `Eb2` into a MIDI note number.
///
/// Format: letter (C–B), optional `#` or `b` accidental, octave (-1 to 9).
/// C4 is middle C (MIDI 60). Returns `None` for anything outside 0–127.
pub fn parse_note_name(name: &str) -> Option<u8> {
    let bytes = name.as_bytes();
    let base: i32 = match bytes.first()? {
        b'C' => 0,
        b'D' => 2,
        b'E' => 4,
        b'F' => 5,
        b'G' => 7,
        b'A' => 9,
        b'B' => 11,
        _ => return None,
    };

    let (accidental, rest) = match bytes.get(1) {
        Some(b'#') => (1, &name[2..]),
        Some(b'b') => (-1, &name[2..]),
        _ => (0, &name[1..]),
    };

    let octave: i32 = rest.parse().ok()?;
    let midi = (octave + 1) * 12 + base + accidental;
    u8::try_from(midi).ok().filter(|&n| n <= 127)
}

/// Resolve a note name directly to its frequency in Hz.
pub fn note_to_freq(name: &str) -> Option<f64> {
    parse_note_name(name).map(midi_to_freq)
}

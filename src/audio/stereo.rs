//! Stereo packaging — duplicates a mono signal across two equal channels.

/// One output frame: (left, right).
pub type StereoFrame = (f32, f32);

/// Duplicate a mono signal into stereo frames.
///
/// Each channel carries half the mono amplitude, so the summed output
/// power matches the source.
pub fn duplicate(mono: &[f32]) -> Vec<StereoFrame> {
    mono.iter().map(|&s| (s / 2.0, s / 2.0)).collect()
}

/// Flatten stereo frames into the interleaved L,R,L,R buffer the output
/// device consumes.
pub fn interleave(frames: &[StereoFrame]) -> Vec<f32> {
    let mut out = Vec::with_capacity(frames.len() * 2);
    for &(left, right) in frames {
        out.push(left);
        out.push(right);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_preserved() {
        let mono = vec![0.0; 512];
        assert_eq!(duplicate(&mono).len(), 512);
    }

    #[test]
    fn channels_equal_at_half_amplitude() {
        let mono = vec![1.0, -0.5, 0.25, 0.0];
        let frames = duplicate(&mono);
        for (frame, &s) in frames.iter().zip(mono.iter()) {
            assert_eq!(frame.0, s / 2.0);
            assert_eq!(frame.1, s / 2.0);
            assert_eq!(frame.0, frame.1);
        }
    }

    #[test]
    fn empty_signal() {
        assert!(duplicate(&[]).is_empty());
        assert!(interleave(&[]).is_empty());
    }

    #[test]
    fn interleave_alternates_channels() {
        let frames = vec![(0.1, 0.2), (0.3, 0.4)];
        assert_eq!(interleave(&frames), vec![0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn duplicate_then_interleave_round_trip() {
        let mono = vec![0.8, -0.8, 0.4];
        let out = interleave(&duplicate(&mono));
        assert_eq!(out.len(), 6);
        for (i, &s) in mono.iter().enumerate() {
            assert_eq!(out[2 * i], s / 2.0);
            assert_eq!(out[2 * i + 1], s / 2.0);
        }
    }
}

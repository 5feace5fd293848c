//! Signal primitives — per-sample time grid and linear ramps.

/// Time axis for a note of `duration` samples: `t[i] = i / sample_rate`.
///
/// The grid is half-open, spanning `[0, duration / sample_rate)` seconds,
/// so sample `i` of a sinusoid lands exactly on `sin(2π · f · i / sr)`.
pub fn time_axis(duration: usize, sample_rate: u32) -> Vec<f64> {
    let dt = 1.0 / sample_rate as f64;
    (0..duration).map(|i| i as f64 * dt).collect()
}

/// Linear ramp of `len` points from `start` to `end`, endpoint inclusive.
///
/// `len == 0` yields an empty ramp; `len == 1` yields `[start]`.
pub fn linspace(start: f64, end: f64, len: usize) -> Vec<f64> {
    match len {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (len - 1) as f64;
            (0..len).map(|i| start + step * i as f64).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn time_axis_length() {
        assert_eq!(time_axis(0, 44100).len(), 0);
        assert_eq!(time_axis(1, 44100).len(), 1);
        assert_eq!(time_axis(4410, 44100).len(), 4410);
    }

    #[test]
    fn time_axis_starts_at_zero() {
        let t = time_axis(10, 44100);
        assert_eq!(t[0], 0.0);
    }

    #[test]
    fn time_axis_sample_period_spacing() {
        let t = time_axis(100, 44100);
        for i in 1..t.len() {
            assert_approx_eq!(t[i] - t[i - 1], 1.0 / 44100.0, 1e-12);
        }
    }

    #[test]
    fn time_axis_excludes_endpoint() {
        // 100 samples at 100 Hz spans [0, 1): the last point is 0.99, not 1.0.
        let t = time_axis(100, 100);
        assert_approx_eq!(t[99], 0.99, 1e-12);
    }

    #[test]
    fn linspace_endpoints() {
        let ramp = linspace(0.0, 1.0, 5);
        assert_eq!(ramp.len(), 5);
        assert_approx_eq!(ramp[0], 0.0, 1e-12);
        assert_approx_eq!(ramp[4], 1.0, 1e-12);
        assert_approx_eq!(ramp[2], 0.5, 1e-12);
    }

    #[test]
    fn linspace_descending() {
        let ramp = linspace(1.0, 0.0, 3);
        assert_approx_eq!(ramp[0], 1.0, 1e-12);
        assert_approx_eq!(ramp[1], 0.5, 1e-12);
        assert_approx_eq!(ramp[2], 0.0, 1e-12);
    }

    #[test]
    fn linspace_empty() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn linspace_single_point_is_start() {
        let ramp = linspace(0.3, 0.9, 1);
        assert_eq!(ramp, vec![0.3]);
    }
}

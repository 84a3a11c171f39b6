//! Smoothing kernels for per-row channels.

use crate::geo::normalize_degrees;

/// Smooths angles by averaging unit phasors with a uniform kernel.
///
/// Each angle becomes `e^{iθ}`; the phasors are convolved with a kernel of
/// `window` equal weights, keeping the centred `angles.len()` samples of the
/// full convolution. Samples outside the series count as zero, so the
/// boundaries taper instead of shrinking the window. The result is the
/// argument of each sum, in `[0, 360)`.
///
/// A `window` of 0 is treated as 1.
pub fn circular_smooth(angles: &[f64], window: usize) -> Vec<f64> {
    let window = window.max(1);
    let n = angles.len();
    if n == 0 {
        return Vec::new();
    }

    let phasors: Vec<(f64, f64)> = angles
        .iter()
        .map(|deg| {
            let rad = deg.to_radians();
            (rad.cos(), rad.sin())
        })
        .collect();

    // Offset of the centred slice within the full convolution
    let offset = (window - 1) / 2;

    (0..n)
        .map(|k| {
            let j = k + offset;
            let first = j.saturating_sub(window - 1);
            let last = j.min(n - 1);
            let (re, im) = phasors[first..=last]
                .iter()
                .fold((0.0, 0.0), |(re, im), (c, s)| (re + c, im + s));
            normalize_degrees(im.atan2(re).to_degrees())
        })
        .collect()
}

/// Centred moving average whose window shrinks at the boundaries.
///
/// Row `i` averages `values[i - window/2 ..= i + window/2]`, clipped to the
/// series. A `window` of 0 is treated as 1.
pub fn centered_moving_average(values: &[f64], window: usize) -> Vec<f64> {
    let half = window.max(1) / 2;
    let n = values.len();

    (0..n)
        .map(|i| {
            let start = i.saturating_sub(half);
            let end = (i + half + 1).min(n);
            let slice = &values[start..end];
            slice.iter().sum::<f64>() / slice.len() as f64
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "expected {:?}, got {:?}", expected, actual);
        }
    }

    #[test]
    fn test_window_one_is_identity() {
        let angles = [0.0, 45.0, 90.0, 270.0];
        assert_close(&circular_smooth(&angles, 1), &angles);
    }

    #[test]
    fn test_averages_across_north() {
        // 350° and 10° average to north, not south
        let smoothed = circular_smooth(&[350.0, 10.0, 350.0, 10.0, 350.0], 3);
        for value in &smoothed {
            let distance = value.min(360.0 - value);
            assert!(distance < 10.0, "{} is not near north", value);
        }
    }

    #[test]
    fn test_constant_heading_is_preserved_at_edges() {
        // Zero padding only shortens the phasor sum; the angle is unchanged
        let smoothed = circular_smooth(&[90.0; 6], 5);
        assert_close(&smoothed, &[90.0; 6]);
    }

    #[test]
    fn test_even_window_uses_leading_slice() {
        // Window 2: sample k averages k-1 and k
        let smoothed = circular_smooth(&[0.0, 90.0, 90.0], 2);
        assert_close(&smoothed, &[0.0, 45.0, 90.0]);
    }

    #[test]
    fn test_window_larger_than_series_keeps_length() {
        let smoothed = circular_smooth(&[10.0, 20.0], 7);
        assert_eq!(smoothed.len(), 2);
    }

    #[test]
    fn test_empty_series() {
        assert!(circular_smooth(&[], 5).is_empty());
        assert!(centered_moving_average(&[], 5).is_empty());
    }

    #[test]
    fn test_moving_average_shrinks_at_edges() {
        let smoothed = centered_moving_average(&[0.0, 3.0, 6.0, 9.0], 3);
        assert_close(&smoothed, &[1.5, 3.0, 6.0, 7.5]);
    }

    #[test]
    fn test_moving_average_window_zero() {
        let values = [1.0, 2.0, 3.0];
        assert_close(&centered_moving_average(&values, 0), &values);
    }
}

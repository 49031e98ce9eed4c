//! Seek and skip target calculation.
//!
//! Pure functions so the clamping rules can be tested without a media surface.

/// Usable duration, or `None` before metadata has loaded.
///
/// Treats NaN, infinite and non-positive values as unknown.
pub fn known_duration(duration: Option<f64>) -> Option<f64> {
    duration.filter(|d| d.is_finite() && *d > 0.0)
}

/// Time for a seek to `fraction` of the media.
///
/// `fraction` is clamped into `[0, 1]`; returns `None` when the duration
/// is unknown.
pub fn seek_target(fraction: f64, duration: Option<f64>) -> Option<f64> {
    let duration = known_duration(duration)?;
    let fraction = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };
    Some(fraction * duration)
}

/// Time after skipping `delta` seconds from `current`, clamped to `[0, duration]`.
pub fn skip_target(current: f64, delta: f64, duration: Option<f64>) -> Option<f64> {
    let duration = known_duration(duration)?;
    let current = if current.is_finite() { current } else { 0.0 };
    Some((current + delta).clamp(0.0, duration))
}

/// Progress through the media as a fraction in `[0, 1]`.
pub fn progress_fraction(current: f64, duration: Option<f64>) -> Option<f64> {
    let duration = known_duration(duration)?;
    if !current.is_finite() {
        return Some(0.0);
    }
    Some((current / duration).clamp(0.0, 1.0))
}

/// Pointer position as a fraction of a bar spanning `[left, left + width)`.
///
/// Positions outside the bar clamp to its ends, which keeps a drag that
/// wanders past the bar pinned to the start or end.
pub fn fraction_in_bar(x: f64, left: f64, width: f64) -> Option<f64> {
    if width <= 0.0 || !width.is_finite() {
        return None;
    }
    Some(((x - left) / width).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seek_scales_fraction_by_duration() {
        assert_eq!(seek_target(0.25, Some(200.0)), Some(50.0));
        assert_eq!(seek_target(1.0, Some(200.0)), Some(200.0));
    }

    #[test]
    fn seek_clamps_fraction() {
        assert_eq!(seek_target(-0.5, Some(100.0)), Some(0.0));
        assert_eq!(seek_target(1.5, Some(100.0)), Some(100.0));
        assert_eq!(seek_target(f64::NAN, Some(100.0)), Some(0.0));
    }

    #[test]
    fn seek_without_duration_is_none() {
        assert_eq!(seek_target(0.5, None), None);
        assert_eq!(seek_target(0.5, Some(f64::NAN)), None);
        assert_eq!(seek_target(0.5, Some(f64::INFINITY)), None);
        assert_eq!(seek_target(0.5, Some(0.0)), None);
    }

    #[test]
    fn skip_back_clamps_at_zero() {
        assert_eq!(skip_target(5.0, -10.0, Some(100.0)), Some(0.0));
    }

    #[test]
    fn skip_forward_clamps_at_duration() {
        assert_eq!(skip_target(95.0, 10.0, Some(100.0)), Some(100.0));
    }

    #[test]
    fn skip_within_range() {
        assert_eq!(skip_target(30.0, 10.0, Some(100.0)), Some(40.0));
        assert_eq!(skip_target(30.0, -10.0, Some(100.0)), Some(20.0));
    }

    #[test]
    fn skip_without_duration_is_none() {
        assert_eq!(skip_target(30.0, 10.0, None), None);
    }

    #[test]
    fn progress_fraction_is_clamped() {
        assert_eq!(progress_fraction(50.0, Some(100.0)), Some(0.5));
        assert_eq!(progress_fraction(150.0, Some(100.0)), Some(1.0));
        assert_eq!(progress_fraction(f64::NAN, Some(100.0)), Some(0.0));
        assert_eq!(progress_fraction(50.0, None), None);
    }

    #[test]
    fn fraction_in_bar_uses_bounding_box() {
        assert_eq!(fraction_in_bar(10.0, 10.0, 100.0), Some(0.0));
        assert_eq!(fraction_in_bar(60.0, 10.0, 100.0), Some(0.5));
        assert_eq!(fraction_in_bar(200.0, 10.0, 100.0), Some(1.0));
        assert_eq!(fraction_in_bar(0.0, 10.0, 100.0), Some(0.0));
        assert_eq!(fraction_in_bar(5.0, 0.0, 0.0), None);
    }
}

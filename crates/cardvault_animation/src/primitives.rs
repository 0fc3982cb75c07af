//! Scalar interpolation helpers

/// Linear interpolation from `current` toward `target`
///
/// `t` is not clamped. Callers pass `rate * dt`, which exceeds 1.0 on long
/// frames and then overshoots the target.
#[inline]
pub fn lerp(current: f32, target: f32, t: f32) -> f32 {
    current + (target - current) * t
}

/// Restrict `value` to `[min, max]`
///
/// Unlike [`f32::clamp`] this never panics. When `min > max` the result is
/// `max`; callers should not rely on that.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(2.0, 10.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 10.0, 1.0), 10.0);
        assert!((lerp(0.0, 1.0, 0.25) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_lerp_overshoots_past_one() {
        assert!((lerp(0.0, 1.0, 1.5) - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-5.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
        assert_eq!(clamp(10.0, 10.0, 10.0), 10.0);
    }

    #[test]
    fn test_clamp_inverted_bounds_does_not_panic() {
        assert_eq!(clamp(0.0, 5.0, 1.0), 1.0);
    }
}

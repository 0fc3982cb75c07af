//! Current/target pairs

use crate::values::Interpolate;

/// A value that chases a target by exponential smoothing
///
/// Each [`step`](Smoothed::step) moves `current` by `rate * dt` of the
/// remaining distance. The factor is deliberately left unclamped: with
/// `rate * dt <= 1` the value approaches the target monotonically, beyond
/// that it overshoots.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Smoothed<T: Interpolate> {
    current: T,
    target: T,
}

impl<T: Interpolate> Smoothed<T> {
    /// Start at rest on `value`
    pub fn new(value: T) -> Self {
        Self {
            current: value,
            target: value,
        }
    }

    /// Start at `current`, heading for `target`
    pub fn from_to(current: T, target: T) -> Self {
        Self { current, target }
    }

    pub fn current(&self) -> T {
        self.current
    }

    pub fn target(&self) -> T {
        self.target
    }

    pub fn set_target(&mut self, target: T) {
        self.target = target;
    }

    /// Jump to `value` with no animation
    pub fn snap(&mut self, value: T) {
        self.current = value;
        self.target = value;
    }

    /// Advance one frame
    pub fn step(&mut self, rate: f32, dt: f32) -> T {
        self.current = self.current.lerp(&self.target, rate * dt);
        self.current
    }

    /// Whether current is within `epsilon` of target
    pub fn is_settled(&self, epsilon: f32) -> bool {
        self.current.distance(&self.target) < epsilon
    }
}

impl<T: Interpolate + Default> Default for Smoothed<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardvault_core::Vec3;

    #[test]
    fn test_step_converges_without_overshoot() {
        for &(start, target) in &[(0.0_f32, 1.0_f32), (5.0, -3.0), (-2.0, -2.0)] {
            for &(rate, dt) in &[(8.0, 1.0 / 60.0), (5.0, 0.2), (1.0, 1.0), (60.0, 1.0 / 60.0)] {
                let mut value = Smoothed::from_to(start, target);
                let mut last = value.current().distance(&target);
                for _ in 0..200 {
                    value.step(rate, dt);
                    let d = value.current().distance(&target);
                    assert!(d <= last + 1e-6, "moved away from target");
                    last = d;
                }
            }
        }
    }

    #[test]
    fn test_zero_dt_holds_still() {
        let mut value = Smoothed::from_to(1.0_f32, 4.0);
        value.step(8.0, 0.0);
        assert_eq!(value.current(), 1.0);
    }

    #[test]
    fn test_large_frame_overshoots() {
        let mut value = Smoothed::from_to(0.0_f32, 1.0);
        value.step(8.0, 0.5);
        assert!(value.current() > 1.0);
    }

    #[test]
    fn test_vec3_settles() {
        let mut value = Smoothed::from_to(Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0));
        for _ in 0..600 {
            value.step(6.0, 1.0 / 60.0);
        }
        assert!(value.is_settled(1e-3));
    }
}

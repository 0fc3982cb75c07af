//! Animatable value types

use cardvault_core::Vec3;

/// Trait for values that can be linearly interpolated
pub trait Interpolate: Copy {
    /// Interpolate between self and other by factor t (unclamped)
    fn lerp(&self, other: &Self, t: f32) -> Self;

    /// Distance to another value, used for settling and monotonicity checks
    fn distance(&self, other: &Self) -> f32;
}

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        crate::primitives::lerp(*self, *other, t)
    }

    fn distance(&self, other: &Self) -> f32 {
        (self - other).abs()
    }
}

impl Interpolate for Vec3 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Vec3::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
            self.z + (other.z - self.z) * t,
        )
    }

    fn distance(&self, other: &Self) -> f32 {
        Vec3::distance(self, *other)
    }
}

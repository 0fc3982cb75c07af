//! Cardvault Animation Primitives
//!
//! Every animated quantity in the viewer is a pair of *current* and *target*
//! values, moved once per frame by exponential smoothing.
//!
//! - [`lerp`] / [`clamp`]: scalar helpers
//! - [`Interpolate`]: linear interpolation for `f32` and [`Vec3`](cardvault_core::Vec3)
//! - [`Smoothed`]: a current/target pair stepped with `rate * dt`

pub mod primitives;
pub mod smoothed;
pub mod values;

pub use primitives::{clamp, lerp};
pub use smoothed::Smoothed;
pub use values::Interpolate;

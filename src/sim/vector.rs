//! 2-D vector math in degrees
//!
//! `Vector2` is glam's `DVec2`. Arithmetic (`+`, `-`, scalar and
//! component-wise `*`), `length`, `length_squared`, `dot`, `distance`,
//! `perp`, `perp_dot` and `lerp` come from glam directly. This module adds the
//! degree-based rotation and the zero-safe helpers the simulation relies on.

use glam::DVec2;

pub type Vector2 = DVec2;

/// Degree-based rotation and zero-safe normalization for [`Vector2`]
pub trait VectorExt: Sized {
    /// Rotate counter-clockwise by `degrees`, returning a new vector
    fn rotated(self, degrees: f64) -> Self;

    /// Rotate in place by `degrees`
    fn rotate_in_place(&mut self, degrees: f64);

    /// Unit vector in the same direction; the zero vector stays zero
    fn normalized(self) -> Self;

    /// Heading in degrees (0 for the zero vector)
    fn angle_degrees(self) -> f64;

    /// Signed angle from `self` to `other` in degrees
    fn angle_between_degrees(self, other: Self) -> f64;
}

impl VectorExt for DVec2 {
    #[inline]
    fn rotated(self, degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        DVec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    #[inline]
    fn rotate_in_place(&mut self, degrees: f64) {
        *self = self.rotated(degrees);
    }

    #[inline]
    fn normalized(self) -> Self {
        self.normalize_or_zero()
    }

    fn angle_degrees(self) -> f64 {
        if self.length_squared() == 0.0 {
            return 0.0;
        }
        self.y.atan2(self.x).to_degrees()
    }

    fn angle_between_degrees(self, other: Self) -> f64 {
        self.perp_dot(other).atan2(self.dot(other)).to_degrees()
    }
}

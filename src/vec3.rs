use std::ops;

/// Three component `f32` vector.
///
/// Passed by value everywhere. Laid out as three consecutive floats (12 bytes).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
    /// Z component.
    pub z: f32,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a vector from its components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vec3 { x, y, z }
    }

    /// Component-wise sum.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Component-wise product with a scalar.
    #[inline]
    pub fn scale(self, factor: f32) -> Vec3 {
        Vec3::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Squared magnitude, summed as `x*x + y*y + z*z`.
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }
}

impl ops::Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, other: Vec3) -> Vec3 {
        Vec3::add(self, other)
    }
}

impl ops::Mul<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, factor: f32) -> Vec3 {
        self.scale(factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_scale() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(0.5, -2.0, 4.0);
        assert_eq!(a.add(b), Vec3::new(1.5, 0.0, 7.0));
        assert_eq!(a.scale(2.0), Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(a.scale(0.0), Vec3::ZERO);
        // operators agree with the named methods
        assert_eq!(a + b, a.add(b));
        assert_eq!(b * 0.25, b.scale(0.25));
    }

    #[test]
    fn length_squared() {
        assert_eq!(Vec3::new(1.0, 2.0, 2.0).length_squared(), 9.0);
        assert_eq!(Vec3::default().length_squared(), 0.0);
    }
}

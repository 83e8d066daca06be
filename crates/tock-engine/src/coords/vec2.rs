use core::ops::Sub;

/// 2D vector in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Unit vector in the same direction, or `None` for a zero/non-finite vector.
    #[inline]
    pub fn normalized(self) -> Option<Vec2> {
        let len = self.length();
        if len > f32::EPSILON && len.is_finite() {
            Some(Vec2::new(self.x / len, self.y / len))
        } else {
            None
        }
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_of_3_4_is_5() {
        assert_eq!(Vec2::new(3.0, 4.0).length(), 5.0);
    }

    #[test]
    fn normalized_has_unit_length() {
        let n = Vec2::new(0.0, -7.0).normalized().unwrap();
        assert_eq!(n, Vec2::new(0.0, -1.0));
    }

    #[test]
    fn normalized_zero_is_none() {
        assert!(Vec2::default().normalized().is_none());
        assert!(Vec2::new(f32::NAN, 1.0).normalized().is_none());
    }

    #[test]
    fn sub_gives_direction() {
        let a = Vec2::new(0.0, 10.0);
        let b = Vec2::new(4.0, 0.0);
        assert_eq!(a - b, Vec2::new(-4.0, 10.0));
        assert!(!Vec2::new(f32::INFINITY, 0.0).is_finite());
    }
}

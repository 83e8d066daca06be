use core::ops::{Add, Sub};

/// Canvas position in logical pixels (origin top-left, +Y down).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `distance` from `self` along a dial angle.
    ///
    /// `degrees` is measured clockwise from 12 o'clock. The screen angle is
    /// `degrees - 90°`; with +Y pointing down, `sin` of that angle moves the
    /// point up for 0° and down for 180°.
    #[inline]
    pub fn on_ray(self, degrees: f64, distance: f64) -> Point {
        let theta = (degrees - 90.0).to_radians();
        Point::new(self.x + distance * theta.cos(), self.y + distance * theta.sin())
    }

    #[inline]
    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Center and radius of one dial. Fixed for the lifetime of a clock.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DialGeometry {
    center: Point,
    radius: f64,
}

impl DialGeometry {
    /// Returns `None` unless the center is finite and the radius is finite and > 0.
    pub fn new(center: Point, radius: f64) -> Option<Self> {
        if !center.is_finite() || !radius.is_finite() || radius <= 0.0 {
            return None;
        }
        Some(Self { center, radius })
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        a.distance_to(b) < 1e-9
    }

    // ── on_ray ────────────────────────────────────────────────────────────

    #[test]
    fn zero_degrees_points_up() {
        let p = Point::new(200.0, 200.0).on_ray(0.0, 100.0);
        assert!(close(p, Point::new(200.0, 100.0)), "{p:?}");
    }

    #[test]
    fn ninety_degrees_points_right() {
        let p = Point::new(200.0, 200.0).on_ray(90.0, 100.0);
        assert!(close(p, Point::new(300.0, 200.0)), "{p:?}");
    }

    #[test]
    fn one_eighty_degrees_points_down() {
        let p = Point::new(200.0, 200.0).on_ray(180.0, 100.0);
        assert!(close(p, Point::new(200.0, 300.0)), "{p:?}");
    }

    #[test]
    fn two_seventy_degrees_points_left() {
        let p = Point::new(0.0, 0.0).on_ray(270.0, 10.0);
        assert!(close(p, Point::new(-10.0, 0.0)), "{p:?}");
    }

    #[test]
    fn zero_distance_is_center() {
        let c = Point::new(5.0, 7.0);
        assert!(close(c.on_ray(123.0, 0.0), c));
    }

    // ── DialGeometry ──────────────────────────────────────────────────────

    #[test]
    fn geometry_accepts_positive_radius() {
        let g = DialGeometry::new(Point::new(200.0, 200.0), 150.0).unwrap();
        assert_eq!(g.center(), Point::new(200.0, 200.0));
        assert_eq!(g.radius(), 150.0);
    }

    #[test]
    fn geometry_rejects_bad_radius() {
        let c = Point::new(0.0, 0.0);
        assert!(DialGeometry::new(c, 0.0).is_none());
        assert!(DialGeometry::new(c, -1.0).is_none());
        assert!(DialGeometry::new(c, f64::NAN).is_none());
        assert!(DialGeometry::new(c, f64::INFINITY).is_none());
    }

    #[test]
    fn geometry_rejects_non_finite_center() {
        assert!(DialGeometry::new(Point::new(f64::NAN, 0.0), 10.0).is_none());
    }
}

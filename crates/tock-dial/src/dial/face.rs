use super::{Circle, DialGeometry, DialStyle, Ink, Label, Primitive, Segment};

/// Number of hour markers on the dial.
pub const TICK_COUNT: usize = 12;

const DEGREES_PER_TICK: f64 = 360.0 / TICK_COUNT as f64;

/// Static dial layout: rim, 12 ticks, 12 numerals.
///
/// Index `i` of `ticks` and `numerals` sits at `i * 30°` clockwise from 12.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceLayout {
    pub outline: Circle,
    pub ticks: [Segment; TICK_COUNT],
    pub numerals: [Label; TICK_COUNT],
}

impl FaceLayout {
    /// Primitives in draw order: rim, ticks, then numerals when enabled.
    pub fn primitives(&self, show_numerals: bool) -> Vec<Primitive> {
        let mut out = Vec::with_capacity(1 + 2 * TICK_COUNT);
        out.push(Primitive::Circle(self.outline.clone()));
        out.extend(self.ticks.iter().cloned().map(Primitive::Segment));
        if show_numerals {
            out.extend(self.numerals.iter().cloned().map(Primitive::Label));
        }
        out
    }
}

/// Numeral shown at tick `index`: 12 at the top, then 1..11 clockwise.
#[inline]
pub fn numeral_for(index: usize) -> u32 {
    ((index + 11) % TICK_COUNT) as u32 + 1
}

/// Computes the static face once per dial.
pub fn face_primitives(geom: &DialGeometry, style: &DialStyle) -> FaceLayout {
    let center = geom.center();
    let r = geom.radius();
    let at = |offset: f64| (r - offset).max(0.0);

    let outline = Circle {
        center,
        radius: r,
        stroke_width: style.outline_width,
        ink: Ink::Face,
    };

    let ticks = std::array::from_fn(|i| {
        let angle = i as f64 * DEGREES_PER_TICK;
        Segment {
            from: center.on_ray(angle, at(style.tick_start_offset)),
            to: center.on_ray(angle, at(style.tick_end_offset)),
            thickness: style.tick_width,
            ink: Ink::Tick,
        }
    });

    let numerals = std::array::from_fn(|i| {
        let angle = i as f64 * DEGREES_PER_TICK;
        Label {
            text: numeral_for(i).to_string(),
            anchor: center.on_ray(angle, at(style.numeral_offset)),
            size: style.numeral_size,
            ink: Ink::Numeral,
        }
    });

    FaceLayout { outline, ticks, numerals }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dial::Point;

    fn layout() -> FaceLayout {
        let geom = DialGeometry::new(Point::new(200.0, 200.0), 150.0).unwrap();
        face_primitives(&geom, &DialStyle::default())
    }

    fn close(a: Point, b: Point) -> bool {
        a.distance_to(b) < 1e-9
    }

    // ── numerals ──────────────────────────────────────────────────────────

    #[test]
    fn numeral_mapping() {
        assert_eq!(numeral_for(0), 12);
        assert_eq!(numeral_for(1), 1);
        assert_eq!(numeral_for(3), 3);
        assert_eq!(numeral_for(11), 11);
    }

    #[test]
    fn numeral_labels_follow_mapping() {
        let face = layout();
        let texts: Vec<&str> = face.numerals.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, ["12", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11"]);
    }

    #[test]
    fn twelve_sits_above_center() {
        let face = layout();
        assert!(close(face.numerals[0].anchor, Point::new(200.0, 90.0)));
        assert!(close(face.numerals[3].anchor, Point::new(310.0, 200.0)));
    }

    // ── ticks ─────────────────────────────────────────────────────────────

    #[test]
    fn tick_zero_points_straight_up() {
        let face = layout();
        let t = &face.ticks[0];
        assert!(close(t.from, Point::new(200.0, 70.0)), "{:?}", t.from);
        assert!(close(t.to, Point::new(200.0, 60.0)), "{:?}", t.to);
    }

    #[test]
    fn tick_six_points_straight_down() {
        let face = layout();
        let t = &face.ticks[6];
        assert!(close(t.from, Point::new(200.0, 330.0)), "{:?}", t.from);
        assert!(close(t.to, Point::new(200.0, 340.0)), "{:?}", t.to);
    }

    #[test]
    fn ticks_lie_between_offsets() {
        let face = layout();
        let c = Point::new(200.0, 200.0);
        for t in &face.ticks {
            assert!((c.distance_to(t.from) - 130.0).abs() < 1e-9);
            assert!((c.distance_to(t.to) - 140.0).abs() < 1e-9);
        }
    }

    #[test]
    fn tiny_dial_clamps_to_center() {
        let geom = DialGeometry::new(Point::new(0.0, 0.0), 5.0).unwrap();
        let face = face_primitives(&geom, &DialStyle::default());
        assert!(face.ticks.iter().all(|t| t.from == Point::new(0.0, 0.0)));
        assert!(face.numerals.iter().all(|l| l.anchor == Point::new(0.0, 0.0)));
    }

    // ── primitives ────────────────────────────────────────────────────────

    #[test]
    fn primitives_draw_order() {
        let face = layout();
        let all = face.primitives(true);
        assert_eq!(all.len(), 25);
        assert_eq!(all[0].ink(), Ink::Face);
        assert!(all[1..13].iter().all(|p| p.ink() == Ink::Tick));
        assert!(all[13..].iter().all(|p| p.ink() == Ink::Numeral));
    }

    #[test]
    fn primitives_without_numerals() {
        let face = layout();
        assert_eq!(face.primitives(false).len(), 13);
    }
}

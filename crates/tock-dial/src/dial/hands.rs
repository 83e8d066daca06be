use crate::time::ClockTime;

use super::{DialGeometry, DialStyle, HandKind, HandStyle, Ink, Point, Primitive, Segment};

/// Hour hand angle in degrees clockwise from 12; creeps with the minutes.
#[inline]
pub fn hour_angle(hour: u32, minute: u32) -> f64 {
    f64::from(hour % 12) / 12.0 * 360.0 + f64::from(minute) / 60.0 * 30.0
}

/// Minute hand angle in degrees clockwise from 12; creeps with the seconds.
#[inline]
pub fn minute_angle(minute: u32, second: u32) -> f64 {
    f64::from(minute) / 60.0 * 360.0 + f64::from(second) / 60.0 * 6.0
}

/// Second hand angle in degrees clockwise from 12.
///
/// `seconds` may carry a fraction for sweeping motion.
#[inline]
pub fn second_angle(seconds: f64) -> f64 {
    seconds / 60.0 * 360.0
}

/// One hand for one tick. Not retained between ticks.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandSpec {
    pub kind: HandKind,
    pub angle_degrees: f64,
    /// Always >= 0.
    pub length: f64,
    pub thickness: f64,
}

impl HandSpec {
    /// End point of the hand.
    #[inline]
    pub fn tip(&self, center: Point) -> Point {
        center.on_ray(self.angle_degrees, self.length)
    }

    /// Segment from `center` to the tip, inked by hand kind.
    pub fn segment(&self, center: Point) -> Primitive {
        Primitive::Segment(Segment {
            from: center,
            to: self.tip(center),
            thickness: self.thickness,
            ink: Ink::Hand(self.kind),
        })
    }
}

/// Hour, minute and second hands (in that order) with the default style.
pub fn hand_specs(time: &ClockTime, geom: &DialGeometry) -> [HandSpec; 3] {
    hand_specs_styled(time, geom, &DialStyle::default())
}

/// Hour, minute and second hands (in that order).
///
/// Lengths are clamped at zero so a small dial never yields negative hands.
pub fn hand_specs_styled(time: &ClockTime, geom: &DialGeometry, style: &DialStyle) -> [HandSpec; 3] {
    let r = geom.radius();
    let spec = |kind: HandKind, angle_degrees: f64, hs: &HandStyle| HandSpec {
        kind,
        angle_degrees,
        length: (r - hs.offset).max(0.0),
        thickness: hs.thickness,
    };

    [
        spec(HandKind::Hour, hour_angle(time.hour(), time.minute()), &style.hour),
        spec(HandKind::Minute, minute_angle(time.minute(), time.second()), &style.minute),
        spec(HandKind::Second, second_angle(time.seconds_with_fraction()), &style.second),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn t(h: u32, m: u32, s: u32) -> ClockTime {
        ClockTime::from_hms(h, m, s).unwrap()
    }

    fn dial(radius: f64) -> DialGeometry {
        DialGeometry::new(Point::new(200.0, 200.0), radius).unwrap()
    }

    // ── angles ────────────────────────────────────────────────────────────

    #[test]
    fn hour_angle_formula_and_range() {
        for h in 0..24 {
            for m in 0..60 {
                let a = hour_angle(h, m);
                let expected = f64::from(h % 12) / 12.0 * 360.0 + f64::from(m) / 60.0 * 30.0;
                assert!((a - expected).abs() < EPS);
                assert!((0.0..360.0).contains(&a), "h={h} m={m} a={a}");
            }
        }
    }

    #[test]
    fn hour_angle_wraps_at_noon() {
        assert_eq!(hour_angle(12, 0), 0.0);
        assert_eq!(hour_angle(0, 0), 0.0);
        assert!((hour_angle(15, 0) - 90.0).abs() < EPS);
    }

    #[test]
    fn minute_angle_is_monotonic_in_seconds() {
        for m in 0..60 {
            let mut prev = minute_angle(m, 0);
            assert!((prev - f64::from(m) * 6.0).abs() < EPS);
            for s in 1..60 {
                let a = minute_angle(m, s);
                assert!(a >= prev, "m={m} s={s}");
                prev = a;
            }
        }
    }

    #[test]
    fn second_angle_formula() {
        assert_eq!(second_angle(0.0), 0.0);
        for s in 0..60 {
            assert!((second_angle(f64::from(s)) - f64::from(s) / 60.0 * 360.0).abs() < EPS);
        }
        assert!((second_angle(15.5) - 93.0).abs() < EPS);
    }

    // ── hand specs ────────────────────────────────────────────────────────

    #[test]
    fn order_is_hour_minute_second() {
        let hands = hand_specs(&t(10, 10, 30), &dial(150.0));
        let kinds: Vec<HandKind> = hands.iter().map(|h| h.kind).collect();
        assert_eq!(kinds, HandKind::ALL);
    }

    #[test]
    fn three_oclock() {
        let geom = dial(150.0);
        let [hour, minute, second] = hand_specs(&t(3, 0, 0), &geom);
        assert!((hour.angle_degrees - 90.0).abs() < EPS);
        assert_eq!(minute.angle_degrees, 0.0);
        assert_eq!(second.angle_degrees, 0.0);

        let c = geom.center();
        let tip = hour.tip(c);
        assert!(tip.x > c.x && (tip.y - c.y).abs() < 1e-6, "{tip:?}");
        let tip = minute.tip(c);
        assert!((tip.x - c.x).abs() < 1e-6 && tip.y < c.y, "{tip:?}");
        let tip = second.tip(c);
        assert!((tip.x - c.x).abs() < 1e-6 && tip.y < c.y, "{tip:?}");
    }

    #[test]
    fn half_past_six() {
        let geom = dial(150.0);
        let [hour, minute, _] = hand_specs(&t(6, 30, 0), &geom);
        assert!((hour.angle_degrees - 195.0).abs() < EPS);
        assert!((minute.angle_degrees - 180.0).abs() < EPS);

        let tip = minute.tip(geom.center());
        assert!(tip.y > geom.center().y);
    }

    #[test]
    fn fraction_moves_only_the_second_hand() {
        let geom = dial(150.0);
        let whole = hand_specs(&t(1, 2, 3), &geom);
        let swept = hand_specs(&t(1, 2, 3).with_fraction(0.5).unwrap(), &geom);
        assert_eq!(whole[0], swept[0]);
        assert_eq!(whole[1], swept[1]);
        assert!((swept[2].angle_degrees - 21.0).abs() < EPS);
    }

    #[test]
    fn lengths_are_ordered_inside_the_rim() {
        for radius in [61.0, 80.0, 150.0, 1000.0] {
            let [h, m, s] = hand_specs(&t(0, 0, 0), &dial(radius));
            assert!(0.0 <= h.length);
            assert!(h.length < m.length && m.length < s.length && s.length < radius);
        }
    }

    #[test]
    fn thickness_decreases_hour_to_second() {
        let [h, m, s] = hand_specs(&t(0, 0, 0), &dial(150.0));
        assert!(h.thickness > m.thickness && m.thickness > s.thickness && s.thickness > 0.0);
    }

    #[test]
    fn small_dial_clamps_lengths_to_zero() {
        let [h, m, s] = hand_specs(&t(9, 45, 12), &dial(30.0));
        assert_eq!(h.length, 0.0);
        assert_eq!(m.length, 0.0);
        assert!((s.length - 10.0).abs() < EPS);

        let [h, m, s] = hand_specs(&t(9, 45, 12), &dial(1.0));
        assert!([h, m, s].iter().all(|hand| hand.length == 0.0));
    }

    #[test]
    fn segment_runs_from_center_to_tip() {
        let geom = dial(150.0);
        let [hour, ..] = hand_specs(&t(3, 0, 0), &geom);
        let Primitive::Segment(seg) = hour.segment(geom.center()) else {
            panic!("hand must be a segment");
        };
        assert_eq!(seg.from, geom.center());
        assert!((seg.to.x - 290.0).abs() < 1e-9);
        assert_eq!(seg.ink, Ink::Hand(HandKind::Hour));
        assert_eq!(seg.thickness, 6.0);
    }
}

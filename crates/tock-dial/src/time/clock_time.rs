use std::fmt;

use chrono::Timelike;

/// Largest `f64` strictly below 1.0.
const MAX_FRACTION: f64 = 1.0 - f64::EPSILON / 2.0;

/// Wall-clock snapshot for one tick.
///
/// Invariants (enforced by the constructors):
/// - `hour` in 0..24, `minute` in 0..60, `second` in 0..60
/// - `fractional_second`, when present, in [0, 1)
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
    second: u32,
    fractional_second: Option<f64>,
}

impl ClockTime {
    /// Returns `None` when any component is out of range.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Option<Self> {
        if hour >= 24 || minute >= 60 || second >= 60 {
            return None;
        }
        Some(Self { hour, minute, second, fractional_second: None })
    }

    /// Attaches a sub-second fraction, clamped into [0, 1).
    ///
    /// Returns `None` for NaN or infinite input.
    pub fn with_fraction(self, fraction: f64) -> Option<Self> {
        if !fraction.is_finite() {
            return None;
        }
        Some(Self { fractional_second: Some(fraction.clamp(0.0, MAX_FRACTION)), ..self })
    }

    /// Builds a snapshot from any chrono time value.
    ///
    /// chrono encodes a leap second as `second == 59` with nanoseconds past
    /// 1e9; the fraction is clamped so the second hand never reaches 60.
    pub(crate) fn from_timelike<T: Timelike>(t: &T, with_fraction: bool) -> Self {
        let time = Self {
            hour: t.hour(),
            minute: t.minute(),
            second: t.second().min(59),
            fractional_second: None,
        };
        if with_fraction {
            let fraction = f64::from(t.nanosecond()) / 1_000_000_000.0;
            Self { fractional_second: Some(fraction.clamp(0.0, MAX_FRACTION)), ..time }
        } else {
            time
        }
    }

    #[inline]
    pub fn hour(&self) -> u32 {
        self.hour
    }

    #[inline]
    pub fn minute(&self) -> u32 {
        self.minute
    }

    #[inline]
    pub fn second(&self) -> u32 {
        self.second
    }

    #[inline]
    pub fn fractional_second(&self) -> Option<f64> {
        self.fractional_second
    }

    /// Whole seconds plus the fraction, if any.
    #[inline]
    pub fn seconds_with_fraction(&self) -> f64 {
        f64::from(self.second) + self.fractional_second.unwrap_or(0.0)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn from_hms_accepts_bounds() {
        assert!(ClockTime::from_hms(0, 0, 0).is_some());
        assert!(ClockTime::from_hms(23, 59, 59).is_some());
    }

    #[test]
    fn from_hms_rejects_out_of_range() {
        assert!(ClockTime::from_hms(24, 0, 0).is_none());
        assert!(ClockTime::from_hms(0, 60, 0).is_none());
        assert!(ClockTime::from_hms(0, 0, 60).is_none());
    }

    #[test]
    fn with_fraction_clamps_below_one() {
        let t = ClockTime::from_hms(1, 2, 3).unwrap().with_fraction(1.0).unwrap();
        let f = t.fractional_second().unwrap();
        assert!(f < 1.0);
        assert!(f > 0.999);

        let t = ClockTime::from_hms(1, 2, 3).unwrap().with_fraction(-0.5).unwrap();
        assert_eq!(t.fractional_second(), Some(0.0));
    }

    #[test]
    fn with_fraction_rejects_nan() {
        assert!(ClockTime::from_hms(1, 2, 3).unwrap().with_fraction(f64::NAN).is_none());
    }

    #[test]
    fn from_timelike_without_fraction() {
        let t = NaiveTime::from_hms_milli_opt(14, 5, 9, 750).unwrap();
        let ct = ClockTime::from_timelike(&t, false);
        assert_eq!((ct.hour(), ct.minute(), ct.second()), (14, 5, 9));
        assert_eq!(ct.fractional_second(), None);
    }

    #[test]
    fn from_timelike_with_fraction() {
        let t = NaiveTime::from_hms_milli_opt(14, 5, 9, 750).unwrap();
        let ct = ClockTime::from_timelike(&t, true);
        assert_eq!(ct.fractional_second(), Some(0.75));
        assert_eq!(ct.seconds_with_fraction(), 9.75);
    }

    #[test]
    fn leap_second_fraction_stays_below_one() {
        let t = NaiveTime::from_hms_nano_opt(23, 59, 59, 1_500_000_000).unwrap();
        let ct = ClockTime::from_timelike(&t, true);
        assert_eq!(ct.second(), 59);
        assert!(ct.fractional_second().unwrap() < 1.0);
    }

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(ClockTime::from_hms(3, 7, 0).unwrap().to_string(), "03:07:00");
    }
}

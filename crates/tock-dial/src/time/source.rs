use crate::error::InvalidZoneError;

use super::{Clock, ClockTime, SystemClock, TimeZoneId};

/// Resolves "now" into a [`ClockTime`] for a zone.
///
/// Stateless apart from the clock port, so several controllers can share one
/// source by reference.
#[derive(Debug, Default, Clone)]
pub struct TimeSource<C = SystemClock> {
    clock: C,
}

impl TimeSource<SystemClock> {
    /// Time source backed by the operating system clock.
    pub fn system() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> TimeSource<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Current wall-clock time in `zone`, whole seconds only.
    pub fn current_time(&self, zone: &TimeZoneId) -> ClockTime {
        self.read(zone, false)
    }

    /// Current wall-clock time in `zone` including the sub-second fraction.
    pub fn current_time_fractional(&self, zone: &TimeZoneId) -> ClockTime {
        self.read(zone, true)
    }

    /// Checks `name` against the zone database without touching any state.
    pub fn validate_zone(&self, name: &str) -> Result<TimeZoneId, InvalidZoneError> {
        TimeZoneId::parse(name)
    }

    fn read(&self, zone: &TimeZoneId, with_fraction: bool) -> ClockTime {
        let now = self.clock.now();
        match zone {
            TimeZoneId::Local => {
                ClockTime::from_timelike(&now.with_timezone(&chrono::Local), with_fraction)
            }
            TimeZoneId::Named(tz) => ClockTime::from_timelike(&now.with_timezone(tz), with_fraction),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Timelike, Utc};

    use super::*;
    use crate::time::FixedClock;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 12, 34, 56).unwrap() + Duration::milliseconds(250)
    }

    fn hms(t: ClockTime) -> (u32, u32, u32) {
        (t.hour(), t.minute(), t.second())
    }

    #[test]
    fn utc_reads_the_instant() {
        let source = TimeSource::new(FixedClock::new(instant()));
        let t = source.current_time(&TimeZoneId::utc());
        assert_eq!(hms(t), (12, 34, 56));
        assert_eq!(t.fractional_second(), None);
    }

    #[test]
    fn named_zones_apply_their_offset() {
        let source = TimeSource::new(FixedClock::new(instant()));
        let zone = |n: &str| TimeZoneId::parse(n).unwrap();

        assert_eq!(hms(source.current_time(&zone("Asia/Tokyo"))), (21, 34, 56));
        // January: New York is on EST (UTC-5).
        assert_eq!(hms(source.current_time(&zone("America/New_York"))), (7, 34, 56));
        // Half-hour offset.
        assert_eq!(hms(source.current_time(&zone("Asia/Kolkata"))), (18, 4, 56));
    }

    #[test]
    fn daylight_saving_is_honoured() {
        let summer = Utc.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap();
        let source = TimeSource::new(FixedClock::new(summer));
        let zone = TimeZoneId::parse("America/New_York").unwrap();
        // July: EDT (UTC-4).
        assert_eq!(source.current_time(&zone).hour(), 8);
    }

    #[test]
    fn local_sentinel_matches_chrono_local() {
        let source = TimeSource::new(FixedClock::new(instant()));
        let expected = instant().with_timezone(&chrono::Local);
        let t = source.current_time(&TimeZoneId::Local);
        assert_eq!(hms(t), (expected.hour(), expected.minute(), expected.second()));
    }

    #[test]
    fn fractional_read_carries_sub_second() {
        let source = TimeSource::new(FixedClock::new(instant()));
        let t = source.current_time_fractional(&TimeZoneId::utc());
        assert_eq!(t.fractional_second(), Some(0.25));
    }

    #[test]
    fn follows_a_shared_clock() {
        let clock = FixedClock::new(instant());
        let source = TimeSource::new(&clock);
        clock.advance(Duration::seconds(4));
        assert_eq!(hms(source.current_time(&TimeZoneId::utc())), (12, 35, 0));
    }

    #[test]
    fn validate_zone_accepts_utc_and_rejects_unknown() {
        let source = TimeSource::system();
        assert_eq!(source.validate_zone("UTC"), Ok(TimeZoneId::utc()));
        let err = source.validate_zone("Not/AZone").unwrap_err();
        assert_eq!(err.name, "Not/AZone");
    }
}

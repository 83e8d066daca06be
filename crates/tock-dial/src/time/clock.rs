use std::cell::Cell;

use chrono::{DateTime, Duration, Utc};

/// Port for reading the current instant.
///
/// Lets the time source run against the real system clock or against a
/// frozen instant for deterministic tests.
pub trait Clock {
    /// Current instant in UTC.
    fn now(&self) -> DateTime<Utc>;

    /// Clock name for diagnostics.
    fn name(&self) -> &str {
        "clock"
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Reads the operating system's wall clock.
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn name(&self) -> &str {
        "system"
    }
}

/// A clock that returns a fixed instant until told otherwise.
///
/// Interior mutability lets a test keep a shared reference to the clock while
/// a `TimeSource` borrows it, and still move time forward between ticks.
#[derive(Debug, Clone)]
pub struct FixedClock(Cell<DateTime<Utc>>);

impl FixedClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(Cell::new(at))
    }

    /// Moves the clock to `at`.
    pub fn set(&self, at: DateTime<Utc>) {
        self.0.set(at);
    }

    /// Moves the clock forward (or backward, for negative `by`).
    pub fn advance(&self, by: Duration) {
        self.0.set(self.0.get() + by);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0.get()
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn fixed_clock_returns_its_instant() {
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let clock = FixedClock::new(at);
        assert_eq!(clock.now(), at);
        assert_eq!(clock.now(), at);
    }

    #[test]
    fn fixed_clock_advance_through_shared_reference() {
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let clock = FixedClock::new(at);
        let borrowed: &dyn Clock = &clock;
        clock.advance(Duration::seconds(90));
        assert_eq!(borrowed.now(), at + Duration::seconds(90));
    }

    #[test]
    fn reference_forwards_to_inner_clock() {
        let at = Utc.with_ymd_and_hms(2030, 6, 1, 0, 0, 0).unwrap();
        let clock = FixedClock::new(at);
        let by_ref = &clock;
        assert_eq!(Clock::now(&by_ref), at);
        assert_eq!(Clock::name(&by_ref), "fixed");
    }
}

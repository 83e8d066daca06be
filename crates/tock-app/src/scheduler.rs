use std::time::{Duration, Instant};

use tock_dial::{Scheduler, TickToken};
use tock_engine::time::Timers;

/// `Scheduler` backed by the engine deadline queue.
///
/// Delays are measured from the frame instant `now`.
pub struct TimerScheduler<'a> {
    pub timers: &'a mut Timers<TickToken>,
    pub now: Instant,
}

impl Scheduler for TimerScheduler<'_> {
    fn schedule(&mut self, delay: Duration, token: TickToken) {
        self.timers.schedule(self.now, delay, token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tock_dial::{ClockConfig, ClockController, FixedClock, TimeSource};

    use crate::canvas::tests::NullCanvas;

    #[test]
    fn mount_arms_one_deadline() {
        let clock = FixedClock::new(Utc.timestamp_opt(0, 0).unwrap());
        let mut controller = ClockController::new(ClockConfig::default(), TimeSource::new(clock))
            .unwrap();

        let now = Instant::now();
        let mut timers = Timers::new();
        controller.mount(&mut NullCanvas, &mut TimerScheduler { timers: &mut timers, now });

        assert_eq!(timers.len(), 1);
        assert_eq!(timers.next_deadline(), Some(now + Duration::from_millis(50)));
        assert_eq!(timers.take_due(now + Duration::from_millis(50)), [controller.armed().unwrap()]);
    }
}

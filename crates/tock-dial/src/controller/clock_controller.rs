use crate::config::ClockConfig;
use crate::dial::{face_primitives, hand_specs_styled, DialGeometry, FaceLayout, Layer};
use crate::error::{ConfigError, InvalidZoneError};
use crate::time::{Clock, ClockTime, SystemClock, TimeSource, TimeZoneId};

use super::{Canvas, Scheduler, TickToken};

/// Controller life cycle. `Stopped` is terminal.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RunState {
    Running,
    Stopped,
}

/// Result of delivering a timer callback.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TickOutcome {
    /// Hands were redrawn for this time and the next tick is armed.
    Rendered(ClockTime),
    /// Stopped, or the token was stale; nothing drawn, nothing armed.
    Ignored,
}

/// One analog clock: static face, active zone, and the tick loop.
pub struct ClockController<C = SystemClock> {
    source: TimeSource<C>,
    config: ClockConfig,
    geometry: DialGeometry,
    face: FaceLayout,
    zone: TimeZoneId,
    state: RunState,
    /// Set by the first `mount`; hands are only drawn over a drawn face.
    mounted: bool,
    armed: Option<TickToken>,
    next_token: u64,
    last_time: Option<ClockTime>,
}

impl<C: Clock> ClockController<C> {
    /// Builds a running controller.
    ///
    /// An unknown `initial_zone` is reported and replaced by local time; an
    /// invalid geometry or style is an error.
    pub fn new(config: ClockConfig, source: TimeSource<C>) -> Result<Self, ConfigError> {
        let geometry = config.validate()?;

        let zone = match source.validate_zone(&config.initial_zone) {
            Ok(zone) => zone,
            Err(err) => {
                log::warn!("{err}; falling back to local time");
                TimeZoneId::Local
            }
        };

        let face = face_primitives(&geometry, &config.style);

        log::debug!(
            "clock created: radius {}, tick {:?}, zone {zone}, clock {}",
            geometry.radius(),
            config.tick_interval(),
            source.clock().name()
        );

        Ok(Self {
            source,
            config,
            geometry,
            face,
            zone,
            state: RunState::Running,
            mounted: false,
            armed: None,
            next_token: 0,
            last_time: None,
        })
    }

    /// Draws the face, renders the hands once and arms the first tick.
    pub fn mount(&mut self, canvas: &mut dyn Canvas, scheduler: &mut dyn Scheduler) {
        if self.state == RunState::Stopped {
            return;
        }

        canvas.erase(Layer::Face);
        for primitive in self.face.primitives(self.config.show_numerals) {
            canvas.draw(Layer::Face, &primitive);
        }
        self.mounted = true;

        self.render(canvas);
        self.arm(scheduler);
    }

    /// Timer callback.
    pub fn on_timer(
        &mut self,
        token: TickToken,
        canvas: &mut dyn Canvas,
        scheduler: &mut dyn Scheduler,
    ) -> TickOutcome {
        if self.state == RunState::Stopped {
            log::trace!("tick {} after stop ignored", token.id());
            return TickOutcome::Ignored;
        }
        if self.armed != Some(token) {
            log::debug!("stale tick {} ignored", token.id());
            return TickOutcome::Ignored;
        }

        self.armed = None;
        let time = self.render(canvas);
        self.arm(scheduler);
        TickOutcome::Rendered(time)
    }

    /// Switches the displayed zone and redraws the hands right away.
    ///
    /// The armed tick is left alone, so the cadence does not change. Before
    /// `mount` or after `stop` the zone is recorded without drawing. On error
    /// the previous zone stays active.
    pub fn set_zone(&mut self, name: &str, canvas: &mut dyn Canvas) -> Result<(), InvalidZoneError> {
        let zone = match self.source.validate_zone(name) {
            Ok(zone) => zone,
            Err(err) => {
                log::warn!("{err}; keeping {}", self.zone);
                return Err(err);
            }
        };

        log::info!("time zone set to {zone}");
        self.zone = zone;

        if self.state == RunState::Running && self.mounted {
            self.render(canvas);
        }
        Ok(())
    }

    /// Stops the clock for good. Any armed token becomes stale.
    pub fn stop(&mut self) {
        if self.state == RunState::Stopped {
            return;
        }
        self.state = RunState::Stopped;
        self.armed = None;
        log::debug!("clock stopped");
    }

    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }

    #[inline]
    pub fn zone(&self) -> TimeZoneId {
        self.zone
    }

    #[inline]
    pub fn geometry(&self) -> &DialGeometry {
        &self.geometry
    }

    #[inline]
    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    /// Time shown by the most recent render.
    #[inline]
    pub fn last_time(&self) -> Option<ClockTime> {
        self.last_time
    }

    /// Token of the pending tick, if any.
    #[inline]
    pub fn armed(&self) -> Option<TickToken> {
        self.armed
    }

    fn render(&mut self, canvas: &mut dyn Canvas) -> ClockTime {
        let time = if self.config.smooth_seconds {
            self.source.current_time_fractional(&self.zone)
        } else {
            self.source.current_time(&self.zone)
        };

        let hands = hand_specs_styled(&time, &self.geometry, &self.config.style);
        let center = self.geometry.center();

        canvas.erase(Layer::Hands);
        for hand in &hands {
            canvas.draw(Layer::Hands, &hand.segment(center));
        }

        log::trace!("rendered {time} ({})", self.zone);
        self.last_time = Some(time);
        time
    }

    fn arm(&mut self, scheduler: &mut dyn Scheduler) {
        let token = TickToken(self.next_token);
        self.next_token = self.next_token.wrapping_add(1);
        self.armed = Some(token);
        scheduler.schedule(self.config.tick_interval(), token);
    }
}

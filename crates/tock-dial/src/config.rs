use std::time::Duration;

use crate::dial::{DialGeometry, DialStyle, Point};
use crate::error::ConfigError;

/// Fastest supported tick; fine enough for a sweeping second hand.
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Slowest supported tick; one update per second.
pub const MAX_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Per-clock settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockConfig {
    pub center: Point,
    pub radius: f64,
    /// Requested tick period; read through [`ClockConfig::tick_interval`].
    pub tick_interval: Duration,
    /// Feed the sub-second fraction to the second hand.
    pub smooth_seconds: bool,
    pub show_numerals: bool,
    /// Zone name validated at construction; falls back to local time.
    pub initial_zone: String,
    pub style: DialStyle,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            center: Point::new(200.0, 200.0),
            radius: 150.0,
            tick_interval: MIN_TICK_INTERVAL,
            smooth_seconds: false,
            show_numerals: true,
            initial_zone: "UTC".to_string(),
            style: DialStyle::default(),
        }
    }
}

impl ClockConfig {
    /// Tick period clamped into [`MIN_TICK_INTERVAL`, `MAX_TICK_INTERVAL`].
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval.clamp(MIN_TICK_INTERVAL, MAX_TICK_INTERVAL)
    }

    /// Validated dial geometry.
    pub fn geometry(&self) -> Result<DialGeometry, ConfigError> {
        DialGeometry::new(self.center, self.radius).ok_or(ConfigError::InvalidGeometry {
            center: (self.center.x, self.center.y),
            radius: self.radius,
        })
    }

    /// Checks everything that can be checked without the zone database.
    pub fn validate(&self) -> Result<DialGeometry, ConfigError> {
        let geom = self.geometry()?;
        if !self.style.is_valid() {
            return Err(ConfigError::InvalidStyle);
        }
        Ok(geom)
    }
}

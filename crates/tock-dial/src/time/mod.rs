//! Time subsystem.
//!
//! Resolves the current instant into hour/minute/second for a zone:
//! - [`Clock`] is the port for "now" (system clock in production, fixed in tests)
//! - [`TimeZoneId`] is a validated zone or the local-time sentinel
//! - [`TimeSource`] combines the two into a [`ClockTime`] snapshot

mod clock;
mod clock_time;
mod source;
mod zone;

pub use clock::{Clock, FixedClock, SystemClock};
pub use clock_time::ClockTime;
pub use source::TimeSource;
pub use zone::{zone_catalog, TimeZoneId, LOCAL_ZONE_NAME};

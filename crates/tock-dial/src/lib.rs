//! tock dial: the headless core of the analog clock.
//!
//! - [`time`] resolves "now" into a [`ClockTime`] for a validated [`TimeZoneId`]
//! - [`dial`] turns a `ClockTime` and a [`DialGeometry`] into draw primitives
//! - [`controller`] drives the periodic update through the [`Canvas`] and
//!   [`Scheduler`] ports provided by the host
//!
//! Nothing here knows about windows or GPUs; the host adapts its own drawing
//! surface and timer facility to the two ports.

pub mod config;
pub mod controller;
pub mod dial;
pub mod error;
pub mod time;

pub use config::ClockConfig;
pub use controller::{Canvas, ClockController, RunState, Scheduler, TickOutcome, TickToken};
pub use dial::{DialGeometry, HandKind, HandSpec, Ink, Layer, Point, Primitive};
pub use error::{ConfigError, InvalidZoneError};
pub use time::{zone_catalog, Clock, ClockTime, FixedClock, SystemClock, TimeSource, TimeZoneId};

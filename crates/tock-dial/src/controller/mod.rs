//! Update cycle.
//!
//! [`ClockController`] owns one dial and drives it through two host ports:
//! - [`Canvas`]: draw a primitive into a layer, erase a layer
//! - [`Scheduler`]: arm a one-shot timer that later calls back with a [`TickToken`]
//!
//! All calls happen on the host's event-loop thread; nothing here blocks.

mod clock_controller;
mod ports;

pub use clock_controller::{ClockController, RunState, TickOutcome};
pub use ports::{Canvas, Scheduler, TickToken};

//! Time subsystem.
//!
//! Provides a deadline queue the runtime polls to decide when to wake up.
//! Intended usage:
//! - schedule payloads with a delay relative to `now`
//! - ask `next_deadline()` how long the event loop may sleep
//! - drain `take_due(now)` on each frame

mod timers;

pub use timers::Timers;

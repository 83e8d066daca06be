use std::time::Duration;

use crate::dial::{Layer, Primitive};

/// Identifies one armed timer.
///
/// Tokens increase monotonically per controller; a callback carrying any
/// token other than the currently armed one is stale.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct TickToken(pub(crate) u64);

impl TickToken {
    #[inline]
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Drawing surface provided by the host.
pub trait Canvas {
    /// Adds `primitive` to `layer`.
    fn draw(&mut self, layer: Layer, primitive: &Primitive);

    /// Removes everything previously drawn into `layer`.
    fn erase(&mut self, layer: Layer);
}

/// One-shot timer facility provided by the host.
pub trait Scheduler {
    /// Calls the controller back with `token` after roughly `delay`.
    fn schedule(&mut self, delay: Duration, token: TickToken);
}

/// What the frame loop should do after `get_current_texture` fails.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Lost or outdated surface was reconfigured; the next frame can draw.
    Reconfigured,
    /// Timeout or transient failure; drop this frame and wait for the next tick.
    SkipFrame,
    /// Out of memory; the runtime exits.
    Fatal,
}

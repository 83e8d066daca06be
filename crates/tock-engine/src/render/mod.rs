//! GPU rendering subsystem.
//!
//! Renderers consume the retained `scene` draw list and issue GPU commands via wgpu.
//! Each renderer owns its GPU resources (pipelines, buffers) and works in two steps:
//! `prepare` uploads every instance of its shape once per frame, then
//! `render_layer` draws the instances of one z-layer. Calling the renderers
//! layer by layer interleaves shape kinds in paint order.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - Vertex shader converts to NDC using a viewport uniform.

mod ctx;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};

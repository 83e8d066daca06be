//! Color model shared between the scene and the renderers.
//!
//! Colors are linear and premultiplied; geometry types live in `coords`.

pub mod color;

pub use color::Color;

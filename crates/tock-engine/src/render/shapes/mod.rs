//! Shape renderers.

mod common;

pub mod circle;
pub mod line;
pub mod text;

pub use circle::CircleRenderer;
pub use line::LineRenderer;
pub use text::TextRenderer;

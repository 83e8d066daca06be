//! Tock engine crate.
//!
//! Platform + GPU runtime for a single fixed-size window: winit event loop with
//! deadline wake-ups, wgpu device/surface, a retained tagged draw list and the
//! circle/line/text renderers that paint it.

pub mod core;
pub mod device;
pub mod input;
pub mod time;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;

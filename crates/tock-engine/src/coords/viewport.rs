use super::Vec2;

/// Viewport size in logical pixels.
///
/// Renderers upload this as the basis for converting logical px positions to
/// NDC in their vertex shaders.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Size clamped to at least one pixel per axis, as uploaded to shaders.
    #[inline]
    pub fn clamped_size(self) -> [f32; 2] {
        [self.width.max(1.0), self.height.max(1.0)]
    }

    /// CPU mirror of the shaders' `to_ndc`: top-left is `(-1, 1)`, bottom-right `(1, -1)`.
    #[inline]
    pub fn to_ndc(self, p: Vec2) -> Vec2 {
        let [w, h] = self.clamped_size();
        Vec2::new(p.x / w * 2.0 - 1.0, 1.0 - p.y / h * 2.0)
    }
}

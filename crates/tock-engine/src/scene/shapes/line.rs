use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, Tag, ZIndex};

/// Straight line segment with butt caps.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    /// Stroke width in logical pixels.
    pub width: f32,
    pub color: Color,
}

impl LineCmd {
    /// Zero-length or zero-width segments paint nothing.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.width > 0.0 && self.color.a > 0.0 && (self.to - self.from).normalized().is_some()
    }
}

impl DrawList {
    /// Records a line draw command.
    #[inline]
    pub fn push_line(
        &mut self,
        z: ZIndex,
        tag: Tag,
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
    ) {
        self.push(z, tag, DrawCmd::Line(LineCmd { from, to, width, color }));
    }
}

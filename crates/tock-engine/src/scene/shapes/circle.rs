use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, Tag, ZIndex};

use super::Border;

/// Circle draw payload.
///
/// The border is painted inside `radius`; a transparent `fill` gives an outline-only ring.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub fill: Color,
    pub border: Option<Border>,
}

impl DrawList {
    /// Records a circle draw command.
    #[inline]
    pub fn push_circle(
        &mut self,
        z: ZIndex,
        tag: Tag,
        center: Vec2,
        radius: f32,
        fill: Color,
        border: Option<Border>,
    ) {
        self.push(z, tag, DrawCmd::Circle(CircleCmd { center, radius, fill, border }));
    }

    /// Records an unfilled ring of the given stroke width.
    #[inline]
    pub fn push_ring(&mut self, z: ZIndex, tag: Tag, center: Vec2, radius: f32, width: f32, color: Color) {
        self.push_circle(z, tag, center, radius, Color::TRANSPARENT, Some(Border::new(width, color)));
    }
}

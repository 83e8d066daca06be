use tock_dial::{Canvas, Layer, Primitive};
use tock_engine::coords::Vec2;
use tock_engine::paint::Color;
use tock_engine::scene::{DrawList, Tag, ZIndex};
use tock_engine::text::{FontId, FontSystem};

use crate::theme::Theme;

pub const FACE_TAG: Tag = Tag(1);
pub const STATUS_TAG: Tag = Tag(2);
pub const HANDS_TAG: Tag = Tag(3);

pub const FACE_Z: ZIndex = ZIndex(0);
pub const STATUS_Z: ZIndex = ZIndex(1);
pub const HANDS_Z: ZIndex = ZIndex(2);

/// Layers in paint order.
pub const PAINT_ORDER: [ZIndex; 3] = [FACE_Z, STATUS_Z, HANDS_Z];

fn slot(layer: Layer) -> (Tag, ZIndex) {
    match layer {
        Layer::Face => (FACE_TAG, FACE_Z),
        Layer::Hands => (HANDS_TAG, HANDS_Z),
    }
}

/// Pushes `text` centered on `anchor`. No-op without a font.
pub fn push_centered_text(
    list: &mut DrawList,
    fonts: &FontSystem,
    font: Option<FontId>,
    (tag, z): (Tag, ZIndex),
    text: &str,
    anchor: Vec2,
    size: f32,
    color: Color,
) {
    let Some(font) = font else { return };
    let extent = fonts.measure_text(text, font, size);
    let origin = Vec2::new(anchor.x - extent.x * 0.5, anchor.y - extent.y * 0.5);
    list.push_text(z, tag, text, font, size, color, origin);
}

/// `Canvas` over the retained draw list.
///
/// Each dial layer owns one tag, so erasing a layer removes exactly what was
/// drawn into it.
pub struct DrawListCanvas<'a> {
    pub list: &'a mut DrawList,
    pub fonts: &'a FontSystem,
    pub font: Option<FontId>,
    pub theme: &'a Theme,
}

impl Canvas for DrawListCanvas<'_> {
    fn draw(&mut self, layer: Layer, primitive: &Primitive) {
        let (tag, z) = slot(layer);
        let color = self.theme.ink(primitive.ink());

        match primitive {
            Primitive::Circle(c) => self.list.push_ring(
                z,
                tag,
                Vec2::new(c.center.x as f32, c.center.y as f32),
                c.radius as f32,
                c.stroke_width as f32,
                color,
            ),
            Primitive::Segment(s) => self.list.push_line(
                z,
                tag,
                Vec2::new(s.from.x as f32, s.from.y as f32),
                Vec2::new(s.to.x as f32, s.to.y as f32),
                s.thickness as f32,
                color,
            ),
            Primitive::Label(l) => push_centered_text(
                self.list,
                self.fonts,
                self.font,
                (tag, z),
                &l.text,
                Vec2::new(l.anchor.x as f32, l.anchor.y as f32),
                l.size as f32,
                color,
            ),
        }
    }

    fn erase(&mut self, layer: Layer) {
        let (tag, _) = slot(layer);
        let removed = self.list.remove_tagged(tag);
        log::trace!("erased {removed} items from {layer:?}");
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use tock_dial::dial::{Circle, Label, Segment};
    use tock_dial::{HandKind, Ink, Point};
    use tock_engine::scene::DrawCmd;

    /// Canvas that discards everything.
    pub(crate) struct NullCanvas;

    impl Canvas for NullCanvas {
        fn draw(&mut self, _layer: Layer, _primitive: &Primitive) {}
        fn erase(&mut self, _layer: Layer) {}
    }

    fn segment(ink: Ink) -> Primitive {
        Primitive::Segment(Segment {
            from: Point::new(200.0, 200.0),
            to: Point::new(200.0, 70.0),
            thickness: 2.0,
            ink,
        })
    }

    // ── mapping ──

    #[test]
    fn segment_becomes_line_in_hands_layer() {
        let (mut list, fonts, theme) = (DrawList::new(), FontSystem::new(), Theme::default());
        let mut canvas = DrawListCanvas { list: &mut list, fonts: &fonts, font: None, theme: &theme };

        canvas.draw(Layer::Hands, &segment(Ink::Hand(HandKind::Second)));

        let item = &list.items()[0];
        assert_eq!(item.tag, HANDS_TAG);
        assert_eq!(item.key.z, HANDS_Z);
        let DrawCmd::Line(line) = &item.cmd else { panic!("expected a line") };
        assert_eq!(line.to, Vec2::new(200.0, 70.0));
        assert_eq!(line.width, 2.0);
        assert_eq!(line.color, Color::RED);
    }

    #[test]
    fn circle_becomes_ring() {
        let (mut list, fonts, theme) = (DrawList::new(), FontSystem::new(), Theme::default());
        let mut canvas = DrawListCanvas { list: &mut list, fonts: &fonts, font: None, theme: &theme };

        canvas.draw(
            Layer::Face,
            &Primitive::Circle(Circle {
                center: Point::new(200.0, 200.0),
                radius: 150.0,
                stroke_width: 2.0,
                ink: Ink::Face,
            }),
        );

        let DrawCmd::Circle(c) = &list.items()[0].cmd else { panic!("expected a circle") };
        assert_eq!(c.radius, 150.0);
        assert_eq!(c.fill, Color::TRANSPARENT);
        assert_eq!(c.border.as_ref().map(|b| b.width), Some(2.0));
        assert_eq!(list.items()[0].tag, FACE_TAG);
    }

    #[test]
    fn label_without_font_is_skipped() {
        let (mut list, fonts, theme) = (DrawList::new(), FontSystem::new(), Theme::default());
        let mut canvas = DrawListCanvas { list: &mut list, fonts: &fonts, font: None, theme: &theme };

        canvas.draw(
            Layer::Face,
            &Primitive::Label(Label {
                text: "12".into(),
                anchor: Point::new(200.0, 80.0),
                size: 16.0,
                ink: Ink::Numeral,
            }),
        );

        assert!(list.is_empty());
    }

    // ── erase ──

    #[test]
    fn erase_only_touches_its_layer() {
        let (mut list, fonts, theme) = (DrawList::new(), FontSystem::new(), Theme::default());
        let mut canvas = DrawListCanvas { list: &mut list, fonts: &fonts, font: None, theme: &theme };

        canvas.draw(Layer::Face, &segment(Ink::Tick));
        canvas.draw(Layer::Hands, &segment(Ink::Hand(HandKind::Hour)));
        canvas.draw(Layer::Hands, &segment(Ink::Hand(HandKind::Minute)));
        canvas.erase(Layer::Hands);

        assert_eq!(list.len(), 1);
        assert_eq!(list.count_tagged(FACE_TAG), 1);
    }
}

use super::Point;

/// Which hand a [`HandSpec`](super::HandSpec) describes.
///
/// Also the hand's color role; the host theme picks the concrete color.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum HandKind {
    Hour,
    Minute,
    Second,
}

impl HandKind {
    /// Draw order: hour first, second last (on top).
    pub const ALL: [HandKind; 3] = [HandKind::Hour, HandKind::Minute, HandKind::Second];
}

/// Color role of a primitive.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Ink {
    Face,
    Tick,
    Numeral,
    Hand(HandKind),
}

/// Canvas layer a primitive is drawn into.
///
/// `Face` is drawn once; `Hands` is erased and redrawn on every tick.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Layer {
    Face,
    Hands,
}

/// Stroked circle outline.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
    pub stroke_width: f64,
    pub ink: Ink,
}

/// Straight line segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub thickness: f64,
    pub ink: Ink,
}

/// Text centered on `anchor`.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub anchor: Point,
    /// Font size in logical pixels.
    pub size: f64,
    pub ink: Ink,
}

/// Renderer-agnostic drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Circle(Circle),
    Segment(Segment),
    Label(Label),
}

impl Primitive {
    #[inline]
    pub fn ink(&self) -> Ink {
        match self {
            Primitive::Circle(c) => c.ink,
            Primitive::Segment(s) => s.ink,
            Primitive::Label(l) => l.ink,
        }
    }
}

impl From<Circle> for Primitive {
    fn from(c: Circle) -> Self {
        Primitive::Circle(c)
    }
}

impl From<Segment> for Primitive {
    fn from(s: Segment) -> Self {
        Primitive::Segment(s)
    }
}

impl From<Label> for Primitive {
    fn from(l: Label) -> Self {
        Primitive::Label(l)
    }
}

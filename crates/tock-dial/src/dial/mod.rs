//! Dial geometry.
//!
//! Pure functions from a [`DialGeometry`] (and, for the hands, a
//! [`ClockTime`](crate::time::ClockTime)) to renderer-agnostic [`Primitive`]s.
//!
//! Angle convention: degrees clockwise from 12 o'clock. [`Point::on_ray`]
//! maps that onto a y-down canvas, so 0° points up and 90° points right.

mod face;
mod geometry;
mod hands;
mod primitive;
mod style;

pub use face::{face_primitives, numeral_for, FaceLayout, TICK_COUNT};
pub use geometry::{DialGeometry, Point};
pub use hands::{hand_specs, hand_specs_styled, hour_angle, minute_angle, second_angle, HandSpec};
pub use primitive::{Circle, HandKind, Ink, Label, Layer, Primitive, Segment};
pub use style::{DialStyle, HandStyle};

//! Scene (retained draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands across frames
//! - provide deterministic ordering (z-index + insertion order)
//! - group items by [`Tag`] so a whole group can be replaced at once
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod key;
mod list;
mod tag;
mod z_index;

pub mod shapes;

pub use cmd::DrawCmd;
pub use key::SortKey;
pub use list::{DrawItem, DrawList};
pub use tag::Tag;
pub use z_index::ZIndex;

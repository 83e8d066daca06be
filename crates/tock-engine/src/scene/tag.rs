/// Group label attached to every draw item.
///
/// Items pushed under the same tag can be removed together with
/// [`DrawList::remove_tagged`](super::DrawList::remove_tagged).
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Tag(pub u32);

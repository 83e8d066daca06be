use super::{DrawCmd, SortKey, Tag, ZIndex};

/// A single draw item: sort key + group tag + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub tag: Tag,
    pub cmd: DrawCmd,
}

/// Retained draw stream.
///
/// Unlike an immediate-mode list the contents survive across frames: callers
/// replace a group by removing its tag and pushing new items, and every frame
/// paints whatever is currently recorded.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - `remove_tagged()` is O(n) and preserves the relative order of survivors
/// - paint-order iteration reuses an internal index buffer; it is only re-sorted after a change
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u64,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes all items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.sorted_indices.clear();
        self.sorted_dirty = true;
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command with the given z-index and tag.
    #[inline]
    pub fn push(&mut self, z: ZIndex, tag: Tag, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem { key: SortKey::new(z, order), tag, cmd });
        self.sorted_dirty = true;
    }

    /// Removes every item carrying `tag` and returns how many were removed.
    pub fn remove_tagged(&mut self, tag: Tag) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.tag != tag);
        let removed = before - self.items.len();
        if removed > 0 {
            self.sorted_dirty = true;
        }
        removed
    }

    /// Number of items currently carrying `tag`.
    pub fn count_tagged(&self, tag: Tag) -> usize {
        self.items.iter().filter(|item| item.tag == tag).count()
    }

    /// Iterates items in paint order without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));
        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    const FACE: Tag = Tag(1);
    const HANDS: Tag = Tag(2);

    fn line(list: &mut DrawList, z: i32, tag: Tag, x: f32) {
        list.push_line(ZIndex(z), tag, Vec2::new(x, 0.0), Vec2::new(x, 10.0), 2.0, Color::BLACK);
    }

    fn xs_in_paint_order(list: &mut DrawList) -> Vec<f32> {
        list.iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::Line(l) => l.from.x,
                _ => f32::NAN,
            })
            .collect()
    }

    // ── ordering ──────────────────────────────────────────────────────────

    #[test]
    fn paint_order_is_z_then_insertion() {
        let mut list = DrawList::new();
        line(&mut list, 1, HANDS, 1.0);
        line(&mut list, 0, FACE, 2.0);
        line(&mut list, 1, HANDS, 3.0);
        line(&mut list, 0, FACE, 4.0);

        assert_eq!(xs_in_paint_order(&mut list), [2.0, 4.0, 1.0, 3.0]);
    }

    // ── tags ──────────────────────────────────────────────────────────────

    #[test]
    fn remove_tagged_only_touches_that_group() {
        let mut list = DrawList::new();
        line(&mut list, 0, FACE, 1.0);
        line(&mut list, 1, HANDS, 2.0);
        line(&mut list, 1, HANDS, 3.0);
        line(&mut list, 0, FACE, 4.0);

        assert_eq!(list.remove_tagged(HANDS), 2);
        assert_eq!(list.count_tagged(HANDS), 0);
        assert_eq!(list.count_tagged(FACE), 2);
        assert_eq!(xs_in_paint_order(&mut list), [1.0, 4.0]);
    }

    #[test]
    fn remove_missing_tag_is_a_no_op() {
        let mut list = DrawList::new();
        line(&mut list, 0, FACE, 1.0);
        assert_eq!(list.remove_tagged(HANDS), 0);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn replaced_group_paints_after_older_items_in_same_layer() {
        let mut list = DrawList::new();
        line(&mut list, 0, HANDS, 1.0);
        line(&mut list, 0, FACE, 2.0);

        list.remove_tagged(HANDS);
        line(&mut list, 0, HANDS, 5.0);

        assert_eq!(xs_in_paint_order(&mut list), [2.0, 5.0]);
    }

    #[test]
    fn clear_empties_the_list() {
        let mut list = DrawList::new();
        line(&mut list, 0, FACE, 1.0);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.iter_in_paint_order().count(), 0);
    }
}

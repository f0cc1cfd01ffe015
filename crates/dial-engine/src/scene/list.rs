use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - `paint_order()` sorts references, never cloning draw commands
///
/// A list can be kept across ticks and replayed as-is; the clock relies on this
/// to keep the static face around while only the hands are re-recorded.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
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

    /// Commands in insertion order, without keys.
    pub fn commands(&self) -> impl Iterator<Item = &DrawCmd> {
        self.items.iter().map(|i| &i.cmd)
    }

    /// Pushes a draw command with the given z-index.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
        });
    }

    /// Items in paint order (back-to-front).
    pub fn paint_order(&self) -> Vec<&DrawItem> {
        let mut items: Vec<&DrawItem> = self.items.iter().collect();
        // Stable ordering is ensured by SortKey including insertion order.
        items.sort_by_key(|item| item.key);
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Rect, Vec2};
    use crate::paint::{Color, Paint};
    use crate::scene::shapes::LineCmd;

    fn line(x: f32) -> LineCmd {
        LineCmd::new(Vec2::zero(), Vec2::new(x, 0.0), 1.0, Color::black())
    }

    #[test]
    fn paint_order_respects_z_then_insertion() {
        let mut list = DrawList::new();
        list.push_line(ZIndex::HANDS, line(1.0));
        list.push_fill_ellipse(ZIndex::FACE, Rect::new(0.0, 0.0, 4.0, 4.0), Paint::solid(Color::white()));
        list.push_line(ZIndex::HANDS, line(2.0));

        let kinds: Vec<_> = list.paint_order().into_iter().map(|i| i.cmd.kind()).collect();
        assert_eq!(kinds, ["fill-ellipse", "line", "line"]);

        let shared: &DrawList = &list;
        let xs: Vec<_> = shared
            .paint_order()
            .into_iter()
            .filter_map(|i| match &i.cmd {
                DrawCmd::Line(l) => Some(l.end.x),
                _ => None,
            })
            .collect();
        assert_eq!(xs, [1.0, 2.0]);
    }

    #[test]
    fn clear_resets_order_counter() {
        let mut list = DrawList::new();
        list.push_line(ZIndex::FACE, line(1.0));
        list.clear();
        assert!(list.is_empty());
        list.push_line(ZIndex::FACE, line(1.0));
        assert_eq!(list.items()[0].key.order, 0);
    }
}

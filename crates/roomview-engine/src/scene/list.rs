use super::{DrawCmd, ZIndex};

/// A recorded command tagged with its layer.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub z: ZIndex,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// Items are recorded in whatever order the scene builder produces them and
/// replayed in paint order: by layer, then by insertion. Two items on the
/// same layer never swap, so the furniture depth order survives intact.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command on the given layer.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        self.items.push(DrawItem { z, cmd });
    }

    /// Pushes a batch of commands on one layer, preserving their order.
    pub fn extend<I>(&mut self, z: ZIndex, cmds: I)
    where
        I: IntoIterator<Item = DrawCmd>,
    {
        self.items.extend(cmds.into_iter().map(|cmd| DrawItem { z, cmd }));
    }

    /// Consumes the list, returning its items in paint order.
    ///
    /// The sort is stable, so insertion order decides within a layer.
    pub fn into_paint_order(mut self) -> Vec<DrawItem> {
        self.items.sort_by_key(|item| item.z);
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Rect, Vec2};
    use crate::paint::Rgb;
    use crate::scene::{Border, LineCmd, OvalCmd};

    fn line(x: f32) -> DrawCmd {
        DrawCmd::Line(LineCmd::new(Vec2::new(x, 0.0), Vec2::new(x, 1.0), Border::outline(1.0)))
    }

    fn xs(items: &[DrawItem]) -> Vec<f32> {
        items
            .iter()
            .map(|item| match &item.cmd {
                DrawCmd::Line(l) => l.from.x,
                _ => unreachable!(),
            })
            .collect()
    }

    #[test]
    fn paint_order_groups_by_layer_then_insertion() {
        let mut list = DrawList::new();
        list.push(ZIndex::FURNITURE, line(1.0));
        list.push(ZIndex::ROOM, line(2.0));
        list.push(ZIndex::SHADOW, line(3.0));
        list.push(ZIndex::FURNITURE, line(4.0));
        assert_eq!(xs(&list.into_paint_order()), vec![2.0, 3.0, 1.0, 4.0]);
    }

    #[test]
    fn batches_keep_their_order_within_a_layer() {
        let mut list = DrawList::new();
        list.extend(ZIndex::FURNITURE, (0..5).map(|i| line(i as f32)));
        list.push(ZIndex::SHADOW, DrawCmd::Oval(OvalCmd::new(Rect::new(0.0, 0.0, 4.0, 2.0), Rgb::BLACK, None)));
        list.extend(ZIndex::FURNITURE, [line(5.0)]);
        assert_eq!(list.len(), 7);

        let items = list.into_paint_order();
        assert!(matches!(items[0].cmd, DrawCmd::Oval(_)));
        assert_eq!(xs(&items[1..]), vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    }
}

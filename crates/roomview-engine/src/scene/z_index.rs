use core::cmp::Ordering;

/// Z-layer for draw items.
///
/// Higher values appear on top of lower values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    /// Floor, walls and the L-shape cut.
    pub const ROOM: ZIndex = ZIndex(0);
    /// Floor contact shadows.
    pub const SHADOW: ZIndex = ZIndex(10);
    /// Furniture faces, in depth-sorted insertion order.
    pub const FURNITURE: ZIndex = ZIndex(20);
}

impl Ord for ZIndex {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for ZIndex {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

//! Painter's-algorithm ordering for furniture.
//!
//! The `z` coordinate is the depth proxy: larger `z` is farther away and is
//! painted first. Equal depths keep their insertion order, so items with the
//! same `z` never trade places between frames.

use crate::model::FurnitureItem;

/// Lower bound of the perspective size cue.
pub const MIN_PERSPECTIVE: f32 = 0.5;
/// Depth at which the size cue would reach zero before clamping.
pub const PERSPECTIVE_DEPTH: f32 = 1000.0;

/// Items in back-to-front paint order.
pub fn back_to_front(items: &[FurnitureItem]) -> Vec<&FurnitureItem> {
    let mut ordered: Vec<&FurnitureItem> = items.iter().collect();
    // `sort_by` is stable.
    ordered.sort_by(|a, b| b.position.z.cmp(&a.position.z));
    ordered
}

/// Cosmetic size factor for an item at depth `z`: `max(0.5, 1 - z/1000)`.
///
/// Never used for ordering.
#[inline]
pub fn perspective_scale(z: i32) -> f32 {
    (1.0 - z as f32 / PERSPECTIVE_DEPTH).max(MIN_PERSPECTIVE)
}

use crate::coords::Rect;
use crate::paint::Paint;

use super::Border;

/// Axis-aligned rectangle payload.
///
/// `fill: None` records an outline-only rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub fill: Option<Paint>,
    pub border: Option<Border>,
}

impl RectCmd {
    #[inline]
    pub fn new(rect: Rect, fill: Option<Paint>, border: Option<Border>) -> Self {
        Self { rect, fill, border }
    }

    #[inline]
    pub fn filled(rect: Rect, paint: impl Into<Paint>, border: Option<Border>) -> Self {
        Self::new(rect, Some(paint.into()), border)
    }

    #[inline]
    pub fn stroked(rect: Rect, border: Border) -> Self {
        Self::new(rect, None, Some(border))
    }
}

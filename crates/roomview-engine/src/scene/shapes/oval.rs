use crate::coords::Rect;
use crate::paint::Paint;

use super::Border;

/// Ellipse inscribed in `bounds`.
#[derive(Debug, Clone, PartialEq)]
pub struct OvalCmd {
    pub bounds: Rect,
    pub paint: Paint,
    pub border: Option<Border>,
}

impl OvalCmd {
    #[inline]
    pub fn new(bounds: Rect, paint: impl Into<Paint>, border: Option<Border>) -> Self {
        Self { bounds, paint: paint.into(), border }
    }
}

use crate::coords::Vec2;
use crate::paint::Paint;

use super::Border;

/// Closed polygon payload. The last point connects back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCmd {
    pub points: Vec<Vec2>,
    pub paint: Paint,
    pub border: Option<Border>,
}

impl PolygonCmd {
    #[inline]
    pub fn new(points: Vec<Vec2>, paint: impl Into<Paint>, border: Option<Border>) -> Self {
        Self { points, paint: paint.into(), border }
    }
}

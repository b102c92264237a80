use crate::coords::Vec2;

use super::Border;

/// Straight stroked segment.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub stroke: Border,
}

impl LineCmd {
    #[inline]
    pub fn new(from: Vec2, to: Vec2, stroke: Border) -> Self {
        Self { from, to, stroke }
    }
}

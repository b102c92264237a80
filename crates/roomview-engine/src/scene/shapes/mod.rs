pub(crate) mod line;
pub(crate) mod oval;
pub(crate) mod polygon;
pub(crate) mod rect;

use crate::paint::Color;

/// Stroke drawn along the outline of a shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }

    /// Thin black outline used around every face.
    #[inline]
    pub fn outline(width: f32) -> Self {
        Self::new(width, Color::BLACK)
    }
}

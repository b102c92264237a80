//! Paint model shared between the scene builder and consumers.
//!
//! Scope:
//! - model colours (`Rgb`, 8-bit straight sRGB) with fixed brighten/darken steps
//! - draw colours (`Color`, premultiplied float RGBA)
//! - paint sources for fills
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod rgb;

pub use color::Color;
pub use rgb::Rgb;

/// Paint source for filling geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    /// Plain fill.
    Solid(Color),
    /// Fill composited source-over with an extra group `opacity` in `[0, 1]`.
    Blended { color: Color, opacity: f32 },
}

impl Paint {
    #[inline]
    pub fn blended(color: Color, opacity: f32) -> Self {
        Paint::Blended { color, opacity: opacity.clamp(0.0, 1.0) }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}

impl From<Rgb> for Paint {
    fn from(rgb: Rgb) -> Self {
        Paint::Solid(rgb.into())
    }
}

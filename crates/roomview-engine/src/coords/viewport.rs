use super::Vec2;

/// Drawing surface size in device-independent pixels.
///
/// The projector translates the scene origin to [`Viewport::center`].
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Surface centre, truncated to whole pixels like a raster surface reports it.
    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new((self.width / 2.0).trunc(), (self.height / 2.0).trunc())
    }
}

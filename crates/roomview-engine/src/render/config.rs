use crate::coords::Viewport;

/// Per-renderer settings. Not part of the scene and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Surface the projection centres the scene on.
    pub viewport: Viewport,
    /// Shrink far items by `max(0.5, 1 - z/1000)`. Purely cosmetic.
    pub perspective_attenuation: bool,
    /// Stroke width of face outlines, in scene units.
    pub outline_width: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(800.0, 600.0),
            perspective_attenuation: false,
            outline_width: 1.0,
        }
    }
}

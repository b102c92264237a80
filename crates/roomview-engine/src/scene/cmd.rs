use crate::scene::shapes::line::LineCmd;
use crate::scene::shapes::oval::OvalCmd;
use crate::scene::shapes::polygon::PolygonCmd;
use crate::scene::shapes::rect::RectCmd;

/// Renderer-agnostic draw command stream.
///
/// Every command is expressed in scene space; consumers apply the frame's
/// projection transform when rasterizing.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    Polygon(PolygonCmd),
    Oval(OvalCmd),
    Line(LineCmd),
}

impl DrawCmd {
    /// Returns true for filled quads and polygons (the shaded faces of a box).
    #[cfg(test)]
    pub(crate) fn is_face(&self) -> bool {
        match self {
            DrawCmd::Rect(r) => r.fill.is_some(),
            DrawCmd::Polygon(_) => true,
            DrawCmd::Oval(_) | DrawCmd::Line(_) => false,
        }
    }
}

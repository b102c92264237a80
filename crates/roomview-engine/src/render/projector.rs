//! View-to-surface projection.
//!
//! There is no camera matrix. A 3D turn of the room is faked with a fixed
//! sequence of 2D operations:
//!
//! 1. translate the origin to the surface centre
//! 2. uniform scale by `zoom`
//! 3. rotate by yaw (turntable)
//! 4. squash vertically by `cos(pitch)` and shear by `0.5 * sin(pitch)` (tilt)
//! 5. rotate by roll, only when roll is non-zero
//!
//! The order is load-bearing: the pitch squash must come after the yaw turn.

use crate::coords::{Affine2, Viewport};
use crate::view::ViewState;

/// Shear applied per unit of `sin(pitch)`.
pub const PITCH_SHEAR: f32 = 0.5;

/// One 2D operation of the projection pipeline.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ProjectionStep {
    Translate { x: f32, y: f32 },
    Scale { sx: f32, sy: f32 },
    Rotate { degrees: f32 },
    Shear { shx: f32, shy: f32 },
}

impl ProjectionStep {
    fn apply(self, m: Affine2) -> Affine2 {
        match self {
            ProjectionStep::Translate { x, y } => m.translate(x, y),
            ProjectionStep::Scale { sx, sy } => m.scale(sx, sy),
            ProjectionStep::Rotate { degrees } => m.rotate(degrees.to_radians()),
            ProjectionStep::Shear { shx, shy } => m.shear(shx, shy),
        }
    }
}

/// The ordered operations for one frame.
pub fn pipeline(view: &ViewState, viewport: Viewport) -> Vec<ProjectionStep> {
    let center = viewport.center();
    let tilt = view.rotation_x().to_radians();

    let mut steps = vec![
        ProjectionStep::Translate { x: center.x, y: center.y },
        ProjectionStep::Scale { sx: view.zoom(), sy: view.zoom() },
        ProjectionStep::Rotate { degrees: view.rotation_y() },
        ProjectionStep::Scale { sx: 1.0, sy: tilt.cos() },
        ProjectionStep::Shear { shx: 0.0, shy: PITCH_SHEAR * tilt.sin() },
    ];
    if view.rotation_z() != 0.0 {
        steps.push(ProjectionStep::Rotate { degrees: view.rotation_z() });
    }
    steps
}

/// Composes [`pipeline`] into a single scene-to-surface transform.
pub fn projection(view: &ViewState, viewport: Viewport) -> Affine2 {
    pipeline(view, viewport)
        .into_iter()
        .fold(Affine2::IDENTITY, |m, step| step.apply(m))
}

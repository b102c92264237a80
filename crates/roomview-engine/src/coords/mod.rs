//! Coordinate and geometry types shared by the scene builder and consumers.
//!
//! Canonical scene space:
//! - centimetres, origin at the room centre
//! - +X right, +Y down (plan depth grows towards the viewer)
//!
//! The per-frame [`Affine2`] produced by the projector maps scene space onto
//! the drawing surface. Draw commands are always recorded in scene space.

mod affine;
mod rect;
mod vec2;
mod viewport;

pub use affine::Affine2;
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;

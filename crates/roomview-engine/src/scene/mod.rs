//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands in scene space
//! - provide deterministic ordering (layer, then insertion order)
//! - keep each shape payload in its own file under `scene::shapes`

mod cmd;
mod list;
mod z_index;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList};
pub use shapes::Border;
pub use shapes::line::LineCmd;
pub use shapes::oval::OvalCmd;
pub use shapes::polygon::PolygonCmd;
pub use shapes::rect::RectCmd;
pub use z_index::ZIndex;

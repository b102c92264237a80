//! Pseudo-3D scene builder.
//!
//! A frame is a pure function of `(SceneSnapshot, ViewState, LightingState)`:
//!
//! 1. [`projector`] turns the view into one 2D affine transform
//! 2. [`room`] draws floor, walls and the L-shape cut
//! 3. [`shadow`] lays translucent contact shadows on the floor
//! 4. [`depth`] orders furniture back-to-front
//! 5. [`furniture`] decomposes each item into shaded boxes ([`box_faces`])
//!
//! Everything is recorded into a layered [`DrawList`](crate::scene::DrawList)
//! and flattened into paint order in the returned [`Frame`].

pub mod box_faces;
pub mod depth;
pub mod furniture;
pub mod projector;
pub mod room;
pub mod shadow;

mod config;
mod frame;

pub use config::RenderConfig;
pub use frame::{render, render_with, Frame, FrameStats};

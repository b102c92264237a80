//! Roomview engine crate.
//!
//! This crate owns the scene model and the pseudo-3D frame builder used by
//! room design front-ends. It never touches a window or a GPU: a frame is a
//! list of scene-space draw commands plus one 2D projection.

pub mod coords;
pub mod error;
pub mod lighting;
pub mod logging;
pub mod model;
pub mod paint;
pub mod render;
pub mod scene;
pub mod time;
pub mod view;

//! View state and the input that mutates it between frames.
//!
//! - [`ViewState`] holds yaw/pitch/roll and zoom and enforces their ranges
//! - [`AutoRotate`] spins the yaw on a fixed cadence driven by frame time
//! - [`ViewController`] owns both and maps [`ViewInput`] to mutations

mod auto_rotate;
mod controller;
mod state;

pub use auto_rotate::{AutoRotate, RotateDirection, AUTO_ROTATE_INTERVAL, AUTO_ROTATE_STEP_DEGREES};
pub use controller::{ViewController, ViewInput, DRAG_DEGREES_PER_PIXEL, WHEEL_ZOOM_STEP};
pub use state::{normalize_degrees, ViewState, PITCH_LIMIT, ZOOM_RANGE};

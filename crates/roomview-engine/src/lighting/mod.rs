//! Lighting model.
//!
//! A [`LightingState`] never holds an out-of-range value: every setter clamps
//! and non-finite input is refused. [`adjust`] is the only way surface colours
//! are lit.

mod adjust;
mod state;

pub use adjust::adjust;
pub use state::{LightingState, CONTRAST_RANGE, INTENSITY_RANGE};

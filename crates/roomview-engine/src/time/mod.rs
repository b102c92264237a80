//! Time subsystem.
//!
//! Provides stable, testable frame timing without coupling to a runtime.
//! Intended usage:
//! - one `FrameClock` per render loop
//! - call `tick()` once per frame and feed `FrameTime::delta` to the view
//!   controller so auto-rotation advances in whole steps
//! - tests and headless drivers use `advance()` with a fixed step instead

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};

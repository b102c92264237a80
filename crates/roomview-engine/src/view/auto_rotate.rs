use std::time::Duration;

use super::ViewState;

/// Cadence of the auto-rotation timer.
pub const AUTO_ROTATE_INTERVAL: Duration = Duration::from_millis(50);
/// Yaw added per timer tick.
pub const AUTO_ROTATE_STEP_DEGREES: f32 = 2.0;
/// Ticks in one full turn; multiples of it leave the yaw unchanged.
const TICKS_PER_TURN: u128 = (360.0 / AUTO_ROTATE_STEP_DEGREES) as u128;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum RotateDirection {
    Left,
    Right,
}

impl RotateDirection {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            RotateDirection::Left => -1.0,
            RotateDirection::Right => 1.0,
        }
    }
}

/// Fixed-cadence yaw spinner.
///
/// Frame time is accumulated and converted into whole ticks, so the spin
/// speed does not depend on the frame rate. Leftover time carries over to
/// the next frame.
#[derive(Debug, Clone)]
pub struct AutoRotate {
    direction: RotateDirection,
    carry: Duration,
}

impl AutoRotate {
    pub fn new(direction: RotateDirection) -> Self {
        Self { direction, carry: Duration::ZERO }
    }

    #[inline]
    pub fn direction(&self) -> RotateDirection {
        self.direction
    }

    /// Advances by `dt` and applies every elapsed tick to `view`.
    ///
    /// Returns the number of ticks elapsed. Any `dt` is accepted; whole turns
    /// are dropped before the yaw is touched.
    pub fn advance(&mut self, dt: Duration, view: &mut ViewState) -> u64 {
        let interval = AUTO_ROTATE_INTERVAL.as_nanos();
        let carry = self.carry.saturating_add(dt).as_nanos();
        // remainder < one interval
        self.carry = Duration::from_nanos((carry % interval) as u64);

        let ticks = carry / interval;
        if ticks > 0 {
            let partial = (ticks % TICKS_PER_TURN) as f32;
            view.rotate(self.direction.sign() * AUTO_ROTATE_STEP_DEGREES * partial, 0.0);
        }
        u64::try_from(ticks).unwrap_or(u64::MAX)
    }
}

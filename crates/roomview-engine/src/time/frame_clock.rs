use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Clamped time since the previous frame.
    pub delta: Duration,

    /// `delta` in seconds.
    pub dt: f32,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// Delta time is clamped so a stalled loop (debugger, minimized window)
/// does not release a burst of auto-rotate steps when it resumes.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Creates a new clock with default clamps of 100µs and 250ms.
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Resets the wall-clock baseline.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Advances by the wall-clock time since the previous tick.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last);
        self.last = now;
        self.step(dt)
    }

    /// Advances by an explicit `dt` without reading the wall clock.
    pub fn advance(&mut self, dt: Duration) -> FrameTime {
        self.step(dt)
    }

    fn step(&mut self, dt: Duration) -> FrameTime {
        let delta = dt.clamp(self.dt_min, self.dt_max);

        let ft = FrameTime {
            delta,
            dt: delta.as_secs_f32(),
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_counts_frames() {
        let mut clock = FrameClock::new();
        let a = clock.advance(Duration::from_millis(16));
        let b = clock.advance(Duration::from_millis(16));
        assert_eq!((a.frame_index, b.frame_index), (0, 1));
        assert_eq!(clock.frame_index(), 2);
    }

    #[test]
    fn long_stall_is_clamped() {
        let mut clock = FrameClock::new();
        let ft = clock.advance(Duration::from_secs(5));
        assert_eq!(ft.delta, Duration::from_millis(250));
    }

    #[test]
    fn zero_dt_is_raised_to_minimum() {
        let mut clock = FrameClock::with_clamps(Duration::from_millis(1), Duration::from_millis(100));
        assert_eq!(clock.advance(Duration::ZERO).delta, Duration::from_millis(1));
    }

    #[test]
    fn tick_stays_within_clamps() {
        let mut clock = FrameClock::new();
        let ft = clock.tick();
        assert!(ft.delta >= Duration::from_micros(100) && ft.delta <= Duration::from_millis(250));
    }
}

use core::ops::RangeInclusive;

/// Pitch is limited to ±90° so the floor never flips over.
pub const PITCH_LIMIT: f32 = 90.0;
pub const ZOOM_RANGE: RangeInclusive<f32> = 0.2..=3.0;

/// Wraps an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(deg: f32) -> f32 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if r >= 360.0 { 0.0 } else { r }
}

/// Camera-like view parameters for the pseudo-3D projection.
///
/// Invariants, upheld by every mutator:
/// - `rotation_x` in `[-90, 90]`
/// - `rotation_y` and `rotation_z` in `[0, 360)`
/// - `zoom` in `[0.2, 3.0]`
///
/// Angles must be finite. A NaN reaching a mutator is a caller bug; it is
/// caught by a debug assertion and otherwise ignored.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    rotation_x: f32,
    rotation_y: f32,
    rotation_z: f32,
    zoom: f32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            rotation_x: 20.0,
            rotation_y: 30.0,
            rotation_z: 0.0,
            zoom: 1.0,
        }
    }
}

impl ViewState {
    /// Builds a state from raw values, clamping/normalizing each.
    pub fn new(rotation_x: f32, rotation_y: f32, rotation_z: f32, zoom: f32) -> Self {
        let mut v = Self::default();
        v.set_rotation_x(rotation_x);
        v.set_rotation_y(rotation_y);
        v.set_rotation_z(rotation_z);
        v.set_zoom(zoom);
        v
    }

    /// Pitch in degrees.
    #[inline]
    pub fn rotation_x(&self) -> f32 {
        self.rotation_x
    }

    /// Yaw in degrees.
    #[inline]
    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    /// Roll in degrees.
    #[inline]
    pub fn rotation_z(&self) -> f32 {
        self.rotation_z
    }

    #[inline]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn set_rotation_x(&mut self, deg: f32) {
        if finite(deg) {
            self.rotation_x = deg.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }
    }

    pub fn set_rotation_y(&mut self, deg: f32) {
        if finite(deg) {
            self.rotation_y = normalize_degrees(deg);
        }
    }

    pub fn set_rotation_z(&mut self, deg: f32) {
        if finite(deg) {
            self.rotation_z = normalize_degrees(deg);
        }
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        if finite(zoom) {
            self.zoom = zoom.clamp(*ZOOM_RANGE.start(), *ZOOM_RANGE.end());
        }
    }

    /// Adds `dx` degrees of yaw and `dy` degrees of pitch.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.set_rotation_y(self.rotation_y + dx);
        self.set_rotation_x(self.rotation_x + dy);
    }

    /// Adds `dx` degrees of roll.
    pub fn rotate_roll(&mut self, dx: f32) {
        self.set_rotation_z(self.rotation_z + dx);
    }

    /// Adds `delta` to the zoom factor.
    pub fn zoom_by(&mut self, delta: f32) {
        self.set_zoom(self.zoom + delta);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn finite(v: f32) -> bool {
    debug_assert!(v.is_finite(), "non-finite view value {v}");
    v.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── yaw ───────────────────────────────────────────────────────────────

    #[test]
    fn normalize_stays_in_range_for_any_input() {
        for deg in [-1e-7, -720.5, -360.0, -0.0, 0.0, 359.999, 360.0, 1e6, 12345.25] {
            let n = normalize_degrees(deg);
            assert!((0.0..360.0).contains(&n), "{deg} -> {n}");
            assert_eq!(normalize_degrees(n), n);
        }
    }

    #[test]
    fn yaw_rotation_is_periodic() {
        for k in [-3.0f32, -1.0, 1.0, 4.0] {
            let mut a = ViewState::default();
            let mut b = ViewState::default();
            a.rotate(47.0, 0.0);
            b.rotate(47.0 + 360.0 * k, 0.0);
            assert!((a.rotation_y() - b.rotation_y()).abs() < 1e-3);
        }
    }

    // ── pitch ─────────────────────────────────────────────────────────────

    #[test]
    fn pitch_is_clamped_whatever_the_drag_magnitude() {
        let mut v = ViewState::default();
        for _ in 0..100 {
            v.rotate(0.0, 1e4);
        }
        assert_eq!(v.rotation_x(), 90.0);
        v.rotate(0.0, -1e9);
        assert_eq!(v.rotation_x(), -90.0);
    }

    // ── zoom ──────────────────────────────────────────────────────────────

    #[test]
    fn zoom_is_clamped() {
        let mut v = ViewState::default();
        v.zoom_by(100.0);
        assert_eq!(v.zoom(), 3.0);
        v.zoom_by(-100.0);
        assert_eq!(v.zoom(), 0.2);
    }

    // ── construction / reset ──────────────────────────────────────────────

    #[test]
    fn new_sanitizes_each_component() {
        let v = ViewState::new(120.0, -30.0, 370.0, 9.0);
        assert_eq!(v.rotation_x(), 90.0);
        assert_eq!(v.rotation_y(), 330.0);
        assert_eq!(v.rotation_z(), 10.0);
        assert_eq!(v.zoom(), 3.0);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut v = ViewState::new(-45.0, 200.0, 15.0, 2.0);
        v.reset();
        assert_eq!(v, ViewState::default());
    }
}

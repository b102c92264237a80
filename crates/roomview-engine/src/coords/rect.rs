use super::Vec2;

/// Axis-aligned rectangle in scene units (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Rectangle from integer scene coordinates.
    #[inline]
    pub fn from_i32(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self::new(x as f32, y as f32, w as f32, h as f32)
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(
            self.origin.x + self.size.x / 2.0,
            self.origin.y + self.size.y / 2.0,
        )
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn from_i32_matches_float_constructor() {
        assert_eq!(Rect::from_i32(-250, -200, 500, 400), Rect::new(-250.0, -200.0, 500.0, 400.0));
    }

    #[test]
    fn center_of_room_floor_is_origin() {
        let floor = Rect::from_i32(-250, -200, 500, 400);
        assert_eq!(floor.center(), Vec2::zero());
    }

    #[test]
    fn max_is_far_corner() {
        assert_eq!(Rect::new(-5.0, 2.0, 10.0, 4.0).max(), Vec2::new(5.0, 6.0));
    }

    #[test]
    fn nan_origin_is_not_finite() {
        assert!(!Rect::new(f32::NAN, 0.0, 1.0, 1.0).is_finite());
    }
}

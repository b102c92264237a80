use super::Vec2;

/// 2D affine transform.
///
/// Layout follows the usual column convention:
///
/// ```text
/// | a  c  tx |
/// | b  d  ty |
/// | 0  0   1 |
/// ```
///
/// The builder methods (`translate`, `scale`, `rotate`, `shear`) concatenate
/// on the right, so the operation added last is the first one applied to a
/// point. Building `IDENTITY.translate(..).scale(..)` therefore scales a point
/// and then translates it, which is how raster surfaces stack transforms.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Affine2 {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Default for Affine2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine2 {
    pub const IDENTITY: Affine2 = Affine2 { a: 1.0, b: 0.0, c: 0.0, d: 1.0, tx: 0.0, ty: 0.0 };

    #[inline]
    pub const fn new(a: f32, b: f32, c: f32, d: f32, tx: f32, ty: f32) -> Self {
        Self { a, b, c, d, tx, ty }
    }

    #[inline]
    pub const fn translation(x: f32, y: f32) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, x, y)
    }

    #[inline]
    pub const fn scaling(sx: f32, sy: f32) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Rotation by `radians`; positive angles turn +X towards +Y.
    #[inline]
    pub fn rotation(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        Self::new(c, s, -s, c, 0.0, 0.0)
    }

    /// Shear: `x' = x + shx * y`, `y' = shy * x + y`.
    #[inline]
    pub const fn shearing(shx: f32, shy: f32) -> Self {
        Self::new(1.0, shy, shx, 1.0, 0.0, 0.0)
    }

    /// Returns `self * other`: `other` is applied to points first.
    pub fn concat(&self, other: &Affine2) -> Affine2 {
        Affine2 {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            tx: self.a * other.tx + self.c * other.ty + self.tx,
            ty: self.b * other.tx + self.d * other.ty + self.ty,
        }
    }

    #[inline]
    pub fn translate(self, x: f32, y: f32) -> Self {
        self.concat(&Self::translation(x, y))
    }

    #[inline]
    pub fn scale(self, sx: f32, sy: f32) -> Self {
        self.concat(&Self::scaling(sx, sy))
    }

    #[inline]
    pub fn rotate(self, radians: f32) -> Self {
        self.concat(&Self::rotation(radians))
    }

    #[inline]
    pub fn shear(self, shx: f32, shy: f32) -> Self {
        self.concat(&Self::shearing(shx, shy))
    }

    #[inline]
    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.a * p.x + self.c * p.y + self.tx,
            self.b * p.x + self.d * p.y + self.ty,
        )
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        [self.a, self.b, self.c, self.d, self.tx, self.ty].iter().all(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    #[test]
    fn last_added_operation_applies_first() {
        // scale then translate
        let m = Affine2::IDENTITY.translate(10.0, 0.0).scale(2.0, 2.0);
        assert!(close(m.transform_point(Vec2::new(1.0, 1.0)), Vec2::new(12.0, 2.0)));
    }

    #[test]
    fn quarter_turn_maps_x_axis_onto_y_axis() {
        let m = Affine2::rotation(core::f32::consts::FRAC_PI_2);
        assert!(close(m.transform_point(Vec2::new(1.0, 0.0)), Vec2::new(0.0, 1.0)));
    }

    #[test]
    fn vertical_shear_moves_y_by_x() {
        let m = Affine2::shearing(0.0, 0.5);
        assert!(close(m.transform_point(Vec2::new(4.0, 1.0)), Vec2::new(4.0, 3.0)));
    }
}

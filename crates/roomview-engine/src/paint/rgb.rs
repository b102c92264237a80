use super::Color;

/// Brighten/darken step shared by every shaded face.
const SHADE_FACTOR: f64 = 0.7;

/// Opaque 8-bit sRGB colour as stored in the scene model.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const LIGHT_GRAY: Rgb = Rgb::new(192, 192, 192);
    pub const DARK_GRAY: Rgb = Rgb::new(64, 64, 64);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a colour from normalized channels, rounding to the nearest byte.
    ///
    /// Channels outside `[0, 1]` are clamped.
    #[inline]
    pub fn from_unit(r: f32, g: f32, b: f32) -> Self {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8;
        Self::new(q(r), q(g), q(b))
    }

    /// Normalized `[0, 1]` channels.
    #[inline]
    pub fn to_unit(self) -> [f32; 3] {
        [self.r as f32 / 255.0, self.g as f32 / 255.0, self.b as f32 / 255.0]
    }

    /// Moves every channel towards 255 by the fixed shade step.
    ///
    /// Near-black channels are lifted to a small floor first so that black
    /// still brightens to a visible grey.
    pub fn brighter(self) -> Self {
        let floor = (1.0 / (1.0 - SHADE_FACTOR)) as i32;
        let (mut r, mut g, mut b) = (self.r as i32, self.g as i32, self.b as i32);

        if r == 0 && g == 0 && b == 0 {
            return Self::new(floor as u8, floor as u8, floor as u8);
        }
        for c in [&mut r, &mut g, &mut b] {
            if *c > 0 && *c < floor {
                *c = floor;
            }
        }

        let up = |c: i32| ((c as f64 / SHADE_FACTOR) as i32).min(255) as u8;
        Self::new(up(r), up(g), up(b))
    }

    /// Moves every channel towards 0 by the fixed shade step.
    pub fn darker(self) -> Self {
        let down = |c: u8| (c as f64 * SHADE_FACTOR) as u8;
        Self::new(down(self.r), down(self.g), down(self.b))
    }

    /// Draw colour with the given straight alpha in `[0, 1]`.
    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Color {
        let [r, g, b] = self.to_unit();
        Color::from_straight(r, g, b, alpha)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        rgb.with_alpha(1.0)
    }
}

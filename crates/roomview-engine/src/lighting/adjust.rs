use crate::paint::Rgb;

use super::LightingState;

/// Lights a surface colour.
///
/// Each channel is multiplied by the ambient channel and the light intensity,
/// then stretched around mid-grey by the contrast, then clamped:
///
/// ```text
/// c'  = c * ambient * intensity
/// c'' = 0.5 + (c' - 0.5) * contrast
/// ```
///
/// Multiply comes strictly before contrast.
pub fn adjust(color: Rgb, lighting: &LightingState) -> Rgb {
    let c = color.to_unit();
    let a = lighting.ambient_color().to_unit();
    let intensity = lighting.light_intensity();
    let contrast = lighting.contrast();

    let ch = |i: usize| {
        let lit = c[i] * a[i] * intensity;
        (0.5 + (lit - 0.5) * contrast).clamp(0.0, 1.0)
    };
    Rgb::from_unit(ch(0), ch(1), ch(2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_lighting_leaves_every_colour_unchanged() {
        let id = LightingState::identity();
        for r in (0..=255u16).step_by(17) {
            for g in [0u8, 1, 128, 200, 255] {
                let c = Rgb::new(r as u8, g, 255 - g);
                assert_eq!(adjust(c, &id), c);
            }
        }
    }

    #[test]
    fn zero_intensity_collapses_towards_contrast_floor() {
        let mut l = LightingState::identity();
        l.set_light_intensity(0.0);
        assert_eq!(adjust(Rgb::WHITE, &l), Rgb::BLACK);

        l.set_contrast(0.5);
        // 0.5 + (0 - 0.5) * 0.5 = 0.25
        assert_eq!(adjust(Rgb::WHITE, &l), Rgb::new(64, 64, 64));
    }

    #[test]
    fn multiply_happens_before_contrast() {
        let mut l = LightingState::identity();
        l.set_light_intensity(0.5);
        l.set_contrast(1.5);
        // white * 0.5 = 0.5, contrast around 0.5 leaves it at 0.5
        assert_eq!(adjust(Rgb::WHITE, &l), Rgb::new(128, 128, 128));
    }

    #[test]
    fn ambient_tint_scales_each_channel() {
        let mut l = LightingState::identity();
        l.set_ambient_color(Rgb::new(255, 0, 255));
        assert_eq!(adjust(Rgb::new(100, 100, 100), &l), Rgb::new(100, 0, 100));
    }

    #[test]
    fn high_contrast_clamps() {
        let mut l = LightingState::identity();
        l.set_contrast(1.5);
        assert_eq!(adjust(Rgb::WHITE, &l), Rgb::WHITE);
        assert_eq!(adjust(Rgb::BLACK, &l), Rgb::BLACK);
    }
}

use core::ops::RangeInclusive;

use crate::paint::Rgb;

pub const INTENSITY_RANGE: RangeInclusive<f32> = 0.0..=1.0;
pub const CONTRAST_RANGE: RangeInclusive<f32> = 0.5..=1.5;

/// Ambient light, shadow strength and contrast applied to every lit surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LightingState {
    light_intensity: f32,
    shadow_intensity: f32,
    contrast: f32,
    ambient_color: Rgb,
}

impl Default for LightingState {
    /// Warm ambient light at 80%.
    fn default() -> Self {
        Self {
            light_intensity: 0.8,
            shadow_intensity: 0.5,
            contrast: 1.0,
            ambient_color: Rgb::new(255, 255, 220),
        }
    }
}

impl LightingState {
    /// Full white light at unit contrast; [`adjust`](super::adjust) is the
    /// identity under this state.
    pub fn identity() -> Self {
        Self {
            light_intensity: 1.0,
            shadow_intensity: 0.0,
            contrast: 1.0,
            ambient_color: Rgb::WHITE,
        }
    }

    #[inline]
    pub fn light_intensity(&self) -> f32 {
        self.light_intensity
    }

    #[inline]
    pub fn shadow_intensity(&self) -> f32 {
        self.shadow_intensity
    }

    #[inline]
    pub fn contrast(&self) -> f32 {
        self.contrast
    }

    #[inline]
    pub fn ambient_color(&self) -> Rgb {
        self.ambient_color
    }

    /// Returns `false` and keeps the previous value for non-finite input.
    pub fn set_light_intensity(&mut self, v: f32) -> bool {
        clamp_into(&mut self.light_intensity, v, INTENSITY_RANGE)
    }

    /// Returns `false` and keeps the previous value for non-finite input.
    pub fn set_shadow_intensity(&mut self, v: f32) -> bool {
        clamp_into(&mut self.shadow_intensity, v, INTENSITY_RANGE)
    }

    /// Returns `false` and keeps the previous value for non-finite input.
    pub fn set_contrast(&mut self, v: f32) -> bool {
        clamp_into(&mut self.contrast, v, CONTRAST_RANGE)
    }

    pub fn set_ambient_color(&mut self, color: Rgb) {
        self.ambient_color = color;
    }
}

fn clamp_into(slot: &mut f32, v: f32, range: RangeInclusive<f32>) -> bool {
    if !v.is_finite() {
        log::warn!("ignoring non-finite lighting value {v}");
        return false;
    }
    *slot = v.clamp(*range.start(), *range.end());
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_clamp_to_documented_ranges() {
        let mut l = LightingState::default();
        l.set_light_intensity(1.7);
        l.set_shadow_intensity(-0.3);
        l.set_contrast(9.0);
        assert_eq!(l.light_intensity(), 1.0);
        assert_eq!(l.shadow_intensity(), 0.0);
        assert_eq!(l.contrast(), 1.5);

        l.set_contrast(0.1);
        assert_eq!(l.contrast(), 0.5);
    }

    #[test]
    fn nan_is_refused_and_previous_value_kept() {
        let mut l = LightingState::default();
        assert!(!l.set_light_intensity(f32::NAN));
        assert!(!l.set_contrast(f32::INFINITY));
        assert_eq!(l.light_intensity(), 0.8);
        assert_eq!(l.contrast(), 1.0);
    }
}

use std::time::Duration;

use super::{AutoRotate, RotateDirection, ViewState};

/// Degrees of rotation per pixel of pointer drag.
pub const DRAG_DEGREES_PER_PIXEL: f32 = 0.5;
/// Zoom change per wheel click; scrolling towards the user zooms out.
pub const WHEEL_ZOOM_STEP: f32 = 0.1;

/// Platform-agnostic view input, translated by the host UI.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewInput {
    /// Pointer dragged by `(dx, dy)` pixels since the last event.
    Drag { dx: f32, dy: f32 },
    /// Roll modifier (shift) pressed or released.
    RollModifier(bool),
    /// Wheel moved by `clicks` notches; positive scrolls towards the user.
    Wheel { clicks: f32 },
    /// Reset key or button.
    Reset,
    StartAutoRotate(RotateDirection),
    StopAutoRotate,
}

/// Owns the [`ViewState`] and the optional auto-rotation timer.
///
/// Every mutator goes through here so only one writer ever touches the view,
/// and at most one spinner is running at a time.
#[derive(Debug, Clone, Default)]
pub struct ViewController {
    view: ViewState,
    auto_rotate: Option<AutoRotate>,
    roll_modifier: bool,
}

impl ViewController {
    pub fn new(view: ViewState) -> Self {
        Self { view, auto_rotate: None, roll_modifier: false }
    }

    #[inline]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[inline]
    pub fn is_auto_rotating(&self) -> bool {
        self.auto_rotate.is_some()
    }

    /// Yaw by `dx` and pitch by `dy`, in degrees.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.view.rotate(dx, dy);
        log::trace!("view rotate ({dx}, {dy}) -> {:?}", self.view);
    }

    /// Roll by `dx` degrees.
    pub fn rotate_roll(&mut self, dx: f32) {
        self.view.rotate_roll(dx);
        log::trace!("view roll {dx} -> {}", self.view.rotation_z());
    }

    pub fn zoom(&mut self, delta: f32) {
        self.view.zoom_by(delta);
        log::trace!("view zoom {delta} -> {}", self.view.zoom());
    }

    pub fn reset_view(&mut self) {
        self.view.reset();
        log::debug!("view reset");
    }

    /// Starts spinning, cancelling any spinner already running.
    pub fn start_auto_rotate(&mut self, direction: RotateDirection) {
        if self.auto_rotate.take().is_some() {
            log::debug!("auto-rotate restarted");
        }
        self.auto_rotate = Some(AutoRotate::new(direction));
    }

    /// Returns `true` if a spinner was running.
    pub fn stop_auto_rotate(&mut self) -> bool {
        self.auto_rotate.take().is_some()
    }

    /// Advances the auto-rotation timer. Returns `true` if the view changed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        match self.auto_rotate.as_mut() {
            Some(spin) => spin.advance(dt, &mut self.view) > 0,
            None => false,
        }
    }

    /// Applies one input event. Returns `true` if the view changed and a
    /// repaint is needed.
    pub fn apply(&mut self, input: ViewInput) -> bool {
        let before = self.view;
        match input {
            ViewInput::Drag { dx, dy } => {
                if self.roll_modifier {
                    self.rotate_roll(dx * DRAG_DEGREES_PER_PIXEL);
                } else {
                    self.rotate(dx * DRAG_DEGREES_PER_PIXEL, dy * DRAG_DEGREES_PER_PIXEL);
                }
            }
            ViewInput::RollModifier(down) => self.roll_modifier = down,
            ViewInput::Wheel { clicks } => self.zoom(-WHEEL_ZOOM_STEP * clicks),
            ViewInput::Reset => self.reset_view(),
            ViewInput::StartAutoRotate(direction) => self.start_auto_rotate(direction),
            ViewInput::StopAutoRotate => {
                self.stop_auto_rotate();
            }
        }
        self.view != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::AUTO_ROTATE_INTERVAL;

    #[test]
    fn drag_rotates_half_a_degree_per_pixel() {
        let mut c = ViewController::default();
        assert!(c.apply(ViewInput::Drag { dx: 10.0, dy: -4.0 }));
        assert_eq!(c.view().rotation_y(), 35.0);
        assert_eq!(c.view().rotation_x(), 18.0);
    }

    #[test]
    fn drag_with_roll_modifier_only_rolls() {
        let mut c = ViewController::default();
        c.apply(ViewInput::RollModifier(true));
        c.apply(ViewInput::Drag { dx: 20.0, dy: 50.0 });
        assert_eq!(c.view().rotation_z(), 10.0);
        assert_eq!(c.view().rotation_x(), 20.0);
        assert_eq!(c.view().rotation_y(), 30.0);
    }

    #[test]
    fn wheel_towards_user_zooms_out() {
        let mut c = ViewController::default();
        c.apply(ViewInput::Wheel { clicks: 2.0 });
        assert!((c.view().zoom() - 0.8).abs() < 1e-6);
    }

    #[test]
    fn starting_a_spinner_replaces_the_running_one() {
        let mut c = ViewController::default();
        c.start_auto_rotate(RotateDirection::Right);
        c.start_auto_rotate(RotateDirection::Left);
        c.tick(AUTO_ROTATE_INTERVAL);
        // only the left spinner contributed
        assert_eq!(c.view().rotation_y(), 28.0);
    }

    #[test]
    fn stopped_spinner_no_longer_moves_view() {
        let mut c = ViewController::default();
        c.apply(ViewInput::StartAutoRotate(RotateDirection::Right));
        assert!(c.tick(AUTO_ROTATE_INTERVAL * 3));
        assert_eq!(c.view().rotation_y(), 36.0);
        c.apply(ViewInput::StopAutoRotate);
        assert!(!c.is_auto_rotating());
        assert!(!c.tick(AUTO_ROTATE_INTERVAL * 3));
        assert_eq!(c.view().rotation_y(), 36.0);
    }

    #[test]
    fn decade_long_tick_returns_promptly() {
        let mut c = ViewController::default();
        c.start_auto_rotate(RotateDirection::Right);
        assert!(c.tick(Duration::from_secs(315_360_000) + AUTO_ROTATE_INTERVAL));
        assert_eq!(c.view().rotation_y(), 32.0);
    }

    #[test]
    fn reset_keeps_spinner_running() {
        let mut c = ViewController::default();
        c.start_auto_rotate(RotateDirection::Right);
        c.apply(ViewInput::Drag { dx: 40.0, dy: 0.0 });
        c.apply(ViewInput::Reset);
        assert_eq!(*c.view(), ViewState::default());
        assert!(c.is_auto_rotating());
    }
}

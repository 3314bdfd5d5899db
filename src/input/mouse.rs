use glam::Vec2;

use super::event::MouseButton;

/// Movement (in pixels) above which a press counts as a drag.
const DRAG_THRESHOLD: f32 = 1.0;

/// Tracks pointer position and which buttons are held.
#[derive(Debug, Clone, Default)]
pub(crate) struct DragState {
    pub(crate) last_pos: Option<Vec2>,
    pub(crate) left_pressed: bool,
    pub(crate) right_pressed: bool,
    pub(crate) is_dragging: bool,
}

impl DragState {
    /// Record a new pointer position and return the movement since the
    /// previous one (zero for the first sample).
    pub(crate) fn handle_position(&mut self, x: f32, y: f32) -> Vec2 {
        let pos = Vec2::new(x, y);
        let delta = self.last_pos.map_or(Vec2::ZERO, |last| pos - last);
        self.last_pos = Some(pos);
        if self.any_pressed() && delta.length_squared() > DRAG_THRESHOLD {
            self.is_dragging = true;
        }
        delta
    }

    /// Record a button transition.
    pub(crate) fn handle_button(&mut self, button: MouseButton, pressed: bool) {
        match button {
            MouseButton::Left => self.left_pressed = pressed,
            MouseButton::Right => self.right_pressed = pressed,
            MouseButton::Middle => {}
        }
        if !self.any_pressed() {
            self.is_dragging = false;
        }
    }

    /// Forget the last position, so re-entry does not produce a jump.
    pub(crate) fn leave(&mut self) {
        self.last_pos = None;
    }

    /// Release all buttons without a click.
    pub(crate) fn release_all(&mut self) {
        self.left_pressed = false;
        self.right_pressed = false;
        self.is_dragging = false;
    }

    pub(crate) fn any_pressed(&self) -> bool {
        self.left_pressed || self.right_pressed
    }
}

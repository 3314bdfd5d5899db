//! Converts raw platform events into engine commands.
//!
//! The `InputProcessor` owns all transient gesture state (pointer
//! tracking, drag detection, modifier keys) and the key-binding map. It
//! sits between raw window events and the engine's
//! [`execute`](crate::WalkthroughEngine::execute) method.

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use super::mouse::DragState;
use crate::engine::command::WalkCommand;
use crate::options::KeybindingOptions;

/// Converts raw window events into [`WalkCommand`]s.
///
/// Left-drag orbits, shift+left-drag or right-drag pans, the wheel zooms,
/// and bound keys fly to a viewpoint.
///
/// # Usage
///
/// ```ignore
/// if let Some(cmd) = input_processor.handle_event(&event) {
///     engine.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Pointer position and held buttons.
    state: DragState,
    /// Whether the shift modifier is currently held.
    shift_pressed: bool,
    /// Key string → viewpoint mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            key_bindings,
            ..Self::new()
        }
    }

    /// Last known pointer position, if the pointer is over the surface.
    #[must_use]
    pub fn mouse_pos(&self) -> Option<Vec2> {
        self.state.last_pos
    }

    /// Whether a button that drives camera gestures is held.
    #[must_use]
    pub fn mouse_pressed(&self) -> bool {
        self.state.any_pressed()
    }

    /// Whether the current press has moved far enough to count as a drag.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging
    }

    /// Whether the shift modifier is held.
    #[must_use]
    pub fn shift_pressed(&self) -> bool {
        self.shift_pressed
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Release held buttons without finishing a gesture.
    ///
    /// Used when a fly-to starts mid-drag so the drag does not resume
    /// once input is re-enabled.
    pub fn release_mouse_state(&mut self) {
        self.state.release_all();
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<WalkCommand> {
        self.key_bindings.lookup(key).map(|name| WalkCommand::FlyTo {
            name: name.to_owned(),
        })
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: &InputEvent) -> Option<WalkCommand> {
        match *event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                self.state.handle_button(button, pressed);
                None
            }
            InputEvent::Scroll { delta } => Some(WalkCommand::Zoom { delta }),
            InputEvent::ModifiersChanged { shift } => {
                self.shift_pressed = shift;
                None
            }
            InputEvent::KeyPressed { ref key } => self.handle_key_press(key),
            InputEvent::CursorLeft => {
                self.state.leave();
                None
            }
        }
    }

    /// Cursor moved: compute delta, possibly produce a camera command.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<WalkCommand> {
        let delta = self.state.handle_position(x, y);
        if delta == Vec2::ZERO {
            return None;
        }
        if self.state.right_pressed
            || (self.state.left_pressed && self.shift_pressed)
        {
            return Some(WalkCommand::PanCamera { delta });
        }
        if self.state.left_pressed {
            return Some(WalkCommand::RotateCamera { delta });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::CursorMoved { x, y }
    }

    fn button(button: MouseButton, pressed: bool) -> InputEvent {
        InputEvent::MouseButton { button, pressed }
    }

    #[test]
    fn hover_move_produces_nothing() {
        let mut input = InputProcessor::new();
        assert_eq!(input.handle_event(&moved(10.0, 10.0)), None);
        assert_eq!(input.handle_event(&moved(20.0, 10.0)), None);
    }

    #[test]
    fn left_drag_rotates() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(&moved(10.0, 10.0));
        let _ = input.handle_event(&button(MouseButton::Left, true));
        assert_eq!(
            input.handle_event(&moved(14.0, 7.0)),
            Some(WalkCommand::RotateCamera {
                delta: Vec2::new(4.0, -3.0)
            })
        );
        assert!(input.is_dragging());
    }

    #[test]
    fn shift_or_right_drag_pans() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(&moved(0.0, 0.0));
        let _ = input.handle_event(&button(MouseButton::Right, true));
        assert!(matches!(
            input.handle_event(&moved(2.0, 0.0)),
            Some(WalkCommand::PanCamera { .. })
        ));
        let _ = input.handle_event(&button(MouseButton::Right, false));

        let _ = input.handle_event(&InputEvent::ModifiersChanged { shift: true });
        let _ = input.handle_event(&button(MouseButton::Left, true));
        assert!(matches!(
            input.handle_event(&moved(4.0, 0.0)),
            Some(WalkCommand::PanCamera { .. })
        ));
    }

    #[test]
    fn scroll_zooms() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_event(&InputEvent::Scroll { delta: 1.5 }),
            Some(WalkCommand::Zoom { delta: 1.5 })
        );
    }

    #[test]
    fn bound_key_flies_to_viewpoint() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_event(&InputEvent::KeyPressed {
                key: "Digit2".into()
            }),
            Some(WalkCommand::FlyTo {
                name: "social".into()
            })
        );
        assert_eq!(input.handle_key_press("KeyZ"), None);
    }

    #[test]
    fn released_state_stops_drag() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(&moved(0.0, 0.0));
        let _ = input.handle_event(&button(MouseButton::Left, true));
        input.release_mouse_state();
        assert_eq!(input.handle_event(&moved(5.0, 5.0)), None);
        assert!(!input.mouse_pressed());
    }
}

//! Input methods for [`WalkthroughEngine`].

use super::WalkthroughEngine;
use crate::input::{InputEvent, MouseButton};
use crate::picking::PointerEvent;

// ── Unified input handler ──

impl WalkthroughEngine {
    /// Process a platform-agnostic input event.
    ///
    /// This is the primary input entry point. Consumers forward raw window
    /// events as [`InputEvent`] variants; the engine dispatches to hover
    /// tracking, click-to-open, and camera gestures. Hover and click work
    /// during a fly-to; gestures do not.
    ///
    /// Returns `true` if the event opened a link.
    ///
    /// # Example
    ///
    /// ```ignore
    /// engine.handle_input(InputEvent::CursorMoved { x, y });
    /// engine.handle_input(InputEvent::Scroll { delta: 1.0 });
    /// ```
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::CursorMoved { x, y } => {
                let _ = self.pointer_move(PointerEvent {
                    client_x: x,
                    client_y: y,
                });
            }
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed: true,
            } => {
                // A click on a link is not the start of a drag
                if self.pointer_down() {
                    return true;
                }
            }
            InputEvent::CursorLeft => {
                let _ = self.pointer.on_pointer_leave();
            }
            _ => {}
        }

        if let Some(cmd) = self.input.handle_event(&event) {
            self.execute(cmd);
        }
        false
    }

    /// Look up a physical key string and run its bound command.
    ///
    /// Returns `true` if the key was bound.
    pub fn handle_key_press(&mut self, key: &str) -> bool {
        match self.input.handle_key_press(key) {
            Some(cmd) => {
                self.execute(cmd);
                true
            }
            None => false,
        }
    }

    /// Release held mouse buttons without finishing a gesture.
    pub fn release_mouse_state(&mut self) {
        self.input.release_mouse_state();
    }
}

#[cfg(test)]
mod tests {
    use glam::{Mat4, Vec3};

    use super::*;
    use crate::options::Options;
    use crate::picking::{CursorIcon, LinkOpener};
    use crate::scene::{Aabb, Scene};

    #[derive(Default)]
    struct Opened(std::rc::Rc<std::cell::RefCell<Vec<String>>>);

    impl LinkOpener for Opened {
        fn open(&mut self, url: &str) {
            self.0.borrow_mut().push(url.to_owned());
        }
    }

    fn engine_with_sign() -> (WalkthroughEngine, Opened) {
        let mut scene = Scene::new();
        let frame = scene.add_group("frame", None, Mat4::IDENTITY);
        let _ = scene.add_box(
            "canvas",
            Some(frame),
            Mat4::IDENTITY,
            Aabb::from_half_extents(Vec3::splat(1.0)),
        );
        scene.set_link(frame, "https://example.org/gallery");
        let opened = Opened::default();
        let engine =
            WalkthroughEngine::new(Options::default(), scene, (800, 600))
                .with_link_opener(Opened(opened.0.clone()));
        (engine, opened)
    }

    fn at_center() -> InputEvent {
        InputEvent::CursorMoved { x: 400.0, y: 300.0 }
    }

    fn left(pressed: bool) -> InputEvent {
        InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed,
        }
    }

    #[test]
    fn click_on_hovered_node_opens_link() {
        let (mut engine, opened) = engine_with_sign();
        let _ = engine.handle_input(at_center());
        assert_eq!(engine.cursor(), CursorIcon::Pointer);

        assert!(engine.handle_input(left(true)));
        let _ = engine.handle_input(left(false));
        assert_eq!(*opened.0.borrow(), ["https://example.org/gallery"]);
    }

    #[test]
    fn click_works_during_fly_to() {
        let (mut engine, opened) = engine_with_sign();
        let _ = engine.handle_input(at_center());
        assert!(engine.handle_key_press("Digit3"));
        assert!(engine.input_suppressed());

        assert!(engine.handle_input(left(true)));
        assert_eq!(opened.0.borrow().len(), 1);
    }

    #[test]
    fn cursor_leaving_clears_hover() {
        let (mut engine, _) = engine_with_sign();
        let _ = engine.handle_input(at_center());
        assert!(engine.hovered().is_some());
        let _ = engine.handle_input(InputEvent::CursorLeft);
        assert!(engine.hovered().is_none());
        assert_eq!(engine.cursor(), CursorIcon::Default);
    }

    #[test]
    fn drag_on_background_queues_orbit() {
        let (mut engine, opened) = engine_with_sign();
        let _ = engine.handle_input(InputEvent::CursorMoved { x: 5.0, y: 5.0 });
        assert!(!engine.handle_input(left(true)));
        let _ = engine.handle_input(InputEvent::CursorMoved { x: 45.0, y: 5.0 });
        assert!(engine.controls().is_moving());
        assert!(opened.0.borrow().is_empty());
    }

    #[test]
    fn drag_is_ignored_during_fly_to() {
        let (mut engine, _) = engine_with_sign();
        assert!(engine.handle_key_press("KeyH"));
        let _ = engine.handle_input(InputEvent::CursorMoved { x: 5.0, y: 5.0 });
        let _ = engine.handle_input(left(true));
        let _ = engine.handle_input(InputEvent::CursorMoved { x: 45.0, y: 5.0 });
        let _ = engine.handle_input(InputEvent::Scroll { delta: 2.0 });
        assert!(!engine.controls().is_moving());
    }

    #[test]
    fn unbound_key_is_ignored() {
        let (mut engine, _) = engine_with_sign();
        assert!(!engine.handle_key_press("KeyQ"));
        assert!(!engine.input_suppressed());
    }
}

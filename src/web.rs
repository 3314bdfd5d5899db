//! Browser host: a `wasm-bindgen` wrapper around [`WalkthroughEngine`].
//!
//! The page owns the canvas, the render loop and the DOM listeners, and
//! forwards them here:
//!
//! ```js
//! const walk = new WebWalkthrough(canvas, "");
//! canvas.addEventListener("pointermove", e => walk.pointer_move(e.clientX, e.clientY));
//! canvas.addEventListener("pointerdown", e => walk.pointer_down(e.button));
//! document.querySelector("#social").onclick = () => walk.fly_to("social");
//! (function loop() { render(walk.frame()); requestAnimationFrame(loop); })();
//! ```

use glam::{Mat4, Vec3};
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;
use web_time::Instant;

use crate::options::Options;
use crate::picking::{LinkOpener, SurfaceRect};
use crate::scene::{Aabb, Scene};
use crate::{InputEvent, MouseButton, WalkthroughEngine};

/// Install the panic hook and route `log` output to the browser console.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Opens links in a new browsing context with `window.open`.
#[derive(Debug, Clone, Copy, Default)]
struct WindowLinkOpener;

impl LinkOpener for WindowLinkOpener {
    fn open(&mut self, url: &str) {
        let Some(window) = web_sys::window() else {
            log::error!("no window to open {url} in");
            return;
        };
        if let Err(e) = window.open_with_url_and_target(url, "_blank") {
            log::error!("window.open({url}) failed: {e:?}");
        }
    }
}

fn vec3(values: &[f32], what: &str) -> Result<Vec3, JsValue> {
    match *values {
        [x, y, z] => Ok(Vec3::new(x, y, z)),
        _ => Err(JsValue::from_str(&format!(
            "{what} needs 3 components, got {}",
            values.len()
        ))),
    }
}

/// Walkthrough engine bound to a canvas element.
#[wasm_bindgen]
pub struct WebWalkthrough {
    engine: WalkthroughEngine,
    canvas: HtmlCanvasElement,
}

#[wasm_bindgen]
impl WebWalkthrough {
    /// Create the engine for `canvas`. `options_json` is an `Options`
    /// document in JSON; pass an empty string for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        options_json: &str,
    ) -> Result<Self, JsValue> {
        let options = if options_json.trim().is_empty() {
            Options::default()
        } else {
            Options::from_json(options_json)
                .map_err(|e| JsValue::from_str(&e.to_string()))?
        };
        let engine = WalkthroughEngine::new(
            options,
            Scene::new(),
            (canvas.width(), canvas.height()),
        )
        .with_link_opener(WindowLinkOpener);

        let mut web = Self { engine, canvas };
        web.sync_surface();
        Ok(web)
    }

    /// Start flying to a named viewpoint. Returns `false` for an unknown
    /// name.
    pub fn fly_to(&mut self, name: &str) -> bool {
        self.engine.fly_to(name)
    }

    /// Pointer moved to client coordinates (`MouseEvent.clientX/Y`).
    pub fn pointer_move(&mut self, client_x: f32, client_y: f32) {
        self.sync_surface();
        let _ = self.engine.handle_input(InputEvent::CursorMoved {
            x: client_x,
            y: client_y,
        });
        self.sync_cursor();
    }

    /// Pointer button pressed (`MouseEvent.button`). Returns `true` if a
    /// link was opened.
    pub fn pointer_down(&mut self, button: i16) -> bool {
        let Some(button) = MouseButton::from_dom(button) else {
            return false;
        };
        self.engine.handle_input(InputEvent::MouseButton {
            button,
            pressed: true,
        })
    }

    /// Pointer button released.
    pub fn pointer_up(&mut self, button: i16) {
        if let Some(button) = MouseButton::from_dom(button) {
            let _ = self.engine.handle_input(InputEvent::MouseButton {
                button,
                pressed: false,
            });
        }
    }

    /// Pointer left the canvas.
    pub fn pointer_leave(&mut self) {
        let _ = self.engine.handle_input(InputEvent::CursorLeft);
        self.sync_cursor();
    }

    /// Wheel scrolled (`WheelEvent.deltaY`, positive = away from user).
    pub fn wheel(&mut self, delta_y: f32) {
        let _ = self.engine.handle_input(InputEvent::Scroll {
            delta: -delta_y * 0.01,
        });
    }

    /// Shift key state changed.
    pub fn set_shift(&mut self, shift: bool) {
        let _ = self
            .engine
            .handle_input(InputEvent::ModifiersChanged { shift });
    }

    /// Key pressed (`KeyboardEvent.code`). Returns `true` if bound.
    pub fn key_down(&mut self, code: &str) -> bool {
        self.engine.handle_key_press(code)
    }

    /// Run one frame and return the column-major view-projection matrix.
    pub fn frame(&mut self) -> Vec<f32> {
        let uniform = self.engine.frame(Instant::now());
        uniform.view_proj.iter().flatten().copied().collect()
    }

    /// Camera position as `[x, y, z]`.
    pub fn eye(&self) -> Vec<f32> {
        self.engine.eye().to_array().to_vec()
    }

    /// Look-at target as `[x, y, z]`.
    pub fn target(&self) -> Vec<f32> {
        self.engine.target().to_array().to_vec()
    }

    /// Index of the hovered interactive node, or -1.
    pub fn hovered_node(&self) -> i32 {
        self.engine.uniform().hovered_node
    }

    /// Add a box collider at `center` with `half_extents` that opens `url`
    /// when clicked. Returns the node index.
    pub fn add_link_box(
        &mut self,
        name: &str,
        center: &[f32],
        half_extents: &[f32],
        url: &str,
    ) -> Result<u32, JsValue> {
        let center = vec3(center, "center")?;
        let half = vec3(half_extents, "half_extents")?;
        let scene = self.engine.scene_mut();
        let id = scene.add_box(
            name,
            None,
            Mat4::from_translation(center),
            Aabb::from_half_extents(half),
        );
        scene.set_link(id, url);
        Ok(id.index() as u32)
    }
}

impl WebWalkthrough {
    /// Refresh the surface rect from the canvas layout box.
    fn sync_surface(&mut self) {
        let rect = self.canvas.get_bounding_client_rect();
        self.engine.set_surface_rect(SurfaceRect {
            left: rect.left() as f32,
            top: rect.top() as f32,
            width: rect.width() as f32,
            height: rect.height() as f32,
        });
    }

    fn sync_cursor(&self) {
        let css = self.engine.cursor().css();
        if let Err(e) = self.canvas.style().set_property("cursor", css) {
            log::debug!("cursor style not applied: {e:?}");
        }
    }
}

//! Standalone walkthrough window backed by winit.
//!
//! The window runs the frame driver on every redraw, forwards pointer,
//! wheel and keyboard input to the engine, and mirrors the hover
//! affordance onto the OS cursor. Clicked links are handed to the
//! platform's URL opener.
//!
//! ```no_run
//! # use walkthrough::Viewer;
//! Viewer::builder()
//!     .with_title("Studio")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use web_time::{Duration, Instant};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use crate::{
    error::WalkthroughError,
    options::Options,
    picking::{CursorIcon, LinkOpener},
    scene::Scene,
    InputEvent, MouseButton, WalkthroughEngine,
};

/// How often the title bar status is refreshed.
const STATUS_INTERVAL: Duration = Duration::from_millis(500);

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    scene: Scene,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with defaults (title "Walkthrough", empty scene,
    /// default options).
    fn new() -> Self {
        Self {
            options: None,
            scene: Scene::new(),
            title: "Walkthrough".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the scene that pointer rays are cast against.
    #[must_use]
    pub fn with_scene(mut self, scene: Scene) -> Self {
        self.scene = scene;
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            scene: self.scene,
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that walks the camera through a scene.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    scene: Scene,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    pub fn run(self) -> Result<(), WalkthroughError> {
        let event_loop = EventLoop::new()
            .map_err(|e| WalkthroughError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            engine: None,
            pending: Some((self.options, self.scene)),
            title: self.title,
            cursor: CursorIcon::Default,
            last_status: Instant::now(),
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| WalkthroughError::Viewer(e.to_string()))
    }
}

// ── Link opener ──────────────────────────────────────────────────────────

/// Opens web links in the default browser and other schemes (`mailto:`)
/// with the platform's default handler.
#[derive(Debug, Clone, Copy, Default)]
struct SystemLinkOpener;

/// Web links go to the browser; anything else to the scheme's handler.
fn opens_in_browser(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

impl LinkOpener for SystemLinkOpener {
    fn open(&mut self, url: &str) {
        let result = if opens_in_browser(url) {
            opener::open_browser(url)
        } else {
            opener::open(url)
        };
        if let Err(e) = result {
            log::error!("failed to open {url}: {e}");
        }
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: Option<WalkthroughEngine>,
    /// Options and scene waiting for the window to exist.
    pending: Option<(Options, Scene)>,
    title: String,
    /// Cursor icon last pushed to the window.
    cursor: CursorIcon,
    last_status: Instant,
}

/// Surface size, never zero.
fn viewport_size(inner: winit::dpi::PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

fn winit_cursor(icon: CursorIcon) -> winit::window::CursorIcon {
    match icon {
        CursorIcon::Default => winit::window::CursorIcon::Default,
        CursorIcon::Pointer => winit::window::CursorIcon::Pointer,
    }
}

impl ViewerApp {
    /// Push the hover affordance to the OS cursor when it changes.
    fn sync_cursor(&mut self) {
        let (Some(window), Some(engine)) = (&self.window, &self.engine) else {
            return;
        };
        let cursor = engine.cursor();
        if cursor != self.cursor {
            window.set_cursor(winit_cursor(cursor));
            self.cursor = cursor;
        }
    }

    /// Run one frame and refresh the title bar status now and then.
    fn redraw(&mut self) {
        let (Some(window), Some(engine)) = (&self.window, &mut self.engine)
        else {
            return;
        };
        let now = Instant::now();
        if engine.should_render(now) {
            let _ = engine.frame(now);
        }

        if now.saturating_duration_since(self.last_status) >= STATUS_INTERVAL {
            let place = engine
                .navigator()
                .current_viewpoint()
                .unwrap_or("free orbit");
            window.set_title(&format!(
                "{} - {place} - {:.0} fps",
                self.title,
                engine.fps()
            ));
            self.last_status = now;
        }
        window.request_redraw();
    }

    fn forward(&mut self, event: InputEvent) {
        if let Some(engine) = &mut self.engine {
            let _ = engine.handle_input(event);
        }
        self.sync_cursor();
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let Some((options, scene)) = self.pending.take() else {
            return;
        };

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 800));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let engine = WalkthroughEngine::new(
            options,
            scene,
            viewport_size(window.inner_size()),
        )
        .with_link_opener(SystemLinkOpener);

        window.request_redraw();
        self.window = Some(window);
        self.engine = Some(engine);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        // Guard: both window and engine must be initialised.
        if self.window.is_none() || self.engine.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(event_size) => {
                let (vp_w, vp_h) = viewport_size(event_size);
                if let Some(engine) = &mut self.engine {
                    engine.resize(vp_w, vp_h);
                }
            }

            WindowEvent::RedrawRequested => self.redraw(),

            WindowEvent::MouseInput { button, state, .. } => {
                self.forward(InputEvent::MouseButton {
                    button: MouseButton::from(button),
                    pressed: state == ElementState::Pressed,
                });
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.forward(InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
            }

            WindowEvent::CursorLeft { .. } => {
                self.forward(InputEvent::CursorLeft);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let scroll_delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                self.forward(InputEvent::Scroll {
                    delta: scroll_delta,
                });
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                self.forward(InputEvent::ModifiersChanged {
                    shift: modifiers.state().shift_key(),
                });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                self.forward(InputEvent::KeyPressed {
                    key: format!("{code:?}"),
                });
            }

            _ => (),
        }
    }
}

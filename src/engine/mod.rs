//! The walkthrough engine: single owner of camera, navigation, and pointer
//! state, and the per-frame driver.

pub mod command;
mod input;

use glam::Vec3;
use web_time::Instant;

pub use self::command::WalkCommand;
use crate::camera::{
    self, BoundingVolume, Camera, CameraUniform, OrbitControls,
};
use crate::input::InputProcessor;
use crate::navigation::{Navigator, TransitionStep};
use crate::options::Options;
use crate::picking::{
    CursorIcon, HoverChange, LinkOpener, LogLinkOpener, PointerController,
    PointerEvent, SurfaceRect,
};
use crate::scene::{NodeId, Scene};
use crate::util::frame_timing::FrameTiming;

/// Target FPS for hosts that poll [`WalkthroughEngine::should_render`].
const TARGET_FPS: u32 = 120;

/// Single owner of all navigation and interaction state.
///
/// Holds the camera, orbit controls, bounding volume, fly-to navigator,
/// scene and pointer controller. Every mutation happens either inside
/// [`frame`](Self::frame) or inside a synchronous input handler, so there
/// is exactly one writer.
///
/// # Frame loop
///
/// Call [`frame`](Self::frame) once per rendered frame and upload the
/// returned [`CameraUniform`]. Call [`resize`](Self::resize) when the
/// surface changes size. Input is forwarded via
/// [`handle_input`](Self::handle_input); on-screen buttons call
/// [`fly_to`](Self::fly_to).
pub struct WalkthroughEngine {
    options: Options,
    camera: Camera,
    controls: OrbitControls,
    bounds: BoundingVolume,
    navigator: Navigator,
    scene: Scene,
    pointer: PointerController,
    input: InputProcessor,
    surface: SurfaceRect,
    uniform: CameraUniform,
    link_opener: Box<dyn LinkOpener>,
    frame_timing: FrameTiming,
}

impl WalkthroughEngine {
    /// Build the engine from options and a scene, for a surface of
    /// `width` × `height` pixels.
    ///
    /// The camera starts at the configured start pose, clamped into the
    /// bounding volume. Links are only logged until a real opener is
    /// installed with [`with_link_opener`](Self::with_link_opener).
    #[must_use]
    pub fn new(
        options: Options,
        scene: Scene,
        (width, height): (u32, u32),
    ) -> Self {
        let bounds = if options.bounds.is_well_formed() {
            options.bounds
        } else {
            log::warn!(
                "bounding volume has min > max on some axis; swapping limits"
            );
            options.bounds.normalized()
        };

        let surface = SurfaceRect::from_size(width as f32, height as f32);
        let mut camera = Camera::new(
            options.navigation.start_position,
            options.navigation.start_target,
            surface.aspect(),
            &options.camera,
        );
        if camera::clamp_to_bounds(&mut camera, &bounds) {
            log::warn!("start pose lies outside the bounding volume; clamped");
        }

        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera);

        log::info!(
            "walkthrough engine ready: {} viewpoints, {} scene nodes",
            options.navigation.viewpoints.len(),
            scene.len()
        );

        Self {
            controls: OrbitControls::new(&options.controls),
            navigator: Navigator::new(&options.navigation),
            input: InputProcessor::with_key_bindings(
                options.keybindings.clone(),
            ),
            pointer: PointerController::new(),
            link_opener: Box::new(LogLinkOpener),
            frame_timing: FrameTiming::new(TARGET_FPS),
            options,
            camera,
            bounds,
            scene,
            surface,
            uniform,
        }
    }

    /// Install the action used to open links on click.
    #[must_use]
    pub fn with_link_opener(
        mut self,
        opener: impl LinkOpener + 'static,
    ) -> Self {
        self.link_opener = Box::new(opener);
        self
    }

    /// Replace the link opener.
    pub fn set_link_opener(&mut self, opener: Box<dyn LinkOpener>) {
        self.link_opener = opener;
    }

    /// Run one frame at `now` and return the uniform for the renderer.
    ///
    /// In order: the live fly-to transition, otherwise orbit damping (only
    /// while input is enabled), then the unconditional bounding-volume
    /// clamp.
    pub fn frame(&mut self, now: Instant) -> &CameraUniform {
        match self.navigator.update(&mut self.camera, now) {
            Some(TransitionStep::Completed) => self.controls.set_enabled(true),
            Some(_) => {}
            None => {
                if !self.navigator.input_suppressed() {
                    let _ = self.controls.update(&mut self.camera);
                }
            }
        }

        let _ = camera::clamp_to_bounds(&mut self.camera, &self.bounds);

        self.uniform.update_view_proj(&self.camera);
        self.uniform.hovered_node = self
            .pointer
            .hovered()
            .map_or(-1, |id| id.index() as i32);
        self.frame_timing.end_frame(now);
        &self.uniform
    }

    /// Start flying to the viewpoint called `name`. Returns `false` for an
    /// unknown name.
    pub fn fly_to(&mut self, name: &str) -> bool {
        self.fly_to_at(name, Instant::now())
    }

    /// [`fly_to`](Self::fly_to) with an explicit start time.
    pub fn fly_to_at(&mut self, name: &str, now: Instant) -> bool {
        let started = self
            .navigator
            .fly_to(name, &self.camera, &self.bounds, now)
            .is_some();
        if started {
            self.controls.set_enabled(false);
            self.input.release_mouse_state();
        }
        started
    }

    /// Execute a command.
    ///
    /// Camera gestures are dropped while a fly-to is in progress.
    pub fn execute(&mut self, cmd: WalkCommand) {
        if cmd.is_gesture() && self.navigator.input_suppressed() {
            log::trace!("gesture ignored during fly-to: {cmd:?}");
            return;
        }
        match cmd {
            WalkCommand::FlyTo { name } => {
                let _ = self.fly_to(&name);
            }
            WalkCommand::RotateCamera { delta } => self.controls.rotate(delta),
            WalkCommand::PanCamera { delta } => {
                self.controls.pan(delta, &self.camera);
            }
            WalkCommand::Zoom { delta } => self.controls.zoom(delta),
        }
    }

    /// Update hover from a pointer position in client coordinates.
    pub fn pointer_move(&mut self, event: PointerEvent) -> HoverChange {
        self.scene.update_world_matrices();
        self.pointer.on_pointer_move(
            event,
            &self.surface,
            &self.camera,
            &self.scene,
        )
    }

    /// Open the hovered node's link, if any. Returns `true` if a link was
    /// opened.
    pub fn pointer_down(&mut self) -> bool {
        self.pointer
            .on_pointer_down(&self.scene, self.link_opener.as_mut())
    }

    /// Handle a surface resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.set_surface_rect(SurfaceRect {
            width: width as f32,
            height: height as f32,
            ..self.surface
        });
    }

    /// Set the render surface rectangle in client coordinates (e.g. a
    /// canvas bounding rect on the web).
    pub fn set_surface_rect(&mut self, rect: SurfaceRect) {
        self.surface = rect;
        if rect.width > 0.0 && rect.height > 0.0 {
            self.camera.aspect = rect.aspect();
        }
    }

    /// Whether the frame cap allows another frame at `now`.
    #[must_use]
    pub fn should_render(&self, now: Instant) -> bool {
        self.frame_timing.should_render(now)
    }
}

// ── Accessors ──

impl WalkthroughEngine {
    /// The active camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Camera position.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.camera.eye
    }

    /// Camera look-at target.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.camera.target
    }

    /// Orbit gesture controls.
    #[must_use]
    pub fn controls(&self) -> &OrbitControls {
        &self.controls
    }

    /// Bounding volume in effect (normalized).
    #[must_use]
    pub fn bounds(&self) -> &BoundingVolume {
        &self.bounds
    }

    /// Fly-to navigator and its state.
    #[must_use]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Whether camera gestures are gated off by a running fly-to.
    #[must_use]
    pub fn input_suppressed(&self) -> bool {
        self.navigator.input_suppressed()
    }

    /// Options the engine was built from.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Read-only access to the scene.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable access to the scene. World matrices are refreshed before
    /// the next pointer cast.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Hovered interactive node, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<NodeId> {
        self.pointer.hovered()
    }

    /// Pointer affordance for the surface.
    #[must_use]
    pub fn cursor(&self) -> CursorIcon {
        self.pointer.cursor()
    }

    /// Render surface rectangle.
    #[must_use]
    pub fn surface(&self) -> SurfaceRect {
        self.surface
    }

    /// Uniform produced by the last frame.
    #[must_use]
    pub fn uniform(&self) -> &CameraUniform {
        &self.uniform
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.frame_timing.fps()
    }
}

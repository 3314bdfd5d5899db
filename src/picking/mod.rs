//! Pointer hover and click against interactive scene nodes.
//!
//! A pointer move is converted from client coordinates to normalized device
//! coordinates using the render surface rectangle, then ray-cast through the
//! camera. The first hit (nearest first, as the [`Raycaster`] returns them)
//! that resolves to a node carrying a well-formed link becomes the hovered
//! node. A pointer down while hovering opens that node's link through a
//! [`LinkOpener`].
//!
//! Non-interactive hits in front of an interactive one do not block it.

use glam::Vec2;

use crate::camera::Camera;
use crate::scene::{link, NodeId, Raycaster};

/// Pointer position in client (window or page) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Horizontal position, pixels from the left edge.
    pub client_x: f32,
    /// Vertical position, pixels from the top edge.
    pub client_y: f32,
}

/// Render surface rectangle in the same coordinate space as
/// [`PointerEvent`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRect {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl SurfaceRect {
    /// Surface anchored at the origin, e.g. a whole native window.
    #[must_use]
    pub fn from_size(width: f32, height: f32) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width,
            height,
        }
    }

    /// Normalized device coordinates of `event` (`x` right, `y` up). `None`
    /// for an empty surface.
    #[must_use]
    pub fn to_ndc(&self, event: PointerEvent) -> Option<Vec2> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return None;
        }
        Some(Vec2::new(
            (event.client_x - self.left) / self.width * 2.0 - 1.0,
            -(event.client_y - self.top) / self.height * 2.0 + 1.0,
        ))
    }

    /// Width over height, or 1 for an empty surface.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        if self.width > 0.0 && self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

/// How the hovered node changed on a pointer move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverChange {
    /// Same node (or still nothing) under the pointer.
    Unchanged,
    /// Pointer moved onto an interactive node from empty space.
    Entered(NodeId),
    /// Pointer left an interactive node for empty space.
    Left(NodeId),
    /// Pointer moved directly from one interactive node to another.
    Moved {
        /// Previously hovered node.
        from: NodeId,
        /// Newly hovered node.
        to: NodeId,
    },
}

/// Currently and previously hovered interactive nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverState {
    current: Option<NodeId>,
    previous: Option<NodeId>,
}

impl HoverState {
    /// Hovered node, if any.
    #[must_use]
    pub fn current(&self) -> Option<NodeId> {
        self.current
    }

    /// Node hovered before the last change.
    #[must_use]
    pub fn previous(&self) -> Option<NodeId> {
        self.previous
    }

    /// Record the node now under the pointer.
    pub fn set(&mut self, node: Option<NodeId>) -> HoverChange {
        if node == self.current {
            return HoverChange::Unchanged;
        }
        self.previous = self.current;
        self.current = node;
        match (self.previous, node) {
            (None, Some(to)) => HoverChange::Entered(to),
            (Some(from), None) => HoverChange::Left(from),
            (Some(from), Some(to)) => HoverChange::Moved { from, to },
            (None, None) => HoverChange::Unchanged,
        }
    }
}

/// Pointer affordance for the render surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CursorIcon {
    /// Regular arrow.
    #[default]
    Default,
    /// Hand, shown over interactive nodes.
    Pointer,
}

impl CursorIcon {
    /// CSS `cursor` value.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Pointer => "pointer",
        }
    }
}

/// Opens an external link in a new browsing context.
pub trait LinkOpener {
    /// Open `url`. Called only with well-formed links.
    fn open(&mut self, url: &str);
}

/// Opener that only logs. Used when the host has not installed one.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogLinkOpener;

impl LinkOpener for LogLinkOpener {
    fn open(&mut self, url: &str) {
        log::info!("link activated (no opener installed): {url}");
    }
}

/// Hover tracking and click dispatch. Never mutates the scene.
#[derive(Debug, Clone, Default)]
pub struct PointerController {
    hover: HoverState,
}

impl PointerController {
    /// Controller with nothing hovered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hover state.
    #[must_use]
    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    /// Hovered interactive node, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<NodeId> {
        self.hover.current
    }

    /// Pointer affordance for the current hover state.
    #[must_use]
    pub fn cursor(&self) -> CursorIcon {
        if self.hover.current.is_some() {
            CursorIcon::Pointer
        } else {
            CursorIcon::Default
        }
    }

    /// Resolve the interactive node under the pointer and update hover.
    ///
    /// World matrices of the scene behind `raycaster` must be current.
    pub fn on_pointer_move(
        &mut self,
        event: PointerEvent,
        surface: &SurfaceRect,
        camera: &Camera,
        raycaster: &impl Raycaster,
    ) -> HoverChange {
        let hovered = surface.to_ndc(event).and_then(|ndc| {
            raycaster
                .cast_from_ndc(ndc, camera)
                .into_iter()
                .find_map(|hit| raycaster.interactive_ancestor(hit.node))
        });
        let change = self.hover.set(hovered);
        if change != HoverChange::Unchanged {
            log::debug!("hover {change:?}");
        }
        change
    }

    /// Pointer left the surface: nothing is hovered.
    pub fn on_pointer_leave(&mut self) -> HoverChange {
        self.hover.set(None)
    }

    /// Open the hovered node's link. Returns `true` if a link was opened.
    pub fn on_pointer_down(
        &self,
        raycaster: &impl Raycaster,
        opener: &mut dyn LinkOpener,
    ) -> bool {
        let Some(node) = self.hover.current else {
            return false;
        };
        // The link may have been cleared since the last pointer move
        let Some(url) = raycaster.link(node).filter(|u| link::is_well_formed(u))
        else {
            return false;
        };
        log::info!("opening {url}");
        opener.open(url);
        true
    }
}

#[cfg(test)]
mod tests {
    use glam::{Mat4, Vec3};

    use super::*;
    use crate::options::CameraOptions;
    use crate::scene::{Aabb, Scene};

    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl LinkOpener for Recorder {
        fn open(&mut self, url: &str) {
            self.0.push(url.to_owned());
        }
    }

    fn camera() -> Camera {
        Camera::new(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::ZERO,
            1.0,
            &CameraOptions::default(),
        )
    }

    fn surface() -> SurfaceRect {
        SurfaceRect::from_size(200.0, 200.0)
    }

    fn center() -> PointerEvent {
        PointerEvent {
            client_x: 100.0,
            client_y: 100.0,
        }
    }

    fn corner() -> PointerEvent {
        PointerEvent {
            client_x: 1.0,
            client_y: 1.0,
        }
    }

    /// A linked sign at the origin with an unlinked pane of glass in front.
    fn scene() -> (Scene, NodeId, NodeId) {
        let mut scene = Scene::new();
        let sign = scene.add_box(
            "sign",
            None,
            Mat4::IDENTITY,
            Aabb::from_half_extents(Vec3::splat(0.5)),
        );
        scene.set_link(sign, "https://example.org/cv");
        let glass = scene.add_box(
            "glass",
            None,
            Mat4::from_translation(Vec3::new(0.0, 0.0, 2.0)),
            Aabb::from_half_extents(Vec3::new(1.0, 1.0, 0.05)),
        );
        scene.update_world_matrices();
        (scene, sign, glass)
    }

    #[test]
    fn ndc_mapping() {
        let rect = SurfaceRect {
            left: 10.0,
            top: 20.0,
            width: 100.0,
            height: 50.0,
        };
        let ndc = |x, y| {
            rect.to_ndc(PointerEvent {
                client_x: x,
                client_y: y,
            })
            .unwrap()
        };
        assert_eq!(ndc(10.0, 20.0), Vec2::new(-1.0, 1.0));
        assert_eq!(ndc(110.0, 70.0), Vec2::new(1.0, -1.0));
        assert_eq!(ndc(60.0, 45.0), Vec2::ZERO);
        assert!(SurfaceRect::from_size(0.0, 10.0).to_ndc(center()).is_none());
    }

    #[test]
    fn hover_enters_and_leaves() {
        let (scene, sign, _) = scene();
        let cam = camera();
        let mut pointer = PointerController::new();

        let change = pointer.on_pointer_move(center(), &surface(), &cam, &scene);
        assert_eq!(change, HoverChange::Entered(sign));
        assert_eq!(pointer.cursor(), CursorIcon::Pointer);

        let change = pointer.on_pointer_move(center(), &surface(), &cam, &scene);
        assert_eq!(change, HoverChange::Unchanged);

        let change = pointer.on_pointer_move(corner(), &surface(), &cam, &scene);
        assert_eq!(change, HoverChange::Left(sign));
        assert_eq!(pointer.cursor(), CursorIcon::Default);
        assert_eq!(pointer.hover().previous(), Some(sign));
    }

    #[test]
    fn click_opens_hovered_link_once() {
        let (scene, _, _) = scene();
        let cam = camera();
        let mut pointer = PointerController::new();
        let mut opener = Recorder::default();

        let _ = pointer.on_pointer_move(center(), &surface(), &cam, &scene);
        assert!(pointer.on_pointer_down(&scene, &mut opener));
        assert_eq!(opener.0, ["https://example.org/cv"]);
    }

    #[test]
    fn click_without_hover_does_nothing() {
        let (scene, _, _) = scene();
        let cam = camera();
        let mut pointer = PointerController::new();
        let mut opener = Recorder::default();

        let _ = pointer.on_pointer_move(corner(), &surface(), &cam, &scene);
        assert!(!pointer.on_pointer_down(&scene, &mut opener));
        assert!(opener.0.is_empty());
    }

    #[test]
    fn cleared_link_is_not_opened() {
        let (mut scene, sign, _) = scene();
        let cam = camera();
        let mut pointer = PointerController::new();
        let mut opener = Recorder::default();

        let _ = pointer.on_pointer_move(center(), &surface(), &cam, &scene);
        scene.clear_link(sign);
        assert!(!pointer.on_pointer_down(&scene, &mut opener));
        assert!(opener.0.is_empty());
    }

    #[test]
    fn malformed_link_is_never_hovered() {
        let (mut scene, sign, _) = scene();
        scene.set_link(sign, "javascript:alert(1)");
        let cam = camera();
        let mut pointer = PointerController::new();

        let change = pointer.on_pointer_move(center(), &surface(), &cam, &scene);
        assert_eq!(change, HoverChange::Unchanged);
        assert_eq!(pointer.hovered(), None);
    }

    #[test]
    fn moving_between_nodes_reports_both() {
        let (mut scene, sign, glass) = scene();
        scene.set_link(glass, "mailto:hello@example.org");
        let cam = camera();
        let mut pointer = PointerController::new();

        // Glass is nearer, so it wins
        let change = pointer.on_pointer_move(center(), &surface(), &cam, &scene);
        assert_eq!(change, HoverChange::Entered(glass));

        scene.clear_link(glass);
        let change = pointer.on_pointer_move(center(), &surface(), &cam, &scene);
        assert_eq!(change, HoverChange::Moved { from: glass, to: sign });
    }
}

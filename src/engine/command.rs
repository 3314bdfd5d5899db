//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, mouse
//! gesture, on-screen button, or programmatic call, is represented as a
//! `WalkCommand`. Consumers construct commands and pass them to
//! [`WalkthroughEngine::execute`](super::WalkthroughEngine::execute).

use glam::Vec2;

/// A discrete or parameterized operation the engine can perform.
///
/// The engine never cares *how* a command was triggered:
///
/// ```ignore
/// engine.execute(WalkCommand::FlyTo { name: "social".into() });
/// engine.execute(WalkCommand::Zoom { delta: 1.0 });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum WalkCommand {
    // ── Navigation ──────────────────────────────────────────────────
    /// Animate the camera to a named viewpoint.
    FlyTo {
        /// Viewpoint name.
        name: String,
    },

    // ── Camera gestures (gated while a fly-to runs) ─────────────────
    /// Orbit the camera by `delta` pixels of pointer movement.
    RotateCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Pan the camera by `delta` pixels of pointer movement.
    PanCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Zoom the camera (positive = zoom in, negative = zoom out).
    Zoom {
        /// Scroll amount.
        delta: f32,
    },
}

impl WalkCommand {
    /// Whether this command is a camera gesture.
    #[must_use]
    pub fn is_gesture(&self) -> bool {
        !matches!(self, Self::FlyTo { .. })
    }
}

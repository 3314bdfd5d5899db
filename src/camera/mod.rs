//! Camera system for walking the scene.
//!
//! Provides a look-at perspective camera, orbit gesture controls with
//! damping, and the bounding volume both are confined to.

/// Axis-aligned volume the camera and its target are clamped into.
pub mod bounds;
/// Orbit gesture controls (rotate, pan, zoom, damping).
pub mod controller;
/// Core camera struct and GPU uniform types.
pub mod core;

pub use bounds::BoundingVolume;
pub use controller::OrbitControls;
pub use core::{Camera, CameraUniform};

/// Clamp the camera's target, then its eye, into `bounds`, re-deriving
/// orientation when anything changed. Returns `true` if the camera was
/// corrected.
///
/// Both components are clamped: panning and fly-to animation can move the
/// eye independently of the target.
pub fn clamp_to_bounds(camera: &mut Camera, bounds: &BoundingVolume) -> bool {
    let target = bounds.clamp(camera.target);
    let eye = bounds.clamp(camera.eye);
    if target == camera.target && eye == camera.eye {
        return false;
    }
    camera.eye = eye;
    camera.look_at(target);
    true
}

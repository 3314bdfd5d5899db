use std::f32::consts::PI;

use glam::{Vec2, Vec3};

use crate::camera::core::Camera;
use crate::options::ControlOptions;

/// Smallest radius the controls will produce.
const EPS: f32 = 1e-4;

/// Polar angle margin from the poles. Keeps the look-at direction off the
/// up axis.
const POLE_MARGIN: f32 = 0.01;

/// Motion below this is treated as settled.
const SETTLE_EPS: f32 = 1e-6;

/// Orbit gesture controls.
///
/// Gestures accumulate into a spherical delta (azimuth `theta`, polar angle
/// `phi`), a zoom scale, and a pan offset. [`update`](Self::update) turns
/// the camera's current offset from its target into spherical coordinates,
/// applies the accumulated motion, and writes the camera back. With damping
/// enabled only a fraction of the pending motion is applied per update and
/// the remainder decays, so the camera keeps gliding for a few frames
/// after the last input.
///
/// The camera's up axis is assumed to be +Y.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    enabled: bool,
    enable_rotate: bool,
    enable_pan: bool,
    enable_zoom: bool,
    enable_damping: bool,
    damping_factor: f32,
    rotate_speed: f32,
    pan_speed: f32,
    zoom_speed: f32,
    min_distance: f32,
    max_distance: f32,
    min_polar_angle: f32,
    max_polar_angle: f32,

    delta_theta: f32,
    delta_phi: f32,
    scale: f32,
    pan_offset: Vec3,
}

impl OrbitControls {
    /// Controls configured from `options`, enabled, with no pending motion.
    #[must_use]
    pub fn new(options: &ControlOptions) -> Self {
        Self {
            enabled: true,
            enable_rotate: options.enable_rotate,
            enable_pan: options.enable_pan,
            enable_zoom: options.enable_zoom,
            enable_damping: options.enable_damping,
            damping_factor: options.damping_factor.clamp(0.01, 1.0),
            rotate_speed: options.rotate_speed,
            pan_speed: options.pan_speed,
            zoom_speed: options.zoom_speed,
            min_distance: options.min_distance.max(EPS),
            max_distance: options.max_distance.max(options.min_distance),
            min_polar_angle: options.min_polar_angle.max(POLE_MARGIN),
            max_polar_angle: options.max_polar_angle.min(PI - POLE_MARGIN),
            delta_theta: 0.0,
            delta_phi: 0.0,
            scale: 1.0,
            pan_offset: Vec3::ZERO,
        }
    }

    /// Whether gestures are accepted.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Master gate for all gestures. Disabling drops any pending motion so
    /// nothing leaks through once re-enabled.
    pub fn set_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.reset_motion();
        }
        self.enabled = enabled;
    }

    /// Enable or disable the rotate gesture class.
    pub fn set_rotate_enabled(&mut self, enabled: bool) {
        self.enable_rotate = enabled;
    }

    /// Enable or disable the pan gesture class.
    pub fn set_pan_enabled(&mut self, enabled: bool) {
        self.enable_pan = enabled;
    }

    /// Enable or disable the zoom gesture class.
    pub fn set_zoom_enabled(&mut self, enabled: bool) {
        self.enable_zoom = enabled;
    }

    /// Discard accumulated gesture and damping motion.
    pub fn reset_motion(&mut self) {
        self.delta_theta = 0.0;
        self.delta_phi = 0.0;
        self.scale = 1.0;
        self.pan_offset = Vec3::ZERO;
    }

    /// Whether any motion is still pending.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.delta_theta.abs() > SETTLE_EPS
            || self.delta_phi.abs() > SETTLE_EPS
            || (self.scale - 1.0).abs() > SETTLE_EPS
            || self.pan_offset.length_squared() > SETTLE_EPS * SETTLE_EPS
    }

    /// Queue an orbit by `delta` pixels of pointer movement.
    pub fn rotate(&mut self, delta: Vec2) {
        if !self.enabled || !self.enable_rotate {
            return;
        }
        self.delta_theta -= delta.x * self.rotate_speed;
        self.delta_phi -= delta.y * self.rotate_speed;
    }

    /// Queue a pan by `delta` pixels, scaled by the current distance so the
    /// scene tracks the pointer at any zoom level.
    pub fn pan(&mut self, delta: Vec2, camera: &Camera) {
        if !self.enabled || !self.enable_pan {
            return;
        }
        let distance = (camera.eye - camera.target).length().max(EPS);
        let scale = self.pan_speed * distance;
        self.pan_offset += camera.right() * (-delta.x * scale)
            + camera.screen_up() * (delta.y * scale);
    }

    /// Queue a zoom (positive = zoom in, negative = zoom out).
    pub fn zoom(&mut self, delta: f32) {
        if !self.enabled || !self.enable_zoom {
            return;
        }
        self.scale *= (1.0 - delta * self.zoom_speed).max(0.1);
    }

    /// Integrate pending motion into `camera`. Returns `true` if the camera
    /// moved.
    ///
    /// Reads the camera's current eye and target every call, so external
    /// writes (fly-to animation, bounding-volume clamp) are picked up
    /// without any re-synchronization step.
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        let offset = camera.eye - camera.target;
        let radius = offset.length().max(EPS);
        let mut theta = offset.x.atan2(offset.z);
        let mut phi = (offset.y / radius).clamp(-1.0, 1.0).acos();

        // Settled: leave the camera bit-for-bit alone, even if a fly-to
        // landed outside the polar or distance limits
        if !self.is_moving() {
            return false;
        }

        let factor = if self.enable_damping {
            self.damping_factor
        } else {
            1.0
        };

        // Limits stop gestures from pushing further out, but never yank a
        // pose that already sits beyond them
        let (phi_lo, phi_hi) = widen(
            (self.min_polar_angle, self.max_polar_angle),
            phi.clamp(POLE_MARGIN, PI - POLE_MARGIN),
        );
        let (r_lo, r_hi) = widen((self.min_distance, self.max_distance), radius);

        theta += self.delta_theta * factor;
        phi += self.delta_phi * factor;
        phi = phi.max(phi_lo).min(phi_hi);

        let radius = (radius * self.scale).max(r_lo).min(r_hi);

        let target = camera.target + self.pan_offset * factor;
        let sin_phi = phi.sin();
        let new_offset = Vec3::new(
            radius * sin_phi * theta.sin(),
            radius * phi.cos(),
            radius * sin_phi * theta.cos(),
        );
        let eye = target + new_offset;

        let moved = (eye - camera.eye).length_squared() > SETTLE_EPS
            || (target - camera.target).length_squared() > SETTLE_EPS;

        camera.eye = eye;
        camera.look_at(target);

        if self.enable_damping {
            let keep = 1.0 - self.damping_factor;
            self.delta_theta *= keep;
            self.delta_phi *= keep;
            self.pan_offset *= keep;
            if !self.is_moving() {
                self.reset_motion();
            }
        } else {
            self.delta_theta = 0.0;
            self.delta_phi = 0.0;
            self.pan_offset = Vec3::ZERO;
        }
        self.scale = 1.0;

        moved
    }
}

/// Extend `limits` so that `current` lies inside them.
fn widen((lo, hi): (f32, f32), current: f32) -> (f32, f32) {
    (lo.min(current), hi.max(current))
}

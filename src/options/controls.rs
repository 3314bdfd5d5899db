use std::f32::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
/// Orbit gesture parameters.
pub struct ControlOptions {
    /// Allow orbiting around the target.
    pub enable_rotate: bool,
    /// Allow panning the target.
    pub enable_pan: bool,
    /// Allow zooming toward the target.
    pub enable_zoom: bool,
    /// Keep gliding after input stops.
    pub enable_damping: bool,
    /// Fraction of pending motion applied per frame when damping.
    pub damping_factor: f32,
    /// Radians of orbit per pixel of drag.
    pub rotate_speed: f32,
    /// World units of pan per pixel of drag, per unit of camera distance.
    pub pan_speed: f32,
    /// Zoom sensitivity multiplier.
    pub zoom_speed: f32,
    /// Closest the camera may get to its target.
    pub min_distance: f32,
    /// Farthest the camera may get from its target.
    pub max_distance: f32,
    /// Smallest polar angle from +Y, in radians.
    pub min_polar_angle: f32,
    /// Largest polar angle from +Y, in radians.
    pub max_polar_angle: f32,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            enable_rotate: true,
            enable_pan: true,
            enable_zoom: true,
            enable_damping: true,
            damping_factor: 0.05,
            rotate_speed: 0.005,
            pan_speed: 0.002,
            zoom_speed: 0.1,
            min_distance: 1.0,
            max_distance: 40.0,
            min_polar_angle: 0.0,
            // Never look up from below the floor
            max_polar_angle: FRAC_PI_2,
        }
    }
}

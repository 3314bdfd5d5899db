use std::collections::BTreeMap;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::navigation::Viewpoint;
use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Start pose, fly-to easing, and the named viewpoints.
pub struct NavigationOptions {
    /// Camera position at startup.
    pub start_position: Vec3,
    /// Look-at target at startup.
    pub start_target: Vec3,
    /// Easing curve applied to fly-to progress.
    pub easing: EasingFunction,
    /// Named viewpoints, keyed by the name `fly_to` resolves.
    pub viewpoints: BTreeMap<String, Viewpoint>,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        let viewpoints = BTreeMap::from([
            (
                "home".into(),
                Viewpoint {
                    position: Vec3::new(-15.0, 10.0, 0.0),
                    target: Vec3::ZERO,
                    duration: 1.5,
                },
            ),
            (
                "social".into(),
                Viewpoint {
                    position: Vec3::new(2.8, 1.6, 2.0),
                    target: Vec3::new(5.0, 1.0, 2.0),
                    duration: 1.2,
                },
            ),
            (
                "projects".into(),
                Viewpoint {
                    position: Vec3::new(-1.5, 1.8, 0.5),
                    target: Vec3::new(-1.5, 1.4, -3.0),
                    duration: 1.2,
                },
            ),
        ]);
        Self {
            start_position: Vec3::new(-15.0, 10.0, 0.0),
            start_target: Vec3::ZERO,
            easing: EasingFunction::QuadraticInOut,
            viewpoints,
        }
    }
}

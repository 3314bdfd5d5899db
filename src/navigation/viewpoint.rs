use std::collections::BTreeMap;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A named camera destination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewpoint {
    /// Look-at target.
    pub target: Vec3,
    /// Camera position.
    pub position: Vec3,
    /// Fly-to duration in seconds.
    pub duration: f32,
}

/// Immutable name → viewpoint table built once at startup.
#[derive(Debug, Clone, Default)]
pub struct ViewpointRegistry {
    viewpoints: BTreeMap<String, Viewpoint>,
}

impl ViewpointRegistry {
    /// Build a registry from configured viewpoints.
    #[must_use]
    pub fn new(viewpoints: BTreeMap<String, Viewpoint>) -> Self {
        Self { viewpoints }
    }

    /// Resolve a viewpoint by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Viewpoint> {
        self.viewpoints.get(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.viewpoints.keys().map(String::as_str)
    }

    /// Number of registered viewpoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.viewpoints.len()
    }

    /// Whether no viewpoints are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.viewpoints.is_empty()
    }
}

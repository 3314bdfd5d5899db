use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned box that both the camera and its look-at target must stay
/// inside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundingVolume {
    /// Lower X limit.
    pub min_x: f32,
    /// Upper X limit.
    pub max_x: f32,
    /// Lower Y limit.
    pub min_y: f32,
    /// Upper Y limit.
    pub max_y: f32,
    /// Lower Z limit.
    pub min_z: f32,
    /// Upper Z limit.
    pub max_z: f32,
}

impl Default for BoundingVolume {
    fn default() -> Self {
        Self {
            min_x: -16.0,
            max_x: 4.5,
            min_y: -0.47,
            max_y: 15.0,
            min_z: -3.0,
            max_z: 15.0,
        }
    }
}

impl BoundingVolume {
    /// Volume spanning the two corners.
    #[must_use]
    pub fn from_corners(a: Vec3, b: Vec3) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        Self {
            min_x: min.x,
            max_x: max.x,
            min_y: min.y,
            max_y: max.y,
            min_z: min.z,
            max_z: max.z,
        }
    }

    /// Minimum corner.
    #[must_use]
    pub fn min(&self) -> Vec3 {
        Vec3::new(self.min_x, self.min_y, self.min_z)
    }

    /// Maximum corner.
    #[must_use]
    pub fn max(&self) -> Vec3 {
        Vec3::new(self.max_x, self.max_y, self.max_z)
    }

    /// Copy with any inverted axis swapped back into `min <= max`.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self::from_corners(self.min(), self.max())
    }

    /// Whether every axis has `min <= max`.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.min_x <= self.max_x
            && self.min_y <= self.max_y
            && self.min_z <= self.max_z
    }

    /// Clamp each axis of `point` independently into the volume.
    ///
    /// Total: never panics, even for an inverted axis (the upper limit wins
    /// there).
    #[must_use]
    pub fn clamp(&self, point: Vec3) -> Vec3 {
        point.max(self.min()).min(self.max())
    }

    /// Whether `point` lies inside the volume (boundary inclusive).
    #[must_use]
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min()).all() && point.cmple(self.max()).all()
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;

    #[test]
    fn clamp_limits_each_axis() {
        let bounds = BoundingVolume::default();
        let clamped = bounds.clamp(Vec3::new(-100.0, 7.0, 100.0));
        assert_eq!(clamped, Vec3::new(-16.0, 7.0, 15.0));
    }

    #[test]
    fn clamp_is_identity_inside() {
        let bounds = BoundingVolume::default();
        let p = Vec3::new(-15.0, 10.0, 0.0);
        assert_eq!(bounds.clamp(p), p);
    }

    #[test]
    fn clamp_random_points_lands_inside_and_is_idempotent() {
        let bounds = BoundingVolume::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let p = Vec3::new(
                rng.random_range(-50.0..50.0),
                rng.random_range(-50.0..50.0),
                rng.random_range(-50.0..50.0),
            );
            let once = bounds.clamp(p);
            assert!(bounds.contains(once), "{p} clamped to {once}");
            assert_eq!(bounds.clamp(once), once);
            if bounds.contains(p) {
                assert_eq!(once, p);
            }
        }
    }

    #[test]
    fn inverted_axis_does_not_panic() {
        let bounds = BoundingVolume {
            min_x: 5.0,
            max_x: -5.0,
            ..BoundingVolume::default()
        };
        assert!(!bounds.is_well_formed());
        let _ = bounds.clamp(Vec3::ZERO);

        let fixed = bounds.normalized();
        assert!(fixed.is_well_formed());
        assert_eq!(fixed.min_x, -5.0);
        assert_eq!(fixed.max_x, 5.0);
    }
}

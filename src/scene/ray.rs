use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// A half-line in world space. `direction` is unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray origin.
    pub origin: Vec3,
    /// Normalized direction.
    pub direction: Vec3,
}

impl Ray {
    /// Build a ray, normalizing `direction`. Returns `None` for a zero or
    /// non-finite direction.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        let direction = direction.try_normalize()?;
        origin.is_finite().then_some(Self { origin, direction })
    }

    /// Point at parameter `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Distance along this ray to the box `aabb` placed by `world`, or
    /// `None` on a miss.
    ///
    /// The test runs in the box's local space. Because the local ray is the
    /// image of the world ray under a linear map, the slab parameter is the
    /// world-space distance.
    #[must_use]
    pub fn intersect_transformed_aabb(
        &self,
        aabb: &Aabb,
        world: &Mat4,
    ) -> Option<f32> {
        let inv = world.inverse();
        if !inv.is_finite() {
            return None;
        }
        let origin = inv.transform_point3(self.origin);
        let direction = inv.transform_vector3(self.direction);
        aabb.intersect(origin, direction)
    }
}

/// Axis-aligned box in a node's local space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Box spanning `min`..`max`.
    #[must_use]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// Box of the given half extents centered on the local origin.
    #[must_use]
    pub fn from_half_extents(half: Vec3) -> Self {
        Self::new(-half, half)
    }

    /// Slab test. Returns the entry parameter, or the exit parameter when
    /// the origin is inside the box.
    #[must_use]
    pub fn intersect(&self, origin: Vec3, direction: Vec3) -> Option<f32> {
        let mut t_min = f32::NEG_INFINITY;
        let mut t_max = f32::INFINITY;
        // Relative to the ray's own scale: heavily scaled nodes shrink the
        // local direction far below f32::EPSILON
        let parallel_eps = direction.abs().max_element() * f32::EPSILON;

        for axis in 0..3 {
            let o = origin[axis];
            let d = direction[axis];
            if d.abs() <= parallel_eps {
                // Parallel to this slab: miss unless already between planes
                if o < self.min[axis] || o > self.max[axis] {
                    return None;
                }
                continue;
            }
            let inv_d = 1.0 / d;
            let t0 = (self.min[axis] - o) * inv_d;
            let t1 = (self.max[axis] - o) * inv_d;
            t_min = t_min.max(t0.min(t1));
            t_max = t_max.min(t0.max(t1));
            if t_max < t_min {
                return None;
            }
        }

        if t_max < 0.0 {
            None
        } else if t_min >= 0.0 {
            Some(t_min)
        } else {
            Some(t_max)
        }
    }
}

use glam::{Mat3, Mat4, Quat, Vec2, Vec3};

use crate::options::CameraOptions;
use crate::scene::Ray;

/// Perspective camera defined by eye position, look-at target, and
/// projection parameters.
///
/// Orientation is derived from the target by [`look_at`](Self::look_at)
/// and cached, so writing `eye` alone does not turn the camera. Every code
/// path that moves the camera finishes with a `look_at` call.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    orientation: Quat,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and camera metadata.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction for lighting.
    pub forward: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Currently hovered interactive node index (-1 if none).
    pub hovered_node: i32,
    /// Padding for GPU alignment.
    pub(crate) _pad: [u32; 3],
}

impl Camera {
    /// Camera at `eye` looking at `target`, with projection from `options`.
    #[must_use]
    pub fn new(
        eye: Vec3,
        target: Vec3,
        aspect: f32,
        options: &CameraOptions,
    ) -> Self {
        let mut camera = Self {
            eye,
            target,
            up: Vec3::Y,
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
            orientation: Quat::IDENTITY,
        };
        camera.look_at(target);
        camera
    }

    /// Set the target and re-derive orientation from `eye` toward it.
    ///
    /// Degenerate directions (target on the eye, or straight along `up`)
    /// keep the previous orientation.
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
        let dir = target - self.eye;
        if dir.length_squared() < f32::EPSILON
            || dir.cross(self.up).length_squared() < f32::EPSILON
        {
            return;
        }
        let view = Mat4::look_at_rh(self.eye, target, self.up);
        // The view rotation is the transpose of the camera's world rotation
        self.orientation =
            Quat::from_mat3(&Mat3::from_mat4(view).transpose()).normalize();
    }

    /// Cached world-space orientation.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Unit forward vector.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// Unit right vector.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::X
    }

    /// Unit screen-up vector.
    #[must_use]
    pub fn screen_up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// World-to-view matrix from the cached orientation.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.eye).inverse()
    }

    /// Projection matrix.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.view_matrix()
    }

    /// World-space ray from the eye through normalized device coordinates
    /// (`x` right, `y` up, both in `-1..=1`).
    #[must_use]
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Option<Ray> {
        let inv = self.build_matrix().inverse();
        if !inv.is_finite() {
            return None;
        }
        let far = inv.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        Ray::new(self.eye, far - self.eye)
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 1.6,
            forward: [0.0, 0.0, -1.0],
            fovy: 45.0,
            hovered_node: -1,
            _pad: [0; 3],
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.build_matrix().to_cols_array_2d();
        self.position = camera.eye.to_array();
        self.aspect = camera.aspect;
        self.forward = camera.forward().to_array();
        self.fovy = camera.fovy;
    }
}

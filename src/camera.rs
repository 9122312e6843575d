use glam::{Mat4, Vec3};
use serde::Serialize;

use crate::math::Ray;

/// Vertical field of view in degrees
pub const FIELD_OF_VIEW: f32 = 75.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 1000.0;

/// Perspective camera looking down -Z from a fixed position
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    fov: f32,
    aspect: f32,
    near: f32,
    far: f32,
    pub position: Vec3,
    projection: Mat4,
    inverse_projection: Mat4,
}

impl PerspectiveCamera {
    /// Camera with the standard field of view and clip planes
    pub fn new(aspect: f32, position: Vec3) -> Self {
        Self::with_params(FIELD_OF_VIEW, aspect, NEAR_PLANE, FAR_PLANE, position)
    }

    pub fn with_params(fov: f32, aspect: f32, near: f32, far: f32, position: Vec3) -> Self {
        let mut camera = Self {
            fov,
            aspect,
            near,
            far,
            position,
            projection: Mat4::IDENTITY,
            inverse_projection: Mat4::IDENTITY,
        };
        camera.update_projection_matrix();
        camera
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    /// Set aspect ratio and rebuild the projection
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
        self.update_projection_matrix();
    }

    pub fn update_projection_matrix(&mut self) {
        self.projection =
            Mat4::perspective_rh(self.fov.to_radians(), self.aspect, self.near, self.far);
        self.inverse_projection = self.projection.inverse();
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    /// World-space ray through normalized device coordinates in [-1, 1].
    ///
    /// Unprojects the point on the near plane, so rays always follow the
    /// current projection.
    pub fn primary_ray(&self, ndc_x: f32, ndc_y: f32) -> Ray {
        // Depth 0 is the near plane for a right-handed [0, 1] depth projection
        let on_near = self
            .inverse_projection
            .project_point3(Vec3::new(ndc_x, ndc_y, 0.0));
        Ray::new(self.position, on_near.normalize())
    }

    /// Whether a hit at distance `t` along `ray` lies between the clip planes
    pub fn in_depth_range(&self, ray: &Ray, t: f32) -> bool {
        let depth = -ray.direction.z * t;
        depth >= self.near && depth <= self.far
    }

    pub fn snapshot(&self) -> CameraSnapshot {
        CameraSnapshot {
            fov: self.fov,
            aspect: self.aspect,
            near: self.near,
            far: self.far,
            position: self.position.to_array(),
        }
    }
}

/// Serializable view of camera state
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraSnapshot {
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: [f32; 3],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_standard_frustum() {
        let camera = PerspectiveCamera::new(4.0 / 3.0, Vec3::new(0.0, 0.0, 30.0));
        assert_eq!(camera.fov(), 75.0);
        assert_eq!(camera.near(), 0.1);
        assert_eq!(camera.far(), 1000.0);
        assert_eq!(camera.aspect(), 4.0 / 3.0);
    }

    #[test]
    fn set_aspect_rebuilds_projection() {
        let mut camera = PerspectiveCamera::new(1.0, Vec3::ZERO);
        let square = camera.projection_matrix();

        camera.set_aspect(2.0);
        let wide = camera.projection_matrix();

        assert_ne!(square, wide);
        assert_eq!(
            wide,
            Mat4::perspective_rh(75f32.to_radians(), 2.0, 0.1, 1000.0)
        );
    }

    #[test]
    fn center_ray_looks_down_negative_z() {
        let camera = PerspectiveCamera::new(1.5, Vec3::new(1.0, 2.0, 3.0));
        let ray = camera.primary_ray(0.0, 0.0);
        assert_eq!(ray.origin, Vec3::new(1.0, 2.0, 3.0));
        assert!((ray.direction - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn top_edge_ray_matches_half_fov() {
        let camera = PerspectiveCamera::new(1.0, Vec3::ZERO);
        let ray = camera.primary_ray(0.0, 1.0);
        let angle = ray.direction.y.atan2(-ray.direction.z);
        assert!((angle.to_degrees() - 37.5).abs() < 1e-3);
    }

    #[test]
    fn depth_range_clips_near_and_far() {
        let camera = PerspectiveCamera::new(1.0, Vec3::ZERO);
        let ray = camera.primary_ray(0.0, 0.0);
        assert!(!camera.in_depth_range(&ray, 0.05));
        assert!(camera.in_depth_range(&ray, 10.0));
        assert!(!camera.in_depth_range(&ray, 1000.5));
    }

    #[test]
    fn rays_follow_aspect_changes() {
        let mut camera = PerspectiveCamera::new(1.0, Vec3::ZERO);
        let square = camera.primary_ray(1.0, 0.0).direction;

        camera.set_aspect(2.0);
        let wide = camera.primary_ray(1.0, 0.0).direction;

        let half_width = |d: Vec3| d.x / -d.z;
        let tan_half = 37.5f32.to_radians().tan();
        assert!((half_width(square) - tan_half).abs() < 1e-4);
        assert!((half_width(wide) - 2.0 * tan_half).abs() < 1e-4);
    }
}

use glam::Vec3;

/// Hits closer than this are treated as self-intersections
const T_EPSILON: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Nearest positive hit against a sphere centered at the origin
pub fn intersect_sphere(ray: &Ray, radius: f32) -> Option<f32> {
    let oc = ray.origin;
    let a = ray.direction.dot(ray.direction);
    let half_b = oc.dot(ray.direction);
    let c = oc.dot(oc) - radius * radius;

    let discriminant = half_b * half_b - a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let near = (-half_b - sqrt_d) / a;
    if near > T_EPSILON {
        return Some(near);
    }
    let far = (-half_b + sqrt_d) / a;
    (far > T_EPSILON).then_some(far)
}

/// Slab test against an axis-aligned box; returns the exit distance when
/// the ray starts inside
pub fn intersect_aabb(ray: &Ray, box_min: Vec3, box_max: Vec3) -> Option<f32> {
    const EPSILON: f32 = 1e-8;

    // Clamp near-zero components so the inverse stays finite
    let inv = |d: f32| {
        if d.abs() < EPSILON {
            1.0 / EPSILON.copysign(d)
        } else {
            1.0 / d
        }
    };
    let inv_dir = Vec3::new(inv(ray.direction.x), inv(ray.direction.y), inv(ray.direction.z));

    let t_min = (box_min - ray.origin) * inv_dir;
    let t_max = (box_max - ray.origin) * inv_dir;

    let t1 = t_min.min(t_max);
    let t2 = t_min.max(t_max);

    let t_near = t1.max_element();
    let t_far = t2.min_element();

    if t_near > t_far || t_far < 0.0 {
        return None;
    }

    if t_near < T_EPSILON {
        (t_far > T_EPSILON).then_some(t_far)
    } else {
        Some(t_near)
    }
}

/// Outward normal of a box face at a surface point (dominant axis)
pub fn aabb_normal(point: Vec3, half_extents: Vec3) -> Vec3 {
    let scaled = point / half_extents;
    let abs = scaled.abs();
    if abs.x >= abs.y && abs.x >= abs.z {
        Vec3::new(scaled.x.signum(), 0.0, 0.0)
    } else if abs.y >= abs.z {
        Vec3::new(0.0, scaled.y.signum(), 0.0)
    } else {
        Vec3::new(0.0, 0.0, scaled.z.signum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_hit_from_outside() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z);
        let t = intersect_sphere(&ray, 2.0).unwrap();
        assert!((t - 8.0).abs() < 1e-5);
        assert!((ray.at(t) - Vec3::new(0.0, 0.0, 2.0)).length() < 1e-5);
    }

    #[test]
    fn test_sphere_miss() {
        let ray = Ray::new(Vec3::new(0.0, 5.0, 10.0), Vec3::NEG_Z);
        assert!(intersect_sphere(&ray, 2.0).is_none());
    }

    #[test]
    fn test_sphere_behind_ray() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::Z);
        assert!(intersect_sphere(&ray, 2.0).is_none());
    }

    #[test]
    fn test_sphere_from_inside_returns_exit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let t = intersect_sphere(&ray, 3.0).unwrap();
        assert!((t - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_intersect_aabb_hit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let t = intersect_aabb(&ray, Vec3::new(5.0, -1.0, -1.0), Vec3::new(10.0, 1.0, 1.0)).unwrap();
        assert!((t - 5.0).abs() < 0.01);
    }

    #[test]
    fn test_intersect_aabb_miss() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert!(intersect_aabb(&ray, Vec3::new(5.0, 2.0, 2.0), Vec3::new(10.0, 3.0, 3.0)).is_none());
    }

    #[test]
    fn test_intersect_aabb_inside() {
        let ray = Ray::new(Vec3::new(5.0, 0.0, 0.0), Vec3::X);
        let t = intersect_aabb(&ray, Vec3::new(0.0, -1.0, -1.0), Vec3::new(10.0, 1.0, 1.0)).unwrap();
        assert!((t - 5.0).abs() < 0.01);
    }

    #[test]
    fn test_aabb_normal_picks_dominant_face() {
        let half = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(aabb_normal(Vec3::new(1.0, 0.5, 0.5), half), Vec3::X);
        assert_eq!(aabb_normal(Vec3::new(0.1, -2.0, 0.5), half), Vec3::NEG_Y);
        assert_eq!(aabb_normal(Vec3::new(0.1, 0.2, 3.0), half), Vec3::Z);
    }
}

use glam::Vec3;

use super::SceneSetup;
use crate::math::Color;
use crate::motion::{Axis, Bounce, Kinematics, Spin};
use crate::scene::Scene;
use crate::types::{Geometry, Light, Material, Renderable};

const VERTICAL_LIMIT: f32 = 70.0;
const HORIZONTAL_LIMIT: f32 = 100.0;

/// Sphere drifting diagonally: recolors on vertical turns only
pub fn create_drifter_scene() -> SceneSetup {
    let kinematics = Kinematics::stationary()
        .with_spin(Spin::new(1.0, &[Axis::Y]))
        .with_vertical(Bounce::new(1.0, -VERTICAL_LIMIT, VERTICAL_LIMIT).with_recolor())
        .with_horizontal(Bounce::new(1.5, -HORIZONTAL_LIMIT, HORIZONTAL_LIMIT));

    let ball = Renderable::new(
        "drifter",
        Geometry::sphere(8.0, 32, 16),
        Material::standard(Color::from_hex(0xdd5533)),
    )
    .with_kinematics(kinematics);

    let scene = Scene::new(
        "drifter",
        Light::point(Color::WHITE, 1.0, Vec3::new(0.0, 40.0, 120.0)),
    )
    .with_ambient(0.15)
    .with_background(Color::from_hex(0x101018))
    .with_object(ball);

    SceneSetup {
        camera_position: Vec3::new(0.0, 0.0, 140.0),
        scene,
    }
}

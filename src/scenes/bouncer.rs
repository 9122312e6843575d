use glam::Vec3;

use super::SceneSetup;
use crate::math::Color;
use crate::motion::{Bounce, Kinematics};
use crate::scene::Scene;
use crate::types::{Geometry, Light, Material, Renderable};

pub const UPPER: f32 = 70.0;
pub const LOWER: f32 = -70.0;
pub const STEP: f32 = 1.0;

/// Single sphere moving up and down, new color at each turn
pub fn create_bouncer_scene() -> SceneSetup {
    let ball = Renderable::new(
        "ball",
        Geometry::sphere(10.0, 32, 16),
        Material::standard(Color::from_hex(0x44aa88)),
    )
    .with_kinematics(
        Kinematics::stationary().with_vertical(Bounce::new(STEP, LOWER, UPPER).with_recolor()),
    );

    let scene = Scene::new(
        "bouncer",
        Light::directional(Color::WHITE, 1.0, Vec3::new(-1.0, 2.0, 4.0)),
    )
    .with_ambient(0.1)
    .with_object(ball);

    SceneSetup {
        camera_position: Vec3::new(0.0, 0.0, 100.0),
        scene,
    }
}

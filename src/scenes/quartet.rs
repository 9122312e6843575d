use glam::Vec3;

use super::common::palette_color;
use super::SceneSetup;
use crate::math::Color;
use crate::motion::{Axis, Bounce, Kinematics, Spin};
use crate::scene::Scene;
use crate::texture::TextureLoader;
use crate::types::{Geometry, Light, Material, Renderable};

const CRATE_TEXTURE: &str = "textures/crate.jpg";

/// Two spheres and two boxes, each with its own motion
pub fn create_quartet_scene(textures: &TextureLoader) -> SceneSetup {
    let sun = Renderable::new(
        "sun",
        Geometry::sphere(8.0, 32, 16),
        Material::standard(palette_color(0, 0.7, 0.9)),
    )
    .at(Vec3::new(-30.0, 0.0, 0.0))
    .with_kinematics(
        Kinematics::stationary()
            .with_spin(Spin::new(0.3, &[Axis::Y]))
            .with_vertical(Bounce::new(0.5, -40.0, 40.0).with_recolor()),
    );

    let moon = Renderable::new(
        "moon",
        Geometry::sphere(5.0, 24, 12),
        Material::standard(palette_color(1, 0.7, 0.9)),
    )
    .at(Vec3::new(30.0, 0.0, 0.0))
    .with_kinematics(
        Kinematics::stationary()
            .with_spin(Spin::new(0.8, &[Axis::X]))
            .with_vertical(Bounce::new(0.25, -25.0, 25.0).with_recolor())
            .with_horizontal(Bounce::new(0.75, -60.0, 60.0)),
    );

    let crate_box = Renderable::new(
        "crate",
        Geometry::cube(10.0),
        Material::standard(Color::WHITE).with_map(textures.load(CRATE_TEXTURE)),
    )
    .at(Vec3::new(0.0, 20.0, -10.0))
    .with_kinematics(
        Kinematics::stationary()
            .with_spin(Spin::tumble(0.4))
            .with_horizontal(Bounce::new(1.0, -50.0, 50.0)),
    );

    let block = Renderable::new(
        "block",
        Geometry::cube(6.0),
        Material::standard(palette_color(2, 0.7, 0.9)),
    )
    .at(Vec3::new(0.0, -25.0, 0.0))
    .with_kinematics(
        Kinematics::stationary()
            .with_spin(Spin::new(1.0, &[Axis::Z]))
            .with_vertical(Bounce::new(1.5, -30.0, 30.0).with_recolor()),
    );

    let scene = Scene::new(
        "quartet",
        Light::point(Color::WHITE, 1.0, Vec3::new(0.0, 50.0, 100.0)),
    )
    .with_ambient(0.2)
    .with_object(sun)
    .with_object(moon)
    .with_object(crate_box)
    .with_object(block);

    SceneSetup {
        camera_position: Vec3::new(0.0, 0.0, 120.0),
        scene,
    }
}

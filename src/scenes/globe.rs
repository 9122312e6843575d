use glam::Vec3;

use super::SceneSetup;
use crate::math::Color;
use crate::motion::{Kinematics, Spin};
use crate::scene::Scene;
use crate::texture::TextureLoader;
use crate::types::{Geometry, Light, Material, Renderable};

const RADIUS: f32 = 10.0;
const WIDTH_SEGMENTS: u32 = 64;
const HEIGHT_SEGMENTS: u32 = 32;
const SPIN_RATE: f32 = 0.5;
const TEXTURE: &str = "textures/gb3.jpg";

/// Textured sphere tumbling about x, y and z
pub fn create_globe_scene(textures: &TextureLoader) -> SceneSetup {
    let material = Material::basic(Color::WHITE).with_map(textures.load(TEXTURE));

    let globe = Renderable::new(
        "globe",
        Geometry::sphere(RADIUS, WIDTH_SEGMENTS, HEIGHT_SEGMENTS),
        material,
    )
    .with_kinematics(Kinematics::stationary().with_spin(Spin::tumble(SPIN_RATE)));

    let scene = Scene::new(
        "globe",
        Light::point(Color::WHITE, 0.1, Vec3::new(2.0, 3.0, 4.0)),
    )
    .with_object(globe);

    SceneSetup {
        camera_position: Vec3::new(0.0, 0.0, 30.0),
        scene,
    }
}

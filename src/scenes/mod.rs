mod bouncer;
mod common;
mod drifter;
mod globe;
mod quartet;

use clap::ValueEnum;
use glam::Vec3;

use crate::scene::Scene;
use crate::texture::TextureLoader;

pub use bouncer::create_bouncer_scene;
pub use drifter::create_drifter_scene;
pub use globe::create_globe_scene;
pub use quartet::create_quartet_scene;

/// Which scene a session animates
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneKind {
    /// Textured sphere tumbling on all three axes
    Globe,
    /// Sphere bouncing vertically, recolored on every flip
    Bouncer,
    /// Spinning sphere bouncing on two axes
    Drifter,
    /// Four independently moving objects
    Quartet,
}

/// Scene contents plus where its camera sits
#[derive(Debug, Clone)]
pub struct SceneSetup {
    pub camera_position: Vec3,
    pub scene: Scene,
}

pub fn create_scene(kind: SceneKind, textures: &TextureLoader) -> SceneSetup {
    match kind {
        SceneKind::Globe => create_globe_scene(textures),
        SceneKind::Bouncer => create_bouncer_scene(),
        SceneKind::Drifter => create_drifter_scene(),
        SceneKind::Quartet => create_quartet_scene(textures),
    }
}

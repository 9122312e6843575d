#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;
use scene_animator::camera::PerspectiveCamera;
use scene_animator::math::Color;
use scene_animator::motion::{Bounce, Kinematics};
use scene_animator::scene::Scene;
use scene_animator::traits::Renderer;
use scene_animator::types::{Geometry, Light, Material, Renderable};
use scene_animator::{Result, SceneSetup};

/// Everything a `RecordingRenderer` was asked to do
#[derive(Debug, Default)]
pub struct RenderLog {
    pub set_size_calls: u32,
    pub set_ratio_calls: u32,
    pub renders: u32,
    pub last_aspect: Option<f32>,
}

/// Renderer that draws nothing and records its calls
pub struct RecordingRenderer {
    size: (u32, u32),
    ratio: f32,
    pub log: Rc<RefCell<RenderLog>>,
}

impl RecordingRenderer {
    pub fn with_log() -> (Self, Rc<RefCell<RenderLog>>) {
        let log = Rc::new(RefCell::new(RenderLog::default()));
        let renderer = Self {
            size: (0, 0),
            ratio: 1.0,
            log: log.clone(),
        };
        (renderer, log)
    }
}

impl Renderer for RecordingRenderer {
    fn set_size(&mut self, width: u32, height: u32) {
        self.size = (width, height);
        self.log.borrow_mut().set_size_calls += 1;
    }

    fn set_pixel_ratio(&mut self, ratio: f32) {
        self.ratio = ratio;
        self.log.borrow_mut().set_ratio_calls += 1;
    }

    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn pixel_ratio(&self) -> f32 {
        self.ratio
    }

    fn render(&mut self, _scene: &Scene, camera: &PerspectiveCamera) -> Result<()> {
        let mut log = self.log.borrow_mut();
        log.renders += 1;
        log.last_aspect = Some(camera.aspect());
        Ok(())
    }
}

/// One sphere at the origin bouncing on y between `-limit` and `limit`
pub fn bouncing_ball(limit: f32, step: f32, recolor: bool) -> SceneSetup {
    let mut bounce = Bounce::new(step, -limit, limit);
    if recolor {
        bounce = bounce.with_recolor();
    }
    let ball = Renderable::new(
        "ball",
        Geometry::sphere(1.0, 16, 8),
        Material::standard(Color::from_hex(0x808080)),
    )
    .with_kinematics(Kinematics::stationary().with_vertical(bounce));

    SceneSetup {
        camera_position: Vec3::new(0.0, 0.0, 100.0),
        scene: Scene::new(
            "ball",
            Light::directional(Color::WHITE, 1.0, Vec3::new(0.0, 0.0, 1.0)),
        )
        .with_object(ball),
    }
}

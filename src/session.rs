use serde::Serialize;

use crate::camera::{CameraSnapshot, PerspectiveCamera};
use crate::core::{clamp_pixel_ratio, FrameInfo, SoftwareRenderer, Viewport};
use crate::error::{AnimatorError, Result};
use crate::math::{random_color, Entropy, HashEntropy};
use crate::motion::Heading;
use crate::scene::{Scene, SceneSnapshot};
use crate::scenes::SceneSetup;
use crate::traits::{Canvas, Renderer};

/// Build a session drawing into `canvas` with an antialiased software renderer.
///
/// A missing canvas is fatal: nothing else can run without a drawable surface.
pub fn initialize<C: Canvas>(
    canvas: Option<C>,
    viewport: Viewport,
    device_pixel_ratio: f32,
    setup: SceneSetup,
) -> Result<Session<SoftwareRenderer<C>>> {
    let canvas = canvas.ok_or(AnimatorError::MissingCanvas)?;
    Ok(Session::with_renderer(
        SoftwareRenderer::new(canvas, true),
        viewport,
        device_pixel_ratio,
        setup,
    ))
}

/// One animated scene: camera, renderer, renderables and the random source for recoloring
pub struct Session<R: Renderer> {
    viewport: Viewport,
    camera: PerspectiveCamera,
    scene: Scene,
    renderer: R,
    entropy: Box<dyn Entropy>,
    ticks: u64,
}

impl<R: Renderer> Session<R> {
    pub fn with_renderer(
        mut renderer: R,
        viewport: Viewport,
        device_pixel_ratio: f32,
        setup: SceneSetup,
    ) -> Self {
        let aspect = if viewport.is_empty() {
            log::warn!(
                "Starting with empty {}x{} viewport",
                viewport.width,
                viewport.height
            );
            1.0
        } else {
            viewport.aspect()
        };
        let camera = PerspectiveCamera::new(aspect, setup.camera_position);

        renderer.set_size(viewport.width, viewport.height);
        renderer.set_pixel_ratio(clamp_pixel_ratio(device_pixel_ratio));

        log::info!(
            "Scene '{}' with {} object(s), viewport {}x{} @ {}x",
            setup.scene.name,
            setup.scene.objects.len(),
            viewport.width,
            viewport.height,
            renderer.pixel_ratio()
        );

        Self {
            viewport,
            camera,
            scene: setup.scene,
            renderer,
            entropy: Box::new(HashEntropy::new()),
            ticks: 0,
        }
    }

    /// Replace the random source used for recoloring
    pub fn with_entropy(mut self, entropy: impl Entropy + 'static) -> Self {
        self.entropy = Box::new(entropy);
        self
    }

    /// Apply a new viewport size and device pixel ratio.
    ///
    /// Zero-area viewports (a minimised window) are ignored.
    pub fn resize(&mut self, viewport: Viewport, device_pixel_ratio: f32) {
        if viewport.is_empty() {
            log::debug!(
                "Ignoring resize to {}x{}",
                viewport.width,
                viewport.height
            );
            return;
        }

        self.viewport = viewport;
        self.camera.set_aspect(viewport.aspect());
        self.renderer.set_size(viewport.width, viewport.height);
        self.renderer
            .set_pixel_ratio(clamp_pixel_ratio(device_pixel_ratio));

        log::debug!(
            "Resized to {}x{} @ {}x",
            viewport.width,
            viewport.height,
            self.renderer.pixel_ratio()
        );
    }

    /// Apply a window's physical size and scale factor.
    ///
    /// The scale factor is the device pixel ratio; the viewport is the
    /// logical size it implies.
    pub fn resize_physical(&mut self, width: u32, height: u32, scale_factor: f64) {
        self.resize(
            Viewport::from_physical(width, height, scale_factor),
            scale_factor as f32,
        );
    }

    /// Advance every object to `frame.time` and draw the result
    pub fn tick(&mut self, frame: &FrameInfo) -> Result<()> {
        for object in &mut self.scene.objects {
            let update = object
                .kinematics
                .update(&mut object.transform, frame.time);

            if update.recolor {
                object.material.color = random_color(self.entropy.as_mut());
            }

            if update.vertical_flip {
                if let Some(bounce) = &object.kinematics.vertical {
                    log::debug!(
                        "{} (frame {})",
                        flip_message(&object.name, bounce.heading, 'y', object.transform.position.y),
                        frame.number
                    );
                }
            }
            if update.horizontal_flip {
                if let Some(bounce) = &object.kinematics.horizontal {
                    log::debug!(
                        "{} (frame {})",
                        flip_message(&object.name, bounce.heading, 'x', object.transform.position.x),
                        frame.number
                    );
                }
            }
            if update.recolor {
                log::debug!("{} recolored to {}", object.name, object.material.color);
            }
        }

        log::trace!("Frame {} at t={:.3}s", frame.number, frame.time);
        self.ticks += 1;

        self.renderer.render(&self.scene, &self.camera)
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Ticks run so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            ticks: self.ticks,
            viewport: self.viewport,
            pixel_ratio: self.renderer.pixel_ratio(),
            camera: self.camera.snapshot(),
            scene: self.scene.snapshot(),
        }
    }
}

/// Describe a heading flip; `heading` is the heading after the flip
fn flip_message<H: Heading>(name: &str, heading: H, axis: char, position: f32) -> String {
    format!(
        "{} flipped {:?} -> {:?} at {}={}",
        name,
        heading.reversed(),
        heading,
        axis,
        position
    )
}

/// Serializable state of a whole session, written by `--report`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub ticks: u64,
    pub viewport: Viewport,
    pub pixel_ratio: f32,
    pub camera: CameraSnapshot,
    pub scene: SceneSnapshot,
}

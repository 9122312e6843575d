use crate::camera::PerspectiveCamera;
use crate::error::Result;
use crate::scene::Scene;

/// Scene renderer bound to a canvas
pub trait Renderer {
    /// Set the drawable size in device-independent pixels
    fn set_size(&mut self, width: u32, height: u32);

    /// Set the device pixel ratio used to size the backing buffer
    fn set_pixel_ratio(&mut self, ratio: f32);

    /// Current drawable size in device-independent pixels
    fn size(&self) -> (u32, u32);

    fn pixel_ratio(&self) -> f32;

    /// Draw the scene as seen from the camera
    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) -> Result<()>;
}

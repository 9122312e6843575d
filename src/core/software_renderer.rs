use glam::{Mat3, Mat4, Vec3};
use rayon::prelude::*;

use crate::camera::PerspectiveCamera;
use crate::core::{FrameBuffer, Viewport, MAX_PIXEL_RATIO};
use crate::error::Result;
use crate::math::{aabb_normal, intersect_aabb, intersect_sphere, Color, Ray};
use crate::scene::Scene;
use crate::traits::{Canvas, Renderer};
use crate::types::{Geometry, Renderable, Shading};

/// Sub-pixel sample positions for 2x2 ordered supersampling
const SUPERSAMPLE_OFFSETS: [(f32, f32); 4] = [(0.25, 0.25), (0.75, 0.25), (0.25, 0.75), (0.75, 0.75)];
const CENTER_OFFSET: [(f32, f32); 1] = [(0.5, 0.5)];

/// Object with its transforms resolved for one frame
struct Prepared<'a> {
    object: &'a Renderable,
    world_to_local: Mat4,
    rotation: Mat3,
}

struct Hit<'a> {
    t: f32,
    prepared: &'a Prepared<'a>,
    local_point: Vec3,
}

/// CPU ray caster that draws into a backing buffer and presents it to a canvas
///
/// The backing buffer is `floor(width * ratio) x floor(height * ratio)`. With
/// antialiasing on, each pixel averages four sub-samples, unless the pixel
/// ratio is already at its cap and the buffer holds 2x2 pixels per logical
/// pixel. Rows are traced in parallel.
pub struct SoftwareRenderer<C: Canvas> {
    canvas: C,
    width: u32,
    height: u32,
    pixel_ratio: f32,
    antialias: bool,
    frame: FrameBuffer,
    frames_rendered: u64,
}

impl<C: Canvas> SoftwareRenderer<C> {
    pub fn new(canvas: C, antialias: bool) -> Self {
        Self {
            canvas,
            width: 0,
            height: 0,
            pixel_ratio: 1.0,
            antialias,
            frame: FrameBuffer::new(0, 0),
            frames_rendered: 0,
        }
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    /// Last frame drawn
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn antialias(&self) -> bool {
        self.antialias
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Backing buffer dimensions in physical pixels
    pub fn buffer_size(&self) -> (u32, u32) {
        Viewport::new(self.width, self.height).scaled(self.pixel_ratio)
    }

    fn reallocate(&mut self) {
        let (width, height) = self.buffer_size();
        self.frame.resize(width, height);
    }

    /// Rays traced per backing-buffer pixel
    pub fn samples_per_pixel(&self) -> usize {
        self.sample_offsets().len()
    }

    fn sample_offsets(&self) -> &'static [(f32, f32)] {
        if self.antialias && self.pixel_ratio < MAX_PIXEL_RATIO {
            &SUPERSAMPLE_OFFSETS
        } else {
            &CENTER_OFFSET
        }
    }
}

impl<C: Canvas> Renderer for SoftwareRenderer<C> {
    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.reallocate();
    }

    fn set_pixel_ratio(&mut self, ratio: f32) {
        self.pixel_ratio = ratio;
        self.reallocate();
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) -> Result<()> {
        let (width, height) = self.frame.dimensions();
        if width == 0 || height == 0 {
            log::trace!("Skipping render into empty {}x{} buffer", width, height);
            return Ok(());
        }

        let prepared: Vec<Prepared> = scene
            .objects
            .iter()
            .map(|object| {
                let matrix = object.transform.matrix();
                Prepared {
                    object,
                    world_to_local: matrix.inverse(),
                    rotation: Mat3::from_mat4(matrix),
                }
            })
            .collect();

        let offsets = self.sample_offsets();
        let weight = 1.0 / offsets.len() as f32;

        self.frame
            .pixels_mut()
            .par_chunks_mut(width as usize)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, pixel) in row.iter_mut().enumerate() {
                    let color = offsets.iter().fold(Vec3::ZERO, |acc, (ox, oy)| {
                        let ndc_x = 2.0 * (x as f32 + ox) / width as f32 - 1.0;
                        let ndc_y = 1.0 - 2.0 * (y as f32 + oy) / height as f32;
                        let ray = camera.primary_ray(ndc_x, ndc_y);
                        acc + trace(scene, camera, &prepared, &ray) * weight
                    });
                    let rgb = Color::from_vec3(color);
                    *pixel = [rgb.r(), rgb.g(), rgb.b(), 255];
                }
            });

        self.frames_rendered += 1;
        self.canvas.present(&self.frame)
    }
}

/// Color seen along one camera ray
fn trace(scene: &Scene, camera: &PerspectiveCamera, prepared: &[Prepared], ray: &Ray) -> Vec3 {
    let Some(hit) = nearest_hit(camera, prepared, ray) else {
        return scene.background.to_vec3();
    };

    let object = hit.prepared.object;
    let (local_normal, uv) = surface(&object.geometry, hit.local_point);

    let tint = object.material.color.to_vec3();
    let base = match &object.material.map {
        Some(map) => tint * map.sample(uv[0], uv[1]),
        None => tint,
    };

    match object.material.shading {
        Shading::Basic => base,
        Shading::Standard => {
            let normal = (hit.prepared.rotation * local_normal).normalize_or_zero();
            let to_light = scene.light.direction_from(ray.at(hit.t));
            let diffuse = normal.dot(to_light).max(0.0) * scene.light.intensity;
            base * (Vec3::splat(scene.ambient) + scene.light.color.to_vec3() * diffuse)
        }
    }
}

fn nearest_hit<'a>(camera: &PerspectiveCamera, prepared: &'a [Prepared<'a>], ray: &Ray) -> Option<Hit<'a>> {
    let mut nearest: Option<Hit<'a>> = None;

    for entry in prepared {
        // Transforms are rigid, so distances along the local ray match world distances
        let local_ray = Ray::new(
            entry.world_to_local.transform_point3(ray.origin),
            entry.world_to_local.transform_vector3(ray.direction),
        );

        let hit = match entry.object.geometry {
            Geometry::Sphere { radius, .. } => intersect_sphere(&local_ray, radius),
            Geometry::Box { width, height, depth } => {
                let half = Vec3::new(width, height, depth) * 0.5;
                intersect_aabb(&local_ray, -half, half)
            }
        };

        let Some(t) = hit else { continue };
        if !camera.in_depth_range(ray, t) {
            continue;
        }
        if nearest.as_ref().is_some_and(|n| n.t <= t) {
            continue;
        }

        nearest = Some(Hit {
            t,
            prepared: entry,
            local_point: local_ray.at(t),
        });
    }

    nearest
}

/// Local-space normal and texture coordinates at a surface point
fn surface(geometry: &Geometry, point: Vec3) -> (Vec3, [f32; 2]) {
    match *geometry {
        Geometry::Sphere { .. } => {
            let normal = point.normalize_or_zero();
            let u = 0.5 + normal.z.atan2(normal.x) / (2.0 * std::f32::consts::PI);
            let v = 0.5 - normal.y.clamp(-1.0, 1.0).asin() / std::f32::consts::PI;
            (normal, [u, v])
        }
        Geometry::Box { width, height, depth } => {
            let size = Vec3::new(width, height, depth);
            let normal = aabb_normal(point, size * 0.5);
            let rel = point / size + Vec3::splat(0.5);
            let uv = if normal.x != 0.0 {
                [rel.z, 1.0 - rel.y]
            } else if normal.y != 0.0 {
                [rel.x, rel.z]
            } else {
                [rel.x, 1.0 - rel.y]
            };
            (normal, uv)
        }
    }
}

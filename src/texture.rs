use std::path::{Path, PathBuf};
use std::sync::Arc;

use glam::Vec3;

use crate::core::pixel_count;
use crate::error::Result;

/// Decoded RGBA8 image sampled by texture-mapped materials
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl Texture {
    /// Build from raw pixels; returns `None` when the buffer size doesn't match
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<[u8; 4]>) -> Option<Self> {
        (width > 0 && height > 0 && pixels.len() == pixel_count(width, height)).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn open(path: &Path) -> Result<Self> {
        let image = image::open(path)?.to_rgba8();
        let (width, height) = image.dimensions();
        let pixels = image.pixels().map(|p| p.0).collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Nearest-texel lookup; `u` wraps, `v` clamps. v = 0 is the top row.
    pub fn sample(&self, u: f32, v: f32) -> Vec3 {
        let u = u.rem_euclid(1.0);
        let v = v.clamp(0.0, 1.0);
        let x = ((u * self.width as f32) as u32).min(self.width - 1);
        let y = ((v * self.height as f32) as u32).min(self.height - 1);
        let [r, g, b, _] = self.pixels[y as usize * self.width as usize + x as usize];
        Vec3::new(r as f32, g as f32, b as f32) / 255.0
    }
}

/// Best-effort texture fetches relative to an asset root
#[derive(Debug, Clone)]
pub struct TextureLoader {
    root: PathBuf,
}

impl TextureLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load a texture, or `None` if it can't be read.
    ///
    /// Failure is not an error: the material falls back to its plain color.
    pub fn load(&self, relative: &str) -> Option<Arc<Texture>> {
        let path = self.root.join(relative);
        match Texture::open(&path) {
            Ok(texture) => {
                log::info!(
                    "Loaded texture {} ({}x{})",
                    path.display(),
                    texture.width,
                    texture.height
                );
                Some(Arc::new(texture))
            }
            Err(err) => {
                log::warn!("Texture {} unavailable, drawing untextured: {}", path.display(), err);
                None
            }
        }
    }
}

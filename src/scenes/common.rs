use glam::Vec3;

use crate::math::{hsv_to_rgb, Color};

/// Well-spread hue for the n-th object of a scene (golden-ratio stepping)
pub fn palette_hue(index: u32) -> f32 {
    (index as f32 * 0.618033988749895) % 1.0
}

pub fn palette_color(index: u32, saturation: f32, value: f32) -> Color {
    Color::from_vec3(Vec3::from(hsv_to_rgb(palette_hue(index), saturation, value)))
}

use serde::Serialize;

/// Upper bound applied to the device pixel ratio before sizing the backing buffer
pub const MAX_PIXEL_RATIO: f32 = 2.0;

/// Drawable area in device-independent pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Viewport {
    /// Width in device-independent pixels
    pub width: u32,
    /// Height in device-independent pixels
    pub height: u32,
}

impl Viewport {
    /// Create new viewport
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Logical viewport for a window's physical size at the given scale factor.
    ///
    /// Rounds like winit's `PhysicalSize::to_logical`. A non-positive or
    /// non-finite scale factor is treated as 1.
    pub fn from_physical(width: u32, height: u32, scale_factor: f64) -> Self {
        let scale = if scale_factor.is_finite() && scale_factor > 0.0 {
            scale_factor
        } else {
            1.0
        };
        Self {
            width: (width as f64 / scale).round() as u32,
            height: (height as f64 / scale).round() as u32,
        }
    }

    /// Width over height, as fed to the camera projection
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// True when either side is zero (minimised window)
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Backing buffer dimensions at the given pixel ratio, floored
    pub fn scaled(&self, pixel_ratio: f32) -> (u32, u32) {
        (
            (self.width as f32 * pixel_ratio).floor() as u32,
            (self.height as f32 * pixel_ratio).floor() as u32,
        )
    }
}

/// Device pixel ratio capped at [`MAX_PIXEL_RATIO`]. Non-positive ratios fall back to 1.
pub fn clamp_pixel_ratio(device_pixel_ratio: f32) -> f32 {
    if device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(MAX_PIXEL_RATIO)
    } else {
        1.0
    }
}

use std::path::Path;

use crate::core::FrameBuffer;
use crate::error::{AnimatorError, Result};
use crate::traits::Canvas;

/// In-memory canvas for headless runs: keeps the most recent frame
#[derive(Debug, Default)]
pub struct OffscreenCanvas {
    last_frame: Option<FrameBuffer>,
    presented: u64,
}

impl OffscreenCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> Option<&FrameBuffer> {
        self.last_frame.as_ref()
    }

    /// Number of frames presented so far
    pub fn presented(&self) -> u64 {
        self.presented
    }

    /// Write the most recent frame as a PNG. Returns `false` if nothing was presented yet.
    pub fn save_png(&self, path: &Path) -> Result<bool> {
        let Some(frame) = &self.last_frame else {
            return Ok(false);
        };

        let (width, height) = frame.dimensions();
        let image = image::RgbaImage::from_raw(width, height, frame.as_bytes().to_vec()).ok_or(
            AnimatorError::FrameSize {
                width,
                height,
                expected: (width * height * 4) as usize,
                actual: frame.byte_len(),
            },
        )?;
        image.save(path)?;
        Ok(true)
    }
}

impl Canvas for OffscreenCanvas {
    fn present(&mut self, frame: &FrameBuffer) -> Result<()> {
        self.last_frame = Some(frame.clone());
        self.presented += 1;
        Ok(())
    }
}

use crate::core::FrameBuffer;
use crate::error::Result;

/// Drawable surface a renderer presents finished frames to
pub trait Canvas {
    /// Display a finished frame
    fn present(&mut self, frame: &FrameBuffer) -> Result<()>;
}

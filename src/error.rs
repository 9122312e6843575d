use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnimatorError>;

/// Failures surfaced by the animator and its hosts
#[derive(Debug, Error)]
pub enum AnimatorError {
    /// No drawable surface was supplied at startup; nothing can be rendered
    #[error("no drawable canvas available")]
    MissingCanvas,

    #[error("failed to find a compatible GPU adapter: {0}")]
    Adapter(String),

    #[error("failed to create GPU device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    #[error("failed to create window surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("failed to acquire surface texture: {0}")]
    Surface(#[from] wgpu::SurfaceError),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A presented frame does not match the canvas it is drawn into
    #[error("frame buffer is {actual} bytes, expected {expected} for {width}x{height}")]
    FrameSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

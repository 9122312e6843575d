mod clock;
mod frame;
mod gpu_context;
mod offscreen;
mod scheduler;
mod software_renderer;
mod surface_canvas;
mod timer;
mod viewport;

pub use clock::{ManualClock, SteppedClock, SystemClock};
pub use frame::{pixel_count, FrameBuffer, FrameInfo};
pub use gpu_context::GpuContext;
pub use offscreen::OffscreenCanvas;
pub use scheduler::{FrameBudget, Unbounded};
pub use software_renderer::SoftwareRenderer;
pub use surface_canvas::SurfaceCanvas;
pub use timer::{EveryNTicks, FpsMeter};
pub use viewport::{clamp_pixel_ratio, Viewport, MAX_PIXEL_RATIO};

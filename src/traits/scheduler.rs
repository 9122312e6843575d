/// Per-frame callback source - decides whether another tick runs
///
/// Returning `false` stops the loop, the equivalent of the host tearing the page down.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> bool;
}

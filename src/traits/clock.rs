/// Monotonic elapsed-time source read once per tick
pub trait Clock {
    /// Seconds since the clock started
    fn elapsed_time(&mut self) -> f32;
}

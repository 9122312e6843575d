use crate::core::FrameInfo;
use crate::error::Result;
use crate::session::Session;
use crate::traits::{Clock, FrameScheduler, Renderer};

/// Drives a session one tick per granted frame.
///
/// The clock is read exactly once per frame. A tick always finishes before the
/// scheduler is asked for the next one.
pub struct AnimationLoop<C: Clock, S: FrameScheduler> {
    clock: C,
    scheduler: S,
    frames: u64,
    last_time: f32,
}

impl<C: Clock, S: FrameScheduler> AnimationLoop<C, S> {
    pub fn new(clock: C, scheduler: S) -> Self {
        Self {
            clock,
            scheduler,
            frames: 0,
            last_time: 0.0,
        }
    }

    /// Timing for the next frame, or `None` once the scheduler stops granting frames
    pub fn next_frame(&mut self) -> Option<FrameInfo> {
        if !self.scheduler.request_frame() {
            return None;
        }

        let time = self.clock.elapsed_time();
        let delta = (time - self.last_time).max(0.0);
        self.last_time = time;

        let frame = FrameInfo::new(self.frames, time, delta);
        self.frames += 1;
        Some(frame)
    }

    /// Tick `session` until the scheduler stops; returns the number of frames run
    pub fn run<R: Renderer>(&mut self, session: &mut Session<R>) -> Result<u64> {
        let mut count = 0;
        while let Some(frame) = self.next_frame() {
            session.tick(&frame)?;
            count += 1;
        }
        log::debug!("Animation loop stopped after {} frame(s)", count);
        Ok(count)
    }

    /// Frames handed out so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}

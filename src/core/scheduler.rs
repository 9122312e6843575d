use crate::traits::FrameScheduler;

/// Grants frames forever; the host stops the loop from outside
#[derive(Debug, Clone, Copy, Default)]
pub struct Unbounded;

impl FrameScheduler for Unbounded {
    fn request_frame(&mut self) -> bool {
        true
    }
}

/// Grants a fixed number of frames, then stops
#[derive(Debug, Clone, Copy)]
pub struct FrameBudget {
    remaining: u64,
}

impl FrameBudget {
    pub fn new(frames: u64) -> Self {
        Self { remaining: frames }
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl FrameScheduler for FrameBudget {
    fn request_frame(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_always_grants() {
        let mut scheduler = Unbounded;
        assert!((0..1000).all(|_| scheduler.request_frame()));
    }

    #[test]
    fn budget_grants_exactly_n() {
        let mut budget = FrameBudget::new(3);
        assert!(budget.request_frame());
        assert!(budget.request_frame());
        assert!(budget.request_frame());
        assert!(!budget.request_frame());
        assert!(!budget.request_frame());
        assert_eq!(budget.remaining(), 0);
    }

    #[test]
    fn empty_budget_never_grants() {
        let mut budget = FrameBudget::new(0);
        assert!(!budget.request_frame());
    }
}

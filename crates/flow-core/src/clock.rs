use instant::Instant;
use std::time::Duration;

/// Monotonic elapsed-time source for the shader `time` uniform.
#[derive(Clone, Debug)]
pub struct FrameClock {
    start: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self { start }
    }

    /// Time since start; a timestamp from before start reads as zero.
    pub fn elapsed_at(&self, now: Instant) -> Duration {
        if now > self.start {
            now - self.start
        } else {
            Duration::ZERO
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

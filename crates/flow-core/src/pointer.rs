use glam::Vec2;
use instant::Instant;
use std::time::Duration;

use crate::constants::POINTER_IDLE_RESET_MS;

/// Map client coordinates to `[-1, 1]` with +y up.
#[inline]
pub fn normalize_client(client_x: f32, client_y: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (client_x / width) * 2.0 - 1.0,
        (-client_y / height) * 2.0 + 1.0,
    )
}

/// Last pointer position with a debounced snap back to the origin.
///
/// Every input moves the reset deadline forward; [`PointerTracker::poll`]
/// clears the position once the deadline has passed.
#[derive(Clone, Debug)]
pub struct PointerTracker {
    position: Vec2,
    deadline: Option<Instant>,
    idle_reset: Duration,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(Duration::from_millis(POINTER_IDLE_RESET_MS))
    }
}

impl PointerTracker {
    pub fn new(idle_reset: Duration) -> Self {
        Self {
            position: Vec2::ZERO,
            deadline: None,
            idle_reset,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn on_input(&mut self, position: Vec2, now: Instant) {
        self.position = position;
        self.deadline = Some(now + self.idle_reset);
    }

    /// Returns true if this call reset the pointer.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.position = Vec2::ZERO;
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

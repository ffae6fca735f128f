use crate::constants::{
    center_offset_vec3, DEFAULT_SPEED, OPACITY_RAMP_FACTOR, SAMPLE_INTERVAL, WINDOW_SIZE,
};
use glam::Vec3;

/// Tunables for sampling and cycling. `Default` reproduces the reference look.
#[derive(Clone, Debug)]
pub struct FlowParams {
    pub sample_interval: f32,
    pub window_size: usize,
    pub speed: usize,
    pub center_offset: Vec3,
    /// Opacity at window offset `i` is `i / (opacity_ramp * window_size)`.
    pub opacity_ramp: f32,
}

impl Default for FlowParams {
    fn default() -> Self {
        Self {
            sample_interval: SAMPLE_INTERVAL,
            window_size: WINDOW_SIZE,
            speed: DEFAULT_SPEED,
            center_offset: center_offset_vec3(),
            opacity_ramp: OPACITY_RAMP_FACTOR,
        }
    }
}

impl FlowParams {
    /// Opacity written for offset `i` inside a window.
    #[inline]
    pub fn window_opacity(&self, i: usize) -> f32 {
        i as f32 / (self.opacity_ramp * self.window_size as f32)
    }

    pub fn capacity_for(&self, trace_count: usize) -> usize {
        trace_count * self.window_size
    }
}

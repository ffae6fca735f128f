//! Per-frame point cycling.
//!
//! Each trace owns a contiguous range of `window_size` slots in the
//! [`VisualBuffer`], in trace order. Every call advances each trace's cursor
//! and rewrites its range with the next `window_size` points along the path,
//! wrapping at the end, with opacity ramping up across the window. Together
//! with the additive point shader this reads as light flowing along the path.

use crate::buffer::VisualBuffer;
use crate::params::FlowParams;
use crate::trace::PathTrace;

/// Advance every trace and rewrite every buffer slot exactly once.
///
/// Returns the number of slots written, which always equals
/// `traces.len() * params.window_size`. Empty traces do not advance; their
/// slots are blanked (centering origin, zero opacity).
///
/// # Panics
/// If the buffer is smaller than `traces.len() * params.window_size`.
pub fn cycle(traces: &mut [PathTrace], buffer: &mut VisualBuffer, params: &FlowParams) -> usize {
    let window = params.window_size;
    assert!(
        buffer.capacity() >= traces.len() * window,
        "visual buffer holds {} slots, {} traces need {}",
        buffer.capacity(),
        traces.len(),
        traces.len() * window
    );

    let mut slot = 0usize;
    for trace in traces.iter_mut() {
        trace.advance();
        for i in 0..window {
            match trace.window_index(i) {
                Some(index) => buffer.write(slot, trace.points[index], params.window_opacity(i)),
                None => buffer.write(slot, params.center_offset, 0.0),
            }
            slot += 1;
        }
    }
    slot
}

/// Owns the traces and the buffer for a running visualization.
///
/// The trace set is fixed at construction, so the buffer always holds
/// exactly `traces * window_size` slots.
pub struct PointCycler {
    traces: Vec<PathTrace>,
    buffer: VisualBuffer,
    params: FlowParams,
}

impl PointCycler {
    /// Allocate a buffer sized for `traces` and scatter it with `seed`.
    pub fn new(traces: Vec<PathTrace>, params: FlowParams, seed: u64) -> Self {
        let mut buffer = VisualBuffer::new(params.capacity_for(traces.len()));
        buffer.scatter(seed);
        log::info!(
            "[cycler] traces={} window={} capacity={}",
            traces.len(),
            params.window_size,
            buffer.capacity()
        );
        Self {
            traces,
            buffer,
            params,
        }
    }

    pub fn tick(&mut self) -> usize {
        cycle(&mut self.traces, &mut self.buffer, &self.params)
    }

    pub fn buffer(&self) -> &VisualBuffer {
        &self.buffer
    }

    pub fn traces(&self) -> &[PathTrace] {
        &self.traces
    }

    /// Cursors and speeds can be adjusted in place; the set cannot grow.
    pub fn traces_mut(&mut self) -> &mut [PathTrace] {
        &mut self.traces
    }
}

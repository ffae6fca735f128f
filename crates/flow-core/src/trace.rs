use glam::Vec3;

use crate::params::FlowParams;
use crate::path::{PathError, PathGeometry};

/// One path discretized at equal arc-length steps.
///
/// Everything except `cursor` is fixed once sampling finishes.
#[derive(Clone, Debug, PartialEq)]
pub struct PathTrace {
    pub total_length: f32,
    pub points: Vec<Vec3>,
    pub speed: usize,
    pub cursor: usize,
}

impl PathTrace {
    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Move the cursor forward by `speed`, wrapping at `point_count`.
    ///
    /// Empty traces keep their cursor; there is nothing to wrap against.
    pub fn advance(&mut self) {
        let n = self.point_count();
        if n == 0 {
            return;
        }
        self.cursor = (self.cursor + self.speed) % n;
    }

    /// Index into `points` for offset `i` of the current window.
    #[inline]
    pub fn window_index(&self, i: usize) -> Option<usize> {
        let n = self.point_count();
        (n > 0).then(|| (self.cursor + i) % n)
    }
}

/// `floor(length / interval)`, zero for degenerate input.
pub fn point_count_for(length: f32, interval: f32) -> usize {
    if !(length.is_finite() && interval.is_finite()) || length <= 0.0 || interval <= 0.0 {
        return 0;
    }
    (length / interval).floor() as usize
}

pub fn sample_trace<G: PathGeometry>(
    path: &G,
    params: &FlowParams,
) -> Result<PathTrace, PathError> {
    let total_length = path.total_length();
    let count = point_count_for(total_length, params.sample_interval);
    let mut points = Vec::with_capacity(count);
    for i in 0..count {
        let at = total_length * (i as f32 / count as f32);
        let p = path.point_at_length(at)?;
        points.push(Vec3::new(p.x, p.y, 0.0) + params.center_offset);
    }
    Ok(PathTrace {
        total_length,
        points,
        speed: params.speed,
        cursor: 0,
    })
}

/// Sample every path in order. The first failing path aborts the whole set.
pub fn sample_traces<I>(paths: I, params: &FlowParams) -> Result<Vec<PathTrace>, PathError>
where
    I: IntoIterator,
    I::Item: PathGeometry,
{
    let traces = paths
        .into_iter()
        .map(|p| sample_trace(&p, params))
        .collect::<Result<Vec<_>, _>>()?;
    let empty = traces.iter().filter(|t| t.is_empty()).count();
    if empty > 0 {
        log::warn!(
            "[sampler] {} of {} paths produced no sample points",
            empty,
            traces.len()
        );
    }
    log::info!(
        "[sampler] traces={} points={}",
        traces.len(),
        traces.iter().map(PathTrace::point_count).sum::<usize>()
    );
    Ok(traces)
}

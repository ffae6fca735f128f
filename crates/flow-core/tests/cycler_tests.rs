// Host-side tests for the per-frame point cycler.

use flow_core::*;
use glam::{Vec2, Vec3};

struct Line {
    length: f32,
    y: f32,
}

impl PathGeometry for Line {
    fn total_length(&self) -> f32 {
        self.length
    }

    fn point_at_length(&self, distance: f32) -> Result<Vec2, PathError> {
        Ok(Vec2::new(distance, self.y))
    }
}

fn params() -> FlowParams {
    FlowParams {
        center_offset: Vec3::ZERO,
        ..FlowParams::default()
    }
}

/// Trace whose point `i` is `(i, tag, 0)`, handy for reading indices back.
fn indexed_trace(count: usize, tag: f32, speed: usize, cursor: usize) -> PathTrace {
    PathTrace {
        total_length: count as f32 * SAMPLE_INTERVAL,
        points: (0..count).map(|i| Vec3::new(i as f32, tag, 0.0)).collect(),
        speed,
        cursor,
    }
}

#[test]
fn every_slot_is_written_exactly_once() {
    let params = params();
    let mut traces = vec![
        indexed_trace(150, 1.0, 1, 0),
        indexed_trace(7, 2.0, 1, 0),
        indexed_trace(300, 3.0, 2, 0),
    ];
    let mut buffer = VisualBuffer::new(params.capacity_for(traces.len()));
    // poison so untouched slots stand out
    for slot in 0..buffer.capacity() {
        buffer.write(slot, Vec3::splat(f32::NAN), f32::NAN);
    }
    let written = cycle(&mut traces, &mut buffer, &params);
    assert_eq!(written, 3 * WINDOW_SIZE);
    assert_eq!(buffer.capacity(), written);
    assert!(buffer.positions().iter().all(|p| !p.is_nan()));
    assert!(buffer.opacities().iter().all(|a| !a.is_nan()));
    // each trace owns its own contiguous range
    for (t, tag) in [1.0, 2.0, 3.0].iter().enumerate() {
        let range = t * WINDOW_SIZE..(t + 1) * WINDOW_SIZE;
        assert!(buffer.positions()[range].iter().all(|p| p.y == *tag));
    }
}

#[test]
fn cursor_wraps_modulo_point_count() {
    let params = params();
    let mut traces = vec![indexed_trace(10, 0.0, 3, 9)];
    let mut buffer = VisualBuffer::new(params.capacity_for(1));
    cycle(&mut traces, &mut buffer, &params);
    assert_eq!(traces[0].cursor, 2);

    let xs: Vec<usize> = buffer.positions().iter().map(|p| p.x as usize).collect();
    assert_eq!(xs[0], 2);
    assert_eq!(&xs[..10], &[2, 3, 4, 5, 6, 7, 8, 9, 0, 1]);
    // window longer than the trace keeps wrapping
    for (i, x) in xs.iter().enumerate() {
        assert_eq!(*x, (2 + i) % 10);
    }
    // exactly one wrap from 9 to 0 per traversal of ten points
    let wraps = xs[..10].windows(2).filter(|w| w[1] < w[0]).count();
    assert_eq!(wraps, 1);
}

#[test]
fn opacity_ramp_is_linear_and_below_one_fifth() {
    let params = params();
    let mut traces = vec![indexed_trace(400, 0.0, 1, 0)];
    let mut buffer = VisualBuffer::new(params.capacity_for(1));
    cycle(&mut traces, &mut buffer, &params);
    let alphas = buffer.opacities();
    for (i, a) in alphas.iter().enumerate() {
        assert_eq!(*a, i as f32 / 500.0);
        assert!((0.0..0.2).contains(a));
    }
    for pair in alphas.windows(2) {
        assert!(pair[1] > pair[0]);
    }
}

#[test]
fn opacity_ramp_divisor_is_configurable() {
    let params = FlowParams {
        window_size: 4,
        opacity_ramp: 1.0,
        ..params()
    };
    let mut traces = vec![indexed_trace(10, 0.0, 1, 0)];
    let mut buffer = VisualBuffer::new(params.capacity_for(1));
    cycle(&mut traces, &mut buffer, &params);
    assert_eq!(buffer.opacities(), &[0.0, 0.25, 0.5, 0.75]);
}

#[test]
fn opacity_does_not_depend_on_trace_or_time() {
    let params = params();
    let mut traces = vec![indexed_trace(120, 0.0, 1, 0), indexed_trace(333, 1.0, 5, 17)];
    let mut buffer = VisualBuffer::new(params.capacity_for(2));
    cycle(&mut traces, &mut buffer, &params);
    let first: Vec<f32> = buffer.opacities().to_vec();
    cycle(&mut traces, &mut buffer, &params);
    assert_eq!(first, buffer.opacities());
    assert_eq!(&first[..WINDOW_SIZE], &first[WINDOW_SIZE..]);
}

#[test]
fn empty_traces_are_skipped_without_panicking() {
    let params = params();
    let mut traces = vec![
        indexed_trace(0, 0.0, 1, 0),
        indexed_trace(20, 5.0, 1, 0),
    ];
    let mut buffer = VisualBuffer::new(params.capacity_for(2));
    buffer.scatter(7);
    let written = cycle(&mut traces, &mut buffer, &params);
    assert_eq!(written, 2 * WINDOW_SIZE);
    assert_eq!(traces[0].cursor, 0);
    assert_eq!(traces[1].cursor, 1);
    // the empty trace's slots are blanked, not left with stale data
    assert!(buffer.opacities()[..WINDOW_SIZE].iter().all(|a| *a == 0.0));
    assert!(buffer.positions()[..WINDOW_SIZE]
        .iter()
        .all(|p| *p == params.center_offset));
    assert!(buffer.positions()[WINDOW_SIZE..].iter().all(|p| p.y == 5.0));
}

#[test]
fn two_paths_end_to_end() {
    let params = FlowParams::default();
    let paths = [
        Line {
            length: 500.0,
            y: 1.0,
        },
        Line {
            length: 1000.0,
            y: 2.0,
        },
    ];
    let traces = sample_traces(paths.iter(), &params).unwrap();
    assert_eq!(traces[0].point_count(), 100);
    assert_eq!(traces[1].point_count(), 200);

    let mut cycler = PointCycler::new(traces, params, SCATTER_SEED);
    assert_eq!(cycler.buffer().capacity(), 200);

    let written = cycler.tick();
    assert_eq!(written, 200);
    let offset_y = CENTER_OFFSET[1];
    assert!(cycler.buffer().positions()[..100]
        .iter()
        .all(|p| p.y == 1.0 + offset_y));
    assert!(cycler.buffer().positions()[100..]
        .iter()
        .all(|p| p.y == 2.0 + offset_y));

    cycler.tick();
    cycler.tick();
    assert_eq!(cycler.traces()[0].cursor, 3);
    assert_eq!(cycler.traces()[1].cursor, 3);
}

#[test]
fn buffer_capacity_never_changes() {
    let params = params();
    let mut cycler = PointCycler::new(
        vec![indexed_trace(50, 0.0, 1, 0), indexed_trace(0, 0.0, 1, 0)],
        params,
        1,
    );
    let cap = cycler.buffer().capacity();
    for _ in 0..500 {
        cycler.tick();
        assert_eq!(cycler.buffer().capacity(), cap);
        assert_eq!(cycler.buffer().opacities().len(), cap);
    }
}

#[test]
fn retuned_traces_keep_the_slot_count() {
    let params = params();
    let mut cycler = PointCycler::new(vec![indexed_trace(30, 0.0, 1, 0)], params, 1);
    let cap = cycler.buffer().capacity();
    assert_eq!(cap, WINDOW_SIZE);

    for trace in cycler.traces_mut() {
        trace.speed = 7;
        trace.cursor = 29;
    }
    assert_eq!(cycler.tick(), cap);
    assert_eq!(cycler.traces()[0].cursor, 6);
    assert_eq!(cycler.buffer().capacity(), cap);
    assert_eq!(cycler.buffer().positions()[0].x, 6.0);
}

#[test]
fn scatter_fills_the_pool_before_the_first_frame() {
    let mut buffer = VisualBuffer::new(1000);
    buffer.scatter(SCATTER_SEED);
    assert!(buffer
        .positions()
        .iter()
        .all(|p| p.x.abs() <= 500.0 && p.y.abs() <= 500.0 && p.z == 0.0));
    assert!(buffer.opacities().iter().all(|a| (0.0..0.5).contains(a)));
    assert!(buffer.opacities().iter().any(|a| *a > 0.0));

    let mut again = VisualBuffer::new(1000);
    again.scatter(SCATTER_SEED);
    assert_eq!(buffer.positions(), again.positions());
}

#[test]
fn buffer_bytes_are_tightly_packed() {
    let buffer = VisualBuffer::new(4);
    assert_eq!(buffer.position_bytes().len(), 4 * 3 * 4);
    assert_eq!(buffer.opacity_bytes().len(), 4 * 4);
}

// Host-side tests for svg path data parsing and measurement.

use flow_core::*;

#[test]
fn straight_line_measures_exactly() {
    let path = SvgPath::parse("M0 0 L500 0").unwrap();
    assert!((path.total_length() - 500.0).abs() < 1e-3);
    let mid = path.point_at_length(250.0).unwrap();
    assert!((mid.x - 250.0).abs() < 1e-3);
    assert!(mid.y.abs() < 1e-3);
}

#[test]
fn relative_and_closed_paths_include_every_edge() {
    // 100x50 rectangle drawn with relative commands and closed
    let path = SvgPath::parse("M10 10 h100 v50 h-100 z").unwrap();
    assert!((path.total_length() - 300.0).abs() < 1e-2);
}

#[test]
fn move_to_gaps_are_not_measured() {
    let path = SvgPath::parse("M0 0 L10 0 M100 100 L100 120").unwrap();
    assert!((path.total_length() - 30.0).abs() < 1e-3);
}

#[test]
fn curves_sample_in_order_along_the_path() {
    let path = SvgPath::parse("M0 0 Q 50 100 100 0").unwrap();
    let trace = sample_trace(&path, &FlowParams::default()).unwrap();
    assert!(trace.point_count() > 20);
    for pair in trace.points.windows(2) {
        // the parabola runs left to right
        assert!(pair[1].x > pair[0].x);
    }
}

#[test]
fn line_path_trace_matches_spacing() {
    let path = SvgPath::parse("M0 0 L1000 0").unwrap();
    let trace = sample_trace(&path, &FlowParams::default()).unwrap();
    assert_eq!(trace.point_count(), 200);
    let first = trace.points[0];
    let second = trace.points[1];
    assert!((second.x - first.x - 5.0).abs() < 1e-2);
}

#[test]
fn empty_path_data_is_zero_length() {
    let path = SvgPath::parse("").unwrap();
    assert_eq!(path.total_length(), 0.0);
    let trace = sample_trace(&path, &FlowParams::default()).unwrap();
    assert!(trace.is_empty());
    assert!(path.point_at_length(0.0).is_err());
}

#[test]
fn malformed_path_data_is_a_parse_error() {
    let err = SvgPath::parse("M0 0 L banana").err().unwrap();
    assert!(matches!(err, PathError::Parse(_)));
}

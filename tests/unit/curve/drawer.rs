use super::*;
use crate::surface::recording::RecordingSurface;

fn params(outer: u32, inner: u32, hole: f64) -> CurveParams {
    CurveParams {
        center: Point::new(10.0, -20.0),
        color: Rgb::new(0.2, 0.4, 0.6).unwrap(),
        outer_radius: outer,
        inner_radius: inner,
        hole_ratio: hole,
    }
}

#[test]
fn restart_positions_without_drawing() {
    let mut s = RecordingSurface::new();
    let mut c = Curve::new(CurveId(0), &params(100, 20, 0.3), 5).unwrap();
    assert_eq!(c.state(), CurveState::Created);

    c.restart(&mut s);
    assert_eq!(c.state(), CurveState::Positioned);
    assert_eq!(c.angle_degrees(), 0);
    assert!(s.strokes(CurveId(0)).is_empty());

    let pen = s.pen(CurveId(0)).unwrap();
    assert!(pen.down && pen.visible);
    assert_eq!(pen.color, c.color());
    let start = c.center() + c.model().point_at(0.0).to_vec2();
    assert_eq!(pen.position, start);
}

#[test]
fn completes_after_period_over_step_calls() {
    let mut s = RecordingSurface::new();
    let mut c = Curve::new(CurveId(0), &params(60, 40, 0.5), 5).unwrap();
    c.restart(&mut s);

    let steps = c.model().rotation_period_degrees() / 5;
    assert_eq!(steps, 144);
    for i in 1..steps {
        assert!(!c.step(&mut s), "complete too early at step {i}");
        assert_eq!(c.state(), CurveState::Drawing);
    }
    assert!(c.step(&mut s));
    assert!(c.is_complete());
    assert_eq!(c.angle_degrees(), 720);
    assert!(!s.is_visible(CurveId(0)));
    assert_eq!(s.segment_count(CurveId(0)), steps as usize);

    for _ in 0..10 {
        assert!(c.step(&mut s));
    }
    assert_eq!(c.angle_degrees(), 720);
    assert_eq!(s.segment_count(CurveId(0)), steps as usize);
}

#[test]
fn step_from_created_positions_first() {
    let mut s = RecordingSurface::new();
    let mut c = Curve::new(CurveId(1), &params(100, 20, 0.3), 5).unwrap();
    c.step(&mut s);
    assert_eq!(c.angle_degrees(), 5);
    assert_eq!(s.segment_count(CurveId(1)), 1);
    let first = &s.strokes(CurveId(1))[0];
    assert_eq!(first.points[0], c.center() + c.model().point_at(0.0).to_vec2());
}

#[test]
fn restart_is_idempotent_and_leaves_strokes() {
    let mut s = RecordingSurface::new();
    let mut c = Curve::new(CurveId(0), &params(100, 20, 0.3), 5).unwrap();
    c.restart(&mut s);
    for _ in 0..10 {
        c.step(&mut s);
    }
    c.restart(&mut s);
    c.restart(&mut s);
    assert_eq!(c.angle_degrees(), 0);
    assert_eq!(c.state(), CurveState::Positioned);
    assert_eq!(s.segment_count(CurveId(0)), 10);

    while !c.step(&mut s) {}
    c.restart(&mut s);
    assert!(!c.is_complete());
    assert!(s.is_visible(CurveId(0)));
}

#[test]
fn render_full_matches_stepping() {
    let p = params(100, 20, 0.3);

    let mut stepped = RecordingSurface::new();
    let mut a = Curve::new(CurveId(0), &p, 5).unwrap();
    a.restart(&mut stepped);
    while !a.step(&mut stepped) {}

    let mut full = RecordingSurface::new();
    let mut b = Curve::new(CurveId(0), &p, 5).unwrap();
    b.render_full(&mut full);

    assert!(b.is_complete());
    assert_eq!(b.angle_degrees(), 360);
    assert!(!full.is_visible(CurveId(0)));
    assert_eq!(stepped.strokes(CurveId(0)), full.strokes(CurveId(0)));
}

#[test]
fn render_full_closes_with_uneven_step() {
    let mut s = RecordingSurface::new();
    let mut c = Curve::new(CurveId(0), &params(100, 20, 0.3), 7).unwrap();
    c.render_full(&mut s);
    let points = &s.strokes(CurveId(0))[0].points;
    let first = points[0];
    let last = points[points.len() - 1];
    assert!((first.x - last.x).abs() < 1e-6 && (first.y - last.y).abs() < 1e-6);
    assert_eq!(c.angle_degrees(), 360);
}

#[test]
fn set_parameters_defers_until_restart() {
    let mut s = RecordingSurface::new();
    let mut c = Curve::new(CurveId(0), &params(100, 20, 0.3), 5).unwrap();
    c.restart(&mut s);
    c.step(&mut s);

    let next = CurveParams {
        center: Point::new(-50.0, 50.0),
        ..params(60, 40, 0.5)
    };
    c.set_parameters(&next).unwrap();
    assert_eq!(c.angle_degrees(), 5);
    assert_eq!(c.model().rotation_period_degrees(), 720);
    assert_eq!(c.params(), next);

    c.restart(&mut s);
    let start = Point::new(-50.0, 50.0) + c.model().point_at(0.0).to_vec2();
    assert_eq!(s.pen(CurveId(0)).unwrap().position, start);
}

#[test]
fn invalid_parameters_leave_curve_unchanged() {
    let mut c = Curve::new(CurveId(0), &params(100, 20, 0.3), 5).unwrap();
    let before = c.params();
    assert!(matches!(
        c.set_parameters(&params(0, 20, 0.3)),
        Err(SpiroError::InvalidGeometry(_))
    ));
    assert_eq!(c.params(), before);

    let off_range = CurveParams {
        color: Rgb {
            r: 7.5,
            g: f64::NAN,
            b: -3.0,
        },
        ..params(60, 40, 0.5)
    };
    assert!(matches!(
        c.set_parameters(&off_range),
        Err(SpiroError::DegenerateParameters(_))
    ));
    assert_eq!(c.params(), before);

    assert!(matches!(
        Curve::new(CurveId(0), &params(0, 20, 0.3), 5),
        Err(SpiroError::InvalidGeometry(_))
    ));
    assert!(matches!(
        Curve::new(CurveId(0), &params(100, 20, 0.3), 0),
        Err(SpiroError::DegenerateParameters(_))
    ));
}

#[test]
fn clear_and_toggle_do_not_touch_progress() {
    let mut s = RecordingSurface::new();
    let mut c = Curve::new(CurveId(2), &params(100, 20, 0.3), 5).unwrap();
    c.restart(&mut s);
    c.step(&mut s);
    c.step(&mut s);

    c.toggle_cursor(&mut s);
    assert!(!s.is_visible(CurveId(2)));
    c.toggle_cursor(&mut s);
    assert!(s.is_visible(CurveId(2)));

    c.clear(&mut s);
    assert!(s.strokes(CurveId(2)).is_empty());
    assert_eq!(c.angle_degrees(), 10);
    assert_eq!(c.state(), CurveState::Drawing);
}

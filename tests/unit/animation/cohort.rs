use super::*;
use crate::curve::drawer::CurveState;
use crate::curve::model::CurveParams;
use crate::foundation::core::{Point, Rgb};
use crate::surface::recording::RecordingSurface;

struct Fixed(CurveParams);

impl ParamSource for Fixed {
    fn sample(&mut self, _bounds: SurfaceBounds) -> SpiroResult<CurveParams> {
        Ok(self.0)
    }
}

/// Hands out its queue in order, then fails.
struct Scripted(Vec<CurveParams>);

impl ParamSource for Scripted {
    fn sample(&mut self, _bounds: SurfaceBounds) -> SpiroResult<CurveParams> {
        if self.0.is_empty() {
            return Err(SpiroError::config("script exhausted"));
        }
        Ok(self.0.remove(0))
    }
}

fn fixed(outer: u32, inner: u32, hole: f64) -> CurveParams {
    CurveParams {
        center: Point::ZERO,
        color: Rgb::BLACK,
        outer_radius: outer,
        inner_radius: inner,
        hole_ratio: hole,
    }
}

fn settings(curves: usize) -> CohortSettings {
    CohortSettings {
        curves,
        ..CohortSettings::default()
    }
}

#[test]
fn single_curve_completes_in_72_ticks() {
    let mut s = RecordingSurface::new();
    let mut cohort = Cohort::new(settings(1), Fixed(fixed(100, 20, 0.3)), &mut s).unwrap();
    assert_eq!(cohort.curves()[0].state(), CurveState::Positioned);

    for _ in 0..71 {
        let t = cohort.tick(&mut s);
        assert_eq!(t.completed, 0);
        assert!(!t.restarted);
    }
    let t = cohort.tick(&mut s);
    assert_eq!(t.completed, 1);
    assert!(!t.restarted);
    assert!(cohort.all_complete());
    assert_eq!(cohort.curves()[0].angle_degrees(), 360);
    assert_eq!(cohort.generation(), 0);
}

#[test]
fn tick_after_all_complete_restarts_everyone() {
    let mut s = RecordingSurface::new();
    let mut cohort = Cohort::new(settings(3), Fixed(fixed(60, 40, 0.5)), &mut s).unwrap();

    let ticks = 720 / 5;
    for _ in 0..ticks {
        assert!(!cohort.tick(&mut s).restarted);
    }
    assert!(cohort.all_complete());
    for c in cohort.curves() {
        assert!(s.segment_count(c.id()) > 0);
    }

    let t = cohort.tick(&mut s);
    assert!(t.restarted);
    assert_eq!(t.completed, 0);
    assert_eq!(t.next_in, Duration::from_millis(10));
    assert_eq!(cohort.generation(), 1);
    assert_eq!(cohort.ticks(), ticks + 1);
    for c in cohort.curves() {
        assert!(!c.is_complete());
        assert_eq!(c.angle_degrees(), 0);
        assert_eq!(s.segment_count(c.id()), 0);
        assert!(s.is_visible(c.id()));
    }
}

#[test]
fn waits_for_the_slowest_curve() {
    let mut s = RecordingSurface::new();
    let source = Scripted(vec![fixed(100, 20, 0.3), fixed(60, 40, 0.5)]);
    let mut cohort = Cohort::new(settings(2), source, &mut s).unwrap();

    for _ in 0..72 {
        cohort.tick(&mut s);
    }
    assert!(cohort.curves()[0].is_complete());
    assert!(!cohort.curves()[1].is_complete());

    let t = cohort.tick(&mut s);
    assert_eq!(t.completed, 1);
    assert_eq!(cohort.curves()[0].angle_degrees(), 360);

    for _ in 74..=144 {
        assert!(!cohort.tick(&mut s).restarted);
    }
    assert!(cohort.all_complete());
    assert!(cohort.tick(&mut s).restarted);
}

#[test]
fn failed_resample_keeps_previous_parameters() {
    let mut s = RecordingSurface::new();
    let source = Scripted(vec![fixed(100, 20, 0.3)]);
    let mut cohort = Cohort::new(settings(1), source, &mut s).unwrap();
    let before = cohort.curves()[0].params();

    cohort.restart_all(&mut s);
    assert_eq!(cohort.curves()[0].params(), before);
    assert_eq!(cohort.curves()[0].state(), CurveState::Positioned);
    assert_eq!(cohort.generation(), 1);
}

#[test]
fn resampling_changes_parameters() {
    let mut s = RecordingSurface::new();
    let bounds = SurfaceBounds::new(800, 600).unwrap();
    let mut cohort = Cohort::new(
        CohortSettings {
            bounds,
            ..settings(4)
        },
        ParameterSampler::seeded(5),
        &mut s,
    )
    .unwrap();
    let before: Vec<_> = cohort.curves().iter().map(Curve::params).collect();
    cohort.restart_all(&mut s);
    let after: Vec<_> = cohort.curves().iter().map(Curve::params).collect();
    assert_ne!(before, after);
    assert_eq!(cohort.bounds(), bounds);
}

#[test]
fn toggle_visibility_only_flips_cursors() {
    let mut s = RecordingSurface::new();
    let mut cohort = Cohort::new(settings(2), Fixed(fixed(100, 20, 0.3)), &mut s).unwrap();
    cohort.tick(&mut s);

    cohort.toggle_visibility(&mut s);
    assert!(cohort.curves().iter().all(|c| !s.is_visible(c.id())));
    assert!(cohort.curves().iter().all(|c| c.angle_degrees() == 5));
    assert!(cohort.curves().iter().all(|c| s.segment_count(c.id()) == 1));

    cohort.toggle_visibility(&mut s);
    assert!(cohort.curves().iter().all(|c| s.is_visible(c.id())));
}

#[test]
fn construction_validates_before_drawing() {
    let mut s = RecordingSurface::new();
    assert!(matches!(
        Cohort::new(settings(0), Fixed(fixed(100, 20, 0.3)), &mut s),
        Err(SpiroError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        Cohort::new(
            CohortSettings {
                tick_interval_ms: 0,
                ..settings(1)
            },
            Fixed(fixed(100, 20, 0.3)),
            &mut s
        ),
        Err(SpiroError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        Cohort::new(
            CohortSettings {
                bounds: SurfaceBounds::new(90, 400).unwrap(),
                ..settings(1)
            },
            ParameterSampler::seeded(0),
            &mut s
        ),
        Err(SpiroError::InvalidSurfaceBounds(_))
    ));
    assert!(matches!(
        Cohort::new(settings(2), Fixed(fixed(0, 20, 0.3)), &mut s),
        Err(SpiroError::InvalidGeometry(_))
    ));
    // Second curve fails to sample: nothing was positioned.
    assert!(Cohort::new(settings(2), Scripted(vec![fixed(100, 20, 0.3)]), &mut s).is_err());
    assert_eq!(s.curve_ids().count(), 0);
}

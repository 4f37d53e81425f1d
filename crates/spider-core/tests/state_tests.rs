// Host-side tests for the owned component state: frame ordering, pointer
// input, orbit ticks, resize and drawing through a recording surface.

use glam::Vec2;
use spider_core::*;

#[derive(Debug, PartialEq)]
enum Op {
    Clear,
    Fill(String),
    Stroke(String, f32),
    Circle(Vec2, f32),
    Line(Vec2, Vec2),
}

struct Recorder {
    w: f32,
    h: f32,
    ops: Vec<Op>,
}

impl Recorder {
    fn new(w: f32, h: f32) -> Self {
        Self { w, h, ops: Vec::new() }
    }

    fn lines(&self) -> Vec<(Vec2, Vec2)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Line(a, b) => Some((*a, *b)),
                _ => None,
            })
            .collect()
    }

    fn circles(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, Op::Circle(..))).count()
    }
}

impl Surface for Recorder {
    fn size(&self) -> (f32, f32) {
        (self.w, self.h)
    }
    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }
    fn set_fill(&mut self, color: &str) {
        self.ops.push(Op::Fill(color.to_string()));
    }
    fn set_stroke(&mut self, color: &str, width: f32) {
        self.ops.push(Op::Stroke(color.to_string(), width));
    }
    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        self.ops.push(Op::Circle(center, radius));
    }
    fn line(&mut self, from: Vec2, to: Vec2) {
        self.ops.push(Op::Line(from, to));
    }
}

fn state() -> SpiderState {
    let cfg = SpiderConfig {
        seed: Some(99),
        ..Default::default()
    };
    SpiderState::new(cfg, 800.0, 600.0).unwrap()
}

#[test]
fn new_state_seeds_viewport_and_centres_cursor() {
    let s = state();
    assert_eq!(s.web().len(), 100);
    assert_eq!(s.cursor().smoothed(), Vec2::new(400.0, 300.0));
    assert_eq!(s.cursor().radius(), 40.0);
    assert_eq!(s.orbit().angle(), 0.0);
}

#[test]
fn invalid_config_is_rejected() {
    let cfg = SpiderConfig {
        velocity_damping: 1.2,
        ..Default::default()
    };
    assert!(matches!(
        SpiderState::new(cfg, 800.0, 600.0),
        Err(ConfigError::DampingOutOfRange(_))
    ));
}

#[test]
fn oversized_point_count_is_rejected_before_allocation() {
    let cfg = SpiderConfig {
        point_count: u32::MAX as usize,
        ..Default::default()
    };
    assert!(matches!(
        SpiderState::new(cfg, 800.0, 600.0),
        Err(ConfigError::TooManyPoints { .. })
    ));
}

#[test]
fn render_draws_every_point_then_close_pairs() {
    let s = state();
    let mut rec = Recorder::new(800.0, 600.0);
    let drawn = s.render(&mut rec);

    assert_eq!(rec.ops[0], Op::Clear);
    assert_eq!(rec.ops[1], Op::Fill("white".into()));
    assert_eq!(rec.circles(), 100);
    assert!(rec
        .ops
        .iter()
        .any(|op| *op == Op::Stroke("white".into(), 0.5)));

    let lines = rec.lines();
    assert_eq!(lines.len(), drawn);
    for (a, b) in &lines {
        assert!(a.distance(*b) < 100.0);
    }

    let pts = s.web().points();
    let mut expected = 0;
    for i in 0..pts.len() {
        for j in (i + 1)..pts.len() {
            if pts[i].position.distance(pts[j].position) < 100.0 {
                expected += 1;
            }
        }
    }
    assert_eq!(drawn, expected);
}

#[test]
fn zero_sized_surface_renders_nothing() {
    let s = state();
    let mut rec = Recorder::new(0.0, 600.0);
    assert_eq!(s.render(&mut rec), 0);
    assert!(rec.ops.is_empty());
}

#[test]
fn pointer_move_sets_radius_from_speed() {
    let mut s = state();
    for (movement, radius) in [
        (Vec2::ZERO, 20.0),
        (Vec2::new(3.0, 4.0), 20.0),
        (Vec2::new(15.0, 20.0), 80.0),
        (Vec2::new(0.0, 12.5), 50.0),
    ] {
        s.on_pointer_move(Vec2::new(10.0, 10.0), movement);
        assert!((s.cursor().radius() - radius).abs() < 1e-4, "{movement:?}");
    }
}

#[test]
fn orbit_angle_after_ticks() {
    let mut s = state();
    let n = 100_000u32;
    for _ in 0..n {
        s.orbit_tick();
    }
    let expected = (0.1 * n as f64).rem_euclid(std::f64::consts::TAU);
    assert!((s.orbit().angle() - expected).abs() < 1e-6);
    let off = s.glyph_position() - s.cursor().smoothed();
    let want = Vec2::new(expected.cos() as f32, expected.sin() as f32) * s.cursor().radius();
    assert!(off.distance(want) < 1e-2, "{off:?} vs {want:?}");
}

#[test]
fn advance_smooths_cursor_before_stepping_web() {
    let mut s = state();
    s.on_pointer_move(Vec2::new(0.0, 0.0), Vec2::new(40.0, 30.0));
    s.advance(1.0 / 60.0);
    let smoothed = s.cursor().smoothed();
    assert!(smoothed.x < 400.0 && smoothed.y < 300.0);
    for _ in 0..600 {
        s.advance(1.0 / 60.0);
    }
    assert_eq!(s.cursor().smoothed(), Vec2::ZERO);
}

#[test]
fn resize_reseeds_for_new_viewport() {
    let mut s = state();
    for _ in 0..10 {
        s.advance(1.0 / 60.0);
    }
    s.resize(320.0, 240.0);
    assert_eq!(s.viewport(), Vec2::new(320.0, 240.0));
    assert_eq!(s.web().len(), 100);
    for p in s.web().points() {
        assert!(p.position.x < 320.0 && p.position.y < 240.0);
        assert_eq!(p.velocity, Vec2::ZERO);
    }
    assert!(s.cursor().smoothed().x <= 320.0);
}

#[test]
fn cursor_parked_on_point_stays_finite_over_many_frames() {
    let mut s = state();
    let target = s.web().points()[3].position;
    s.on_pointer_move(target, Vec2::ZERO);
    for _ in 0..1000 {
        s.advance(1.0 / 60.0);
    }
    for p in s.web().points() {
        assert!(p.position.is_finite() && p.velocity.is_finite());
    }
}

use crate::constants::{ATTRACTION_EPSILON, BRUTE_FORCE_MAX_POINTS};
use crate::grid::SpatialGrid;
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WebPoint {
    pub position: Vec2,
    pub velocity: Vec2,
}

/// Physics parameters for [`Web::step`].
#[derive(Clone, Copy, Debug)]
pub struct WebParams {
    pub speed_factor: f32,
    pub velocity_damping: f32,
}

/// The set of points pulled toward the cursor.
///
/// Owns its RNG so every reset after a resize draws from the same stream;
/// a seeded web replays the same layouts.
pub struct Web {
    points: Vec<WebPoint>,
    rng: StdRng,
}

impl Web {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self {
            points: Vec::new(),
            rng,
        }
    }

    /// Replaces every point with `count` fresh ones, uniform in
    /// `[0, width) x [0, height)` with zero velocity.
    ///
    /// A degenerate viewport (zero or negative extent) places points at the
    /// origin along that axis instead of panicking on an empty range.
    pub fn initialize(&mut self, width: f32, height: f32, count: usize) {
        self.points.clear();
        self.points.reserve(count);
        for _ in 0..count {
            let x = sample_axis(&mut self.rng, width);
            let y = sample_axis(&mut self.rng, height);
            self.points.push(WebPoint {
                position: Vec2::new(x, y),
                velocity: Vec2::ZERO,
            });
        }
    }

    /// Advances every point one frame toward `cursor`.
    pub fn step(&mut self, cursor: Vec2, params: WebParams) {
        for p in &mut self.points {
            step_point(p, cursor, params);
        }
    }

    pub fn points(&self) -> &[WebPoint] {
        &self.points
    }

    pub fn points_mut(&mut self) -> &mut [WebPoint] {
        &mut self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Index pairs `(i, j)`, `i < j`, whose points are strictly closer than
    /// `max_dist`. Small webs use a direct all-pairs scan, larger ones go
    /// through [`SpatialGrid`]; both produce the same set.
    pub fn connections(&self, max_dist: f32) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        if max_dist <= 0.0 || self.points.len() < 2 {
            return pairs;
        }
        if self.points.len() <= BRUTE_FORCE_MAX_POINTS {
            for (i, a) in self.points.iter().enumerate() {
                for (j, b) in self.points.iter().enumerate().skip(i + 1) {
                    if a.position.distance(b.position) < max_dist {
                        pairs.push((i, j));
                    }
                }
            }
        } else {
            let positions: Vec<Vec2> = self.points.iter().map(|p| p.position).collect();
            let grid = SpatialGrid::build(&positions, max_dist);
            grid.for_each_pair_within(&positions, max_dist, |i, j| pairs.push((i, j)));
            pairs.sort_unstable();
        }
        pairs
    }
}

#[inline]
fn sample_axis(rng: &mut StdRng, extent: f32) -> f32 {
    if extent > 0.0 {
        rng.gen_range(0.0..extent)
    } else {
        0.0
    }
}

#[inline]
pub fn step_point(p: &mut WebPoint, cursor: Vec2, params: WebParams) {
    let to_cursor = cursor - p.position;
    let distance = to_cursor.length();
    if distance > ATTRACTION_EPSILON {
        p.velocity += to_cursor / distance * params.speed_factor;
    }
    p.velocity *= params.velocity_damping;
    p.position += p.velocity;
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARAMS: WebParams = WebParams {
        speed_factor: 0.03,
        velocity_damping: 0.92,
    };

    #[test]
    fn initialize_replaces_previous_points() {
        let mut web = Web::new(Some(1));
        web.initialize(800.0, 600.0, 100);
        web.initialize(300.0, 200.0, 10);
        assert_eq!(web.len(), 10);
        for p in web.points() {
            assert!(p.position.x < 300.0 && p.position.y < 200.0);
        }
    }

    #[test]
    fn zero_sized_viewport_does_not_panic() {
        let mut web = Web::new(Some(2));
        web.initialize(0.0, 0.0, 5);
        assert_eq!(web.len(), 5);
        assert!(web.points().iter().all(|p| p.position == Vec2::ZERO));
    }

    #[test]
    fn point_on_cursor_only_decays() {
        let mut p = WebPoint {
            position: Vec2::new(10.0, 10.0),
            velocity: Vec2::new(1.0, 0.0),
        };
        step_point(&mut p, Vec2::new(10.0, 10.0), PARAMS);
        assert!((p.velocity.x - 0.92).abs() < 1e-6);
        assert_eq!(p.velocity.y, 0.0);
        assert!(p.position.is_finite());
    }

    #[test]
    fn force_points_at_cursor() {
        let mut p = WebPoint::default();
        step_point(&mut p, Vec2::new(0.0, 50.0), PARAMS);
        assert_eq!(p.velocity.x, 0.0);
        assert!((p.velocity.y - 0.03 * 0.92).abs() < 1e-6);
        assert!((p.position.y - 0.03 * 0.92).abs() < 1e-6);
    }

    #[test]
    fn same_seed_same_layout() {
        let mut a = Web::new(Some(42));
        let mut b = Web::new(Some(42));
        a.initialize(640.0, 480.0, 20);
        b.initialize(640.0, 480.0, 20);
        assert_eq!(a.points(), b.points());
    }
}

//! Damped spring used to smooth the cursor.
//!
//! Unit mass, acceleration `-k * (x - target) - c * v`. Integrated with
//! semi-implicit Euler in fixed sub-steps so the result does not depend on
//! the display refresh rate. With the default `k = 80`, `c = 10` the damping
//! ratio is about 0.56: a slight overshoot, then settle.

use crate::constants::{
    SPRING_MAX_FRAME_SEC, SPRING_MAX_SUBSTEP_SEC, SPRING_REST_DELTA, SPRING_REST_SPEED,
};
use glam::Vec2;

#[derive(Clone, Copy, Debug)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct Spring2 {
    pub position: Vec2,
    pub velocity: Vec2,
    pub target: Vec2,
    params: SpringParams,
}

impl Spring2 {
    pub fn new(at: Vec2, params: SpringParams) -> Self {
        Self {
            position: at,
            velocity: Vec2::ZERO,
            target: at,
            params,
        }
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    pub fn is_at_rest(&self) -> bool {
        self.velocity.length() < SPRING_REST_SPEED
            && self.position.distance(self.target) < SPRING_REST_DELTA
    }

    /// Advances the spring by `dt_sec`. Non-finite or negative `dt` is a
    /// no-op; gaps longer than `SPRING_MAX_FRAME_SEC` are clamped.
    pub fn advance(&mut self, dt_sec: f32) {
        if !dt_sec.is_finite() || dt_sec <= 0.0 || self.is_at_rest() {
            return;
        }
        let dt = dt_sec.min(SPRING_MAX_FRAME_SEC);
        let steps = (dt / SPRING_MAX_SUBSTEP_SEC).ceil().max(1.0) as u32;
        let h = dt / steps as f32;
        let k = self.params.stiffness;
        let c = self.params.damping;
        for _ in 0..steps {
            let accel = -k * (self.position - self.target) - c * self.velocity;
            self.velocity += accel * h;
            self.position += self.velocity * h;
        }
        if self.is_at_rest() {
            self.position = self.target;
            self.velocity = Vec2::ZERO;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARAMS: SpringParams = SpringParams {
        stiffness: 80.0,
        damping: 10.0,
    };

    #[test]
    fn settles_on_target() {
        let mut s = Spring2::new(Vec2::ZERO, PARAMS);
        s.set_target(Vec2::new(300.0, -120.0));
        for _ in 0..600 {
            s.advance(1.0 / 60.0);
        }
        assert_eq!(s.position, Vec2::new(300.0, -120.0));
        assert!(s.is_at_rest());
    }

    #[test]
    fn overshoots_once_when_underdamped() {
        let mut s = Spring2::new(Vec2::ZERO, PARAMS);
        s.set_target(Vec2::new(100.0, 0.0));
        let mut peak = 0.0f32;
        for _ in 0..120 {
            s.advance(1.0 / 60.0);
            peak = peak.max(s.position.x);
        }
        assert!(peak > 100.0, "expected overshoot, peak {peak}");
        assert!(peak < 130.0, "overshoot too large, peak {peak}");
    }

    #[test]
    fn long_gap_is_clamped() {
        let mut a = Spring2::new(Vec2::ZERO, PARAMS);
        let mut b = a;
        a.set_target(Vec2::new(50.0, 50.0));
        b.set_target(Vec2::new(50.0, 50.0));
        a.advance(5.0);
        b.advance(SPRING_MAX_FRAME_SEC);
        assert_eq!(a.position, b.position);
    }

    #[test]
    fn bad_dt_is_ignored() {
        let mut s = Spring2::new(Vec2::ZERO, PARAMS);
        s.set_target(Vec2::new(10.0, 0.0));
        s.advance(f32::NAN);
        s.advance(-1.0);
        assert_eq!(s.position, Vec2::ZERO);
    }
}

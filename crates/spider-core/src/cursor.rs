use crate::spring::{Spring2, SpringParams};
use glam::Vec2;

/// Mapping from pointer speed to orbit radius.
#[derive(Clone, Copy, Debug)]
pub struct RadiusMapping {
    pub multiplier: f32,
    pub min: f32,
    pub max: f32,
}

/// `clamp(speed * multiplier, min, max)`. Non-finite speeds map to `min`.
#[inline]
pub fn orbit_radius_for_speed(speed: f32, mapping: RadiusMapping) -> f32 {
    let raw = speed * mapping.multiplier;
    if !raw.is_finite() {
        return mapping.min;
    }
    raw.clamp(mapping.min, mapping.max)
}

/// Raw pointer target, its spring-smoothed follower and the speed-derived
/// orbit radius.
#[derive(Clone, Debug)]
pub struct CursorTracker {
    spring: Spring2,
    radius: f32,
    mapping: RadiusMapping,
}

impl CursorTracker {
    pub fn new(
        start: Vec2,
        initial_radius: f32,
        spring: SpringParams,
        mapping: RadiusMapping,
    ) -> Self {
        Self {
            spring: Spring2::new(start, spring),
            radius: initial_radius,
            mapping,
        }
    }

    /// Handles one pointer-move: `movement` is the delta since the previous
    /// event, `position` the absolute pointer location.
    pub fn on_pointer_move(&mut self, position: Vec2, movement: Vec2) {
        let speed = movement.x.hypot(movement.y);
        self.radius = orbit_radius_for_speed(speed, self.mapping);
        if position.is_finite() {
            self.spring.set_target(position);
        }
    }

    pub fn advance(&mut self, dt_sec: f32) {
        self.spring.advance(dt_sec);
    }

    /// Keeps the target and smoothed position inside a resized viewport.
    pub fn clamp_to(&mut self, width: f32, height: f32) {
        let max = Vec2::new(width.max(0.0), height.max(0.0));
        self.spring.target = self.spring.target.clamp(Vec2::ZERO, max);
        self.spring.position = self.spring.position.clamp(Vec2::ZERO, max);
    }

    pub fn target(&self) -> Vec2 {
        self.spring.target
    }

    pub fn smoothed(&self) -> Vec2 {
        self.spring.position
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

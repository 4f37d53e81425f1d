use glam::Vec2;
use std::f64::consts::TAU;

/// Angle of the glyph circling the cursor, advanced by a fixed step per
/// timer tick. Kept in `f64` and wrapped into `[0, 2π)` on every tick so the
/// step never drowns in the magnitude of the accumulated angle.
#[derive(Clone, Copy, Debug, Default)]
pub struct Orbit {
    angle: f64,
    step: f64,
}

impl Orbit {
    pub fn new(step: f64) -> Self {
        Self { angle: 0.0, step }
    }

    pub fn with_angle(angle: f64, step: f64) -> Self {
        Self {
            angle: angle.rem_euclid(TAU),
            step,
        }
    }

    pub fn tick(&mut self) {
        self.angle = (self.angle + self.step).rem_euclid(TAU);
    }

    /// Current angle in `[0, 2π)`.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Offset from the orbit centre at `radius`.
    #[inline]
    pub fn offset(&self, radius: f32) -> Vec2 {
        let (s, c) = self.angle.sin_cos();
        Vec2::new(c as f32 * radius, s as f32 * radius)
    }

    #[inline]
    pub fn glyph_position(&self, center: Vec2, radius: f32) -> Vec2 {
        center + self.offset(radius)
    }
}

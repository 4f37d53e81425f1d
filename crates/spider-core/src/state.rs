//! Owned state of one mounted web effect.
//!
//! Front-ends hold a single `SpiderState` per mounted component and route
//! every host callback (frame, pointer move, resize, orbit tick) through it.
//! Dropping it is the whole teardown of the simulation side.

use crate::config::{ConfigError, SpiderConfig};
use crate::cursor::{CursorTracker, RadiusMapping};
use crate::draw::{render_web, Surface, WebStyle};
use crate::orbit::Orbit;
use crate::spring::SpringParams;
use crate::web::{Web, WebParams};
use glam::Vec2;

pub struct SpiderState {
    config: SpiderConfig,
    viewport: Vec2,
    web: Web,
    cursor: CursorTracker,
    orbit: Orbit,
}

impl SpiderState {
    /// Validates `config` and seeds the web for a `width x height` viewport
    /// with the cursor resting at its centre.
    pub fn new(config: SpiderConfig, width: f32, height: f32) -> Result<Self, ConfigError> {
        config.validate()?;
        let viewport = Vec2::new(width.max(0.0), height.max(0.0));
        let mut web = Web::new(config.seed);
        web.initialize(viewport.x, viewport.y, config.point_count);
        let cursor = CursorTracker::new(
            viewport * 0.5,
            config.orbit_radius.clamp(config.orbit_radius_min, config.orbit_radius_max),
            SpringParams {
                stiffness: config.spring_stiffness,
                damping: config.spring_damping,
            },
            RadiusMapping {
                multiplier: config.radius_speed_multiplier,
                min: config.orbit_radius_min,
                max: config.orbit_radius_max,
            },
        );
        let orbit = Orbit::new(config.orbit_step_rad);
        log::debug!(
            "[state] {} points in {:.0}x{:.0}",
            web.len(),
            viewport.x,
            viewport.y
        );
        Ok(Self {
            config,
            viewport,
            web,
            cursor,
            orbit,
        })
    }

    /// One animation frame: smooth the cursor by `dt_sec`, then step the web
    /// toward the smoothed position.
    pub fn advance(&mut self, dt_sec: f32) {
        self.cursor.advance(dt_sec);
        self.web.step(
            self.cursor.smoothed(),
            WebParams {
                speed_factor: self.config.speed_factor,
                velocity_damping: self.config.velocity_damping,
            },
        );
    }

    /// Draws the current web. Call after [`Self::advance`] for the frame.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> usize {
        let style = WebStyle {
            point_radius: self.config.point_radius,
            point_color: &self.config.point_color,
            line_width: self.config.line_width,
            line_color: &self.config.line_color,
            connect_distance: self.config.connect_distance,
        };
        render_web(surface, &self.web, &style)
    }

    pub fn on_pointer_move(&mut self, position: Vec2, movement: Vec2) {
        self.cursor.on_pointer_move(position, movement);
    }

    /// Viewport changed: re-seed every point for the new size.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width.max(0.0), height.max(0.0));
        self.web
            .initialize(self.viewport.x, self.viewport.y, self.config.point_count);
        self.cursor.clamp_to(self.viewport.x, self.viewport.y);
    }

    pub fn orbit_tick(&mut self) {
        self.orbit.tick();
    }

    /// Where the glyph sits this frame.
    pub fn glyph_position(&self) -> Vec2 {
        self.orbit
            .glyph_position(self.cursor.smoothed(), self.cursor.radius())
    }

    pub fn config(&self) -> &SpiderConfig {
        &self.config
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn web(&self) -> &Web {
        &self.web
    }

    pub fn cursor(&self) -> &CursorTracker {
        &self.cursor
    }

    pub fn orbit(&self) -> &Orbit {
        &self.orbit
    }
}

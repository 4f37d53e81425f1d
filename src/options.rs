use spider_core::SpiderConfig;
use wasm_bindgen::prelude::*;

/// JS-facing builder for the effect's tunables. Unset fields keep their
/// defaults; values are validated when passed to `mount_with_options`.
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct SpiderOptions {
    config: SpiderConfig,
}

#[wasm_bindgen]
impl SpiderOptions {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    #[wasm_bindgen(setter = pointCount)]
    pub fn set_point_count(&mut self, value: u32) {
        self.config.point_count = value as usize;
    }

    #[wasm_bindgen(setter = speedFactor)]
    pub fn set_speed_factor(&mut self, value: f32) {
        self.config.speed_factor = value;
    }

    #[wasm_bindgen(setter = velocityDamping)]
    pub fn set_velocity_damping(&mut self, value: f32) {
        self.config.velocity_damping = value;
    }

    #[wasm_bindgen(setter = connectDistance)]
    pub fn set_connect_distance(&mut self, value: f32) {
        self.config.connect_distance = value;
    }

    #[wasm_bindgen(setter = springStiffness)]
    pub fn set_spring_stiffness(&mut self, value: f32) {
        self.config.spring_stiffness = value;
    }

    #[wasm_bindgen(setter = springDamping)]
    pub fn set_spring_damping(&mut self, value: f32) {
        self.config.spring_damping = value;
    }

    #[wasm_bindgen(setter = orbitStep)]
    pub fn set_orbit_step(&mut self, value: f64) {
        self.config.orbit_step_rad = value;
    }

    #[wasm_bindgen(setter = orbitPeriodMs)]
    pub fn set_orbit_period_ms(&mut self, value: u32) {
        self.config.orbit_period_ms = value;
    }

    #[wasm_bindgen(setter = orbitRadius)]
    pub fn set_orbit_radius(&mut self, value: f32) {
        self.config.orbit_radius = value;
    }

    #[wasm_bindgen(setter = orbitRadiusMin)]
    pub fn set_orbit_radius_min(&mut self, value: f32) {
        self.config.orbit_radius_min = value;
    }

    #[wasm_bindgen(setter = orbitRadiusMax)]
    pub fn set_orbit_radius_max(&mut self, value: f32) {
        self.config.orbit_radius_max = value;
    }

    #[wasm_bindgen(setter = radiusSpeedMultiplier)]
    pub fn set_radius_speed_multiplier(&mut self, value: f32) {
        self.config.radius_speed_multiplier = value;
    }

    #[wasm_bindgen(setter = pointRadius)]
    pub fn set_point_radius(&mut self, value: f32) {
        self.config.point_radius = value;
    }

    #[wasm_bindgen(setter = lineWidth)]
    pub fn set_line_width(&mut self, value: f32) {
        self.config.line_width = value;
    }

    #[wasm_bindgen(setter = pointColor)]
    pub fn set_point_color(&mut self, value: String) {
        self.config.point_color = value;
    }

    #[wasm_bindgen(setter = lineColor)]
    pub fn set_line_color(&mut self, value: String) {
        self.config.line_color = value;
    }

    #[wasm_bindgen(setter = glyph)]
    pub fn set_glyph(&mut self, value: String) {
        self.config.glyph = value;
    }

    #[wasm_bindgen(setter = seed)]
    pub fn set_seed(&mut self, value: Option<u32>) {
        self.config.seed = value.map(u64::from);
    }
}

impl SpiderOptions {
    pub fn into_config(self) -> SpiderConfig {
        self.config
    }
}
